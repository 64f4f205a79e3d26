//! # Serial Transport
//!
//! Opens the printer's character device (UART or USB-serial adapter) as
//! a raw, ordered, blocking byte sink.
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary command data passes
//! through unmodified:
//!
//! - **No input processing**: disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity
//! - **No echo**: disable ECHO, ECHONL
//! - **Non-canonical mode**: disable ICANON (no line buffering)
//! - **No XON/XOFF flow control**: 0x11 (DC1) and 0x13 (DC3) appear in
//!   raster data and must not be interpreted
//!
//! ## Scope
//!
//! This is a thin sink: sequential blocking writes plus an explicit
//! flush. There is no retry, device discovery, or flow control; the
//! encoder assumes a reliable ordered channel and propagates any sink
//! failure unmodified.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use crate::error::BrasaError;

/// Default serial device path (Raspberry Pi UART).
pub const DEFAULT_DEVICE: &str = "/dev/ttyAMA0";

/// # Serial Printer Transport
///
/// An exclusively-owned raw-mode character device implementing
/// [`std::io::Write`], suitable as the sink of a
/// [`crate::printer::Printer`].
///
/// ## Example
///
/// ```no_run
/// use brasa::transport::SerialTransport;
/// use std::io::Write;
///
/// let mut transport = SerialTransport::open("/dev/ttyAMA0")?;
/// transport.write_all(&[0x1B, 0x40])?; // reset
/// transport.flush()?;
/// # Ok::<(), brasa::error::BrasaError>(())
/// ```
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw binary output.
    ///
    /// ## Errors
    ///
    /// Returns [`BrasaError::Transport`] if:
    /// - the device doesn't exist
    /// - permission is denied (may need the dialout group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, BrasaError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            BrasaError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd())?;

        Ok(Self { file })
    }

    /// Open with the default device path.
    pub fn open_default() -> Result<Self, BrasaError> {
        Self::open(DEFAULT_DEVICE)
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Configure a file descriptor for raw TTY mode.
///
/// Disables all input/output processing so binary data passes through
/// unmodified. IXON/IXOFF/IXANY matter most: DC1 (0x11) and DC3 (0x13)
/// occur freely in packed raster rows and would otherwise be eaten as
/// software flow control.
fn configure_tty_raw(fd: i32) -> Result<(), BrasaError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(BrasaError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(BrasaError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}
