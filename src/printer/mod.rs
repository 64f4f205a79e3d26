//! # Printer Session
//!
//! [`Printer`] is the stateful surface of the crate: it owns the output
//! sink exclusively for its lifetime and turns high-level printing
//! intents into synchronous writes of the byte sequences built by
//! [`crate::protocol`].
//!
//! ## Model
//!
//! - Every operation performs its writes and returns only after they
//!   (and any mandated pacing delay) complete. There is no internal
//!   buffering, queuing, or concurrency.
//! - Sink failures propagate unmodified as [`BrasaError::Io`]; nothing
//!   is retried or swallowed.
//! - The printer firmware retains alignment and style as device state;
//!   this session does not shadow it. Style "on"/"off" calls are
//!   independent commands and the caller is responsible for pairing
//!   them. The styled-line helpers are the exception: they always
//!   restore style and underline to zero before returning.
//!
//! ## Example
//!
//! ```no_run
//! use brasa::printer::{Printer, PrinterConfig};
//! use brasa::protocol::style::Style;
//! use brasa::transport::SerialTransport;
//!
//! let sink = SerialTransport::open("/dev/ttyAMA0")?;
//! let mut printer = Printer::new(sink, PrinterConfig::default());
//!
//! printer.init()?;
//! printer.write_line_styled("TOTAL 12.50", Style::BOLD | Style::DOUBLE_HEIGHT)?;
//! printer.horizontal_line(32)?;
//! printer.feed_lines(3)?;
//! # Ok::<(), brasa::error::BrasaError>(())
//! ```

pub mod config;

use std::io::Write;
use std::thread;
use std::time::Duration;

use image::GrayImage;
use tracing::{debug, warn};

use crate::encoding::CodePage;
use crate::error::BrasaError;
use crate::protocol::barcode::{self, qr, Symbology};
use crate::protocol::commands::{self, Alignment};
use crate::protocol::raster;
use crate::protocol::style::{Style, UnderlineHeight};

pub use config::PrinterConfig;

/// A session over an exclusively-owned byte sink.
///
/// `W` is any ordered, blocking writer: a [`crate::transport::SerialTransport`]
/// in production, a `Vec<u8>` in tests.
pub struct Printer<W: Write> {
    sink: W,
    config: PrinterConfig,
}

impl<W: Write> Printer<W> {
    /// Create a session. No bytes are written; call [`Printer::init`]
    /// to emit the session preamble.
    pub fn new(sink: W, config: PrinterConfig) -> Self {
        Self { sink, config }
    }

    /// The immutable session configuration.
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Release the sink. Flushing and closing are the caller's
    /// responsibility; the session performs no close logic of its own.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// The active code page.
    pub fn code_page(&self) -> CodePage {
        self.config.code_page
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), BrasaError> {
        self.sink.write_all(bytes)?;
        Ok(())
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    // ------------------------------------------------------------------
    // Session control
    // ------------------------------------------------------------------

    /// Emit the session preamble: reset, heating parameters, code-page
    /// select. The documented first call on a fresh session.
    pub fn init(&mut self) -> Result<(), BrasaError> {
        debug!(
            code_page = self.config.code_page.name(),
            max_printing_dots = self.config.max_printing_dots,
            heating_time = self.config.heating_time,
            heating_interval = self.config.heating_interval,
            "initializing printer session"
        );
        self.write_raw(&commands::reset())?;
        self.write_raw(&commands::print_settings(
            self.config.max_printing_dots,
            self.config.heating_time,
            self.config.heating_interval,
        ))?;
        self.write_raw(&commands::codepage(self.config.code_page.opcode()))
    }

    /// Reset the printer to power-on defaults.
    pub fn reset(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::reset())
    }

    /// Wake the controller from low-power sleep.
    pub fn wake(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::wake())
    }

    /// Put the controller into low-power sleep.
    pub fn sleep(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::sleep())
    }

    // ------------------------------------------------------------------
    // Paper movement and layout
    // ------------------------------------------------------------------

    /// Print the line buffer and advance one line. Applies the
    /// configured line delay.
    pub fn line_feed(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&[commands::LF])?;
        self.pause(self.config.line_delay);
        Ok(())
    }

    /// Print the line buffer and feed `n` text lines.
    pub fn feed_lines(&mut self, n: u8) -> Result<(), BrasaError> {
        self.write_raw(&commands::feed_lines(n))
    }

    /// Print the line buffer and feed `n` dot rows.
    pub fn feed_dots(&mut self, n: u8) -> Result<(), BrasaError> {
        self.write_raw(&commands::feed_dots(n))
    }

    /// Drive the paper cutter.
    pub fn cut(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::cut())
    }

    /// Set alignment for subsequent lines.
    pub fn align(&mut self, alignment: Alignment) -> Result<(), BrasaError> {
        self.write_raw(&commands::align(alignment))
    }

    /// Set line spacing in dots.
    pub fn line_spacing(&mut self, dots: u8) -> Result<(), BrasaError> {
        self.write_raw(&commands::line_spacing(dots))
    }

    /// Indent subsequent lines by `columns` (0-31; out-of-range values
    /// silently reset to 0).
    pub fn indent(&mut self, columns: u8) -> Result<(), BrasaError> {
        self.write_raw(&commands::indent(columns))
    }

    /// Print a divider of `length` `─` characters (clamped to 32).
    /// A length of 0 writes nothing.
    pub fn horizontal_line(&mut self, length: usize) -> Result<(), BrasaError> {
        self.write_raw(&commands::horizontal_line(length))
    }

    // ------------------------------------------------------------------
    // Style toggles (unpaired; caller matches on/off)
    // ------------------------------------------------------------------

    /// Enable bold for subsequent text.
    pub fn bold_on(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::bold_on())
    }

    /// Disable bold.
    pub fn bold_off(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::bold_off())
    }

    /// Enable italic for subsequent text.
    pub fn italic_on(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::italic_on())
    }

    /// Disable italic.
    pub fn italic_off(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::italic_off())
    }

    /// Enable white-on-black printing.
    pub fn invert_on(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::invert_on())
    }

    /// Disable white-on-black printing.
    pub fn invert_off(&mut self) -> Result<(), BrasaError> {
        self.write_raw(&commands::invert_off())
    }

    // ------------------------------------------------------------------
    // Text pipeline
    // ------------------------------------------------------------------

    /// Re-encode `text` through the active code page and write it with
    /// no terminator.
    ///
    /// Leading and trailing CR/LF characters are stripped; the device
    /// buffers the bytes and nothing is visible on the receipt until a
    /// line feed is emitted.
    pub fn write_buffered(&mut self, text: &str) -> Result<(), BrasaError> {
        let trimmed = text.trim_matches(['\r', '\n']);
        let encoded = self.config.code_page.encode(trimmed);
        self.write_raw(&encoded)
    }

    /// Write one line of text: buffered bytes, a line feed, then the
    /// configured line delay.
    pub fn write_line(&mut self, text: &str) -> Result<(), BrasaError> {
        self.write_buffered(text)?;
        self.line_feed()
    }

    /// Write one line with a composed [`Style`].
    ///
    /// The underline bits are split off first (they travel as a separate
    /// `ESC -` sub-command), the remaining style byte is applied, the
    /// line is printed, and then underline and style are unconditionally
    /// restored to zero. No residual style state survives the call.
    pub fn write_line_styled(&mut self, text: &str, style: Style) -> Result<(), BrasaError> {
        let (rest, height) = style.split();
        if height != UnderlineHeight::None {
            self.write_raw(&commands::underline(height as u8))?;
        }
        self.write_raw(&commands::char_style(rest.bits()))?;
        self.write_line(text)?;
        self.write_raw(&commands::underline(0))?;
        self.write_raw(&commands::char_style(0))
    }

    /// Write one bold line: bold on, text, bold off, line feed.
    pub fn write_line_bold(&mut self, text: &str) -> Result<(), BrasaError> {
        self.write_raw(&commands::bold_on())?;
        self.write_buffered(text)?;
        self.write_raw(&commands::bold_off())?;
        self.line_feed()
    }

    /// Write one inverted line: invert on, text, invert off, line feed.
    pub fn write_line_inverted(&mut self, text: &str) -> Result<(), BrasaError> {
        self.write_raw(&commands::invert_on())?;
        self.write_buffered(text)?;
        self.write_raw(&commands::invert_off())?;
        self.line_feed()
    }

    /// Write one double-size bold line: style on, text, style off, line
    /// feed.
    pub fn write_line_double_bold(&mut self, text: &str) -> Result<(), BrasaError> {
        let style = Style::BOLD | Style::DOUBLE_HEIGHT | Style::DOUBLE_WIDTH;
        self.write_raw(&commands::char_style(style.bits()))?;
        self.write_buffered(text)?;
        self.write_raw(&commands::char_style(0))?;
        self.line_feed()
    }

    // ------------------------------------------------------------------
    // Graphics and symbols
    // ------------------------------------------------------------------

    /// Print a monochrome bitmap.
    ///
    /// The image must be exactly 384 dots wide and at most 65535 rows
    /// tall; validation happens before any bytes reach the wire. Pixels
    /// darker than the midpoint threshold print as ink. Rows stream
    /// top-to-bottom with the configured row delay between them.
    pub fn print_image(&mut self, image: &GrayImage) -> Result<(), BrasaError> {
        let rows = raster::rows(image)?;
        self.write_raw(&raster::header(image.height() as u16))?;
        for row in &rows {
            self.write_raw(row)?;
            self.pause(self.config.row_delay);
        }
        Ok(())
    }

    /// Print a 1D barcode.
    ///
    /// The payload is upper-cased and re-encoded through the active code
    /// page, except for CODE93/CODE128 which take the raw UTF-8 bytes.
    /// A payload that fails the symbology's length rule writes nothing
    /// and returns `Ok`, matching the firmware vendor's documented
    /// contract; the rejection is logged at warn level.
    pub fn print_barcode(&mut self, symbology: Symbology, data: &str) -> Result<(), BrasaError> {
        let payload = if symbology.uses_raw_bytes() {
            data.as_bytes().to_vec()
        } else {
            self.config.code_page.encode(&data.to_uppercase())
        };

        if !symbology.accepts_len(payload.len()) {
            warn!(
                symbology = ?symbology,
                len = payload.len(),
                "barcode payload fails length rule, skipping"
            );
            return Ok(());
        }

        self.write_raw(&barcode::frame(symbology, &payload))
    }

    /// Print a QR code encoding `text`.
    ///
    /// Emits the 2D code-page select and the fixed QR init frame, then
    /// the payload through the buffered text pipeline (no case folding,
    /// no length validation).
    pub fn print_qr(&mut self, text: &str) -> Result<(), BrasaError> {
        self.write_raw(&qr::select())?;
        self.write_raw(&qr::begin())?;
        self.write_buffered(text)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn quiet_config() -> PrinterConfig {
        PrinterConfig {
            line_delay: Duration::ZERO,
            row_delay: Duration::ZERO,
            ..PrinterConfig::default()
        }
    }

    fn printer() -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), quiet_config())
    }

    #[test]
    fn test_init_preamble() {
        let mut p = printer();
        p.init().unwrap();
        assert_eq!(
            p.into_inner(),
            vec![27, 64, 27, 55, 7, 80, 2, 27, 116, 0]
        );
    }

    #[test]
    fn test_write_buffered_strips_crlf() {
        let mut p = printer();
        p.write_buffered("\r\nhello\n").unwrap();
        assert_eq!(p.into_inner(), b"hello");
    }

    #[test]
    fn test_write_line_appends_lf() {
        let mut p = printer();
        p.write_line("hi").unwrap();
        assert_eq!(p.into_inner(), b"hi\n");
    }

    #[test]
    fn test_styled_line_strips_underline_and_restores() {
        let mut p = printer();
        p.write_line_styled("x", Style::BOLD | Style::UNDERLINE).unwrap();
        let out = p.into_inner();
        let mut expected = Vec::new();
        expected.extend([27, 45, 1]); // thin underline
        expected.extend([27, 33, 0x08]); // style byte: bold only
        expected.extend(b"x");
        expected.push(10);
        expected.extend([27, 45, 0]); // underline restored
        expected.extend([27, 33, 0]); // style restored
        assert_eq!(out, expected);
    }

    #[test]
    fn test_styled_line_thick_underline() {
        let mut p = printer();
        p.write_line_styled("x", Style::THICK_UNDERLINE).unwrap();
        let out = p.into_inner();
        assert_eq!(&out[..3], &[27, 45, 2]);
        assert_eq!(&out[3..6], &[27, 33, 0]);
    }

    #[test]
    fn test_styled_line_no_underline_skips_subcommand() {
        let mut p = printer();
        p.write_line_styled("x", Style::REVERSE).unwrap();
        let out = p.into_inner();
        // Goes straight to the style byte; restore still resets both.
        assert_eq!(&out[..3], &[27, 33, 0x02]);
        assert!(out.ends_with(&[27, 45, 0, 27, 33, 0]));
    }

    #[test]
    fn test_bold_line_ordering() {
        let mut p = printer();
        p.write_line_bold("hi").unwrap();
        let mut expected = Vec::new();
        expected.extend([27, 32, 1, 27, 69, 1]);
        expected.extend(b"hi");
        expected.extend([27, 32, 0, 27, 69, 0]);
        expected.push(10);
        assert_eq!(p.into_inner(), expected);
    }

    #[test]
    fn test_inverted_line_ordering() {
        let mut p = printer();
        p.write_line_inverted("hi").unwrap();
        let mut expected = Vec::new();
        expected.extend([29, 66, 1]);
        expected.extend(b"hi");
        expected.extend([29, 66, 0]);
        expected.push(10);
        assert_eq!(p.into_inner(), expected);
    }

    #[test]
    fn test_double_bold_line_ordering() {
        let mut p = printer();
        p.write_line_double_bold("hi").unwrap();
        let mut expected = Vec::new();
        expected.extend([27, 33, 0x38]); // bold + double height + double width
        expected.extend(b"hi");
        expected.extend([27, 33, 0]);
        expected.push(10);
        assert_eq!(p.into_inner(), expected);
    }

    #[test]
    fn test_barcode_invalid_length_writes_nothing() {
        let mut p = printer();
        p.print_barcode(Symbology::Ean13, "12345").unwrap();
        assert!(p.into_inner().is_empty());
    }

    #[test]
    fn test_barcode_valid_ean13() {
        let mut p = printer();
        p.print_barcode(Symbology::Ean13, "5901234123457").unwrap();
        let out = p.into_inner();
        assert_eq!(&out[..3], &[29, 107, 2]);
        assert_eq!(&out[3..16], b"5901234123457");
        assert_eq!(out[16], 0);
    }

    #[test]
    fn test_barcode_case_folding() {
        let mut p = printer();
        p.print_barcode(Symbology::Code39, "abc123").unwrap();
        let out = p.into_inner();
        assert_eq!(&out[3..9], b"ABC123");
    }

    #[test]
    fn test_code128_keeps_raw_bytes() {
        let mut p = printer();
        p.print_barcode(Symbology::Code128, "abc123").unwrap();
        let out = p.into_inner();
        assert_eq!(&out[..3], &[29, 107, 8]);
        assert_eq!(&out[3..9], b"abc123");
    }

    #[test]
    fn test_qr_sequence() {
        let mut p = printer();
        p.print_qr("HELLO").unwrap();
        let mut expected = vec![28, 67, 1];
        expected.extend([29, 81, 6, 4, 4, 20, 0]);
        expected.extend(b"HELLO");
        assert_eq!(p.into_inner(), expected);
    }

    #[test]
    fn test_print_image_header_and_rows() {
        use image::{GrayImage, Luma};
        let image = GrayImage::from_pixel(384, 2, Luma([0]));
        let mut p = printer();
        p.print_image(&image).unwrap();
        let out = p.into_inner();
        assert_eq!(&out[..4], &[18, 118, 2, 0]);
        assert_eq!(out.len(), 4 + 2 * 48);
        assert!(out[4..].iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_print_image_rejects_bad_width_before_writing() {
        use image::{GrayImage, Luma};
        let image = GrayImage::from_pixel(200, 2, Luma([0]));
        let mut p = printer();
        assert!(p.print_image(&image).is_err());
        assert!(p.into_inner().is_empty());
    }

    #[test]
    fn test_horizontal_line_zero_writes_nothing() {
        let mut p = printer();
        p.horizontal_line(0).unwrap();
        assert!(p.into_inner().is_empty());
    }
}
