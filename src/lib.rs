//! # Brasa - Serial Thermal Printer Driver
//!
//! Brasa drives 384-dot serial thermal receipt printers (CSN-A2 / QR204
//! family) by emitting their ESC/POS-derived byte command stream over a
//! raw output channel. It provides:
//!
//! - **Protocol implementation**: command builders for reset, alignment,
//!   spacing, cut, and style toggles
//! - **Text pipeline**: UTF-8 → code-page re-encoding with composed
//!   style bit-flags
//! - **Raster graphics**: fixed-threshold 1-bit packing for bitmap
//!   printing
//! - **Barcodes**: eleven 1D symbologies plus QR codes
//! - **Transport**: raw-mode serial character device
//!
//! ## Quick Start
//!
//! ```no_run
//! use brasa::printer::{Printer, PrinterConfig};
//! use brasa::protocol::barcode::Symbology;
//! use brasa::protocol::style::Style;
//! use brasa::transport::SerialTransport;
//!
//! // Open the printer's serial device
//! let sink = SerialTransport::open("/dev/ttyAMA0")?;
//!
//! // Start a session and send the preamble
//! let mut printer = Printer::new(sink, PrinterConfig::default());
//! printer.init()?;
//!
//! // Print a small receipt
//! printer.write_line_double_bold("BRASA CAFE")?;
//! printer.horizontal_line(32)?;
//! printer.write_line("2x espresso        5.00")?;
//! printer.write_line_styled("TOTAL  5.00", Style::BOLD | Style::UNDERLINE)?;
//! printer.print_barcode(Symbology::Ean13, "5901234123457")?;
//! printer.feed_lines(3)?;
//! # Ok::<(), brasa::error::BrasaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Stateless command builders |
//! | [`encoding`] | Code-page re-encoding |
//! | [`printer`] | Stateful session over a byte sink |
//! | [`transport`] | Serial device sink |
//! | [`error`] | Error types |
//!
//! ## Model
//!
//! The session is single-threaded, synchronous, and blocking: every
//! operation writes its bytes and returns after they (plus any pacing
//! delay) complete. The only suspension points are the two configurable
//! settle delays (per text line, per raster row), which exist for the
//! print head's sake and may be set to zero. Sink errors propagate
//! unmodified; the encoder never retries.

pub mod encoding;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod transport;

// Re-exports for convenience
pub use encoding::CodePage;
pub use error::BrasaError;
pub use printer::{Printer, PrinterConfig};
pub use transport::SerialTransport;
