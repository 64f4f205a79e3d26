//! # ESC/POS Protocol Implementation
//!
//! Low-level command builders for the ESC/POS-derived command set used
//! by 384-dot serial thermal printers (CSN-A2 / QR204 family).
//!
//! ## Module Structure
//!
//! - [`commands`]: control commands (reset, align, spacing, cut, styles)
//! - [`style`]: character style bit-set and underline decomposition
//! - [`barcode`]: 1D barcode frames and QR command sequences
//! - [`raster`]: bitmap thresholding, bit packing, raster header
//!
//! ## Usage Example
//!
//! ```
//! use brasa::protocol::{commands, barcode};
//!
//! // Build a raw print sequence without a session
//! let mut data = Vec::new();
//! data.extend(commands::reset());
//! data.extend(commands::align_center());
//! data.extend(b"TOTAL  12.50");
//! data.push(commands::LF);
//! data.extend(barcode::frame(barcode::Symbology::Ean13, b"5901234123457"));
//! data.extend(commands::feed_lines(3));
//!
//! // Send `data` to the printer via a transport...
//! ```
//!
//! Every builder is pure and synchronous; the stateful surface that
//! writes to a sink (and applies pacing delays and payload validation)
//! is [`crate::printer::Printer`].

pub mod barcode;
pub mod commands;
pub mod raster;
pub mod style;
