//! # Raster Graphics
//!
//! Bitmap printing for the 384-dot thermal head.
//!
//! ## Command Shape
//!
//! ```text
//! DC2 v heightL heightH row0 row1 ... rowN
//! 18 118 ...
//! ```
//!
//! The header carries the image height as a little-endian u16; the width
//! is fixed by the hardware at 384 dots (48 bytes per row). Rows stream
//! top-to-bottom; the session paces them with a configurable inter-row
//! delay so the print head's thermal throughput is not overrun.
//!
//! ## Bit Packing
//!
//! Eight horizontally adjacent pixels pack into one byte,
//! **least-significant-bit first**: bit n of the packed byte is the pixel
//! at column offset n within the 8-pixel group.
//!
//! ```text
//! Columns:   0 1 2 3 4 5 6 7
//! Bits:      0 1 2 3 4 5 6 7   (bit 0 = column 0)
//! Byte 0x01 = ink only in column 0
//! Byte 0x80 = ink only in column 7
//! ```
//!
//! ## Thresholding
//!
//! A pixel is ink when its brightness is below the midpoint (luma < 128
//! on the 0-255 scale). This fixed binary threshold is the whole
//! algorithm; there is no dithering.

use image::GrayImage;

use super::commands::{u16_le, DC2};
use crate::error::BrasaError;

/// Fixed print-head width in dots.
pub const WIDTH_DOTS: u32 = 384;

/// Packed bytes per raster row (384 / 8).
pub const ROW_BYTES: usize = 48;

/// Maximum image height the 16-bit header can carry.
pub const MAX_HEIGHT: u32 = 65_535;

/// Luma cutoff: values below this are ink (bit set), at or above are
/// blank. Midpoint of the 0-255 scale, i.e. 0.5 normalized.
pub const INK_THRESHOLD: u8 = 128;

/// # Raster Print Header (DC2 v hL hH)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | DC2 v hL hH |
/// | Hex     | 12 76 hL hH |
/// | Decimal | 18 118 hL hH |
///
/// ## Example
///
/// ```
/// use brasa::protocol::raster::header;
///
/// assert_eq!(header(1), vec![18, 118, 1, 0]);
/// assert_eq!(header(500), vec![18, 118, 0xF4, 0x01]);
/// ```
#[inline]
pub fn header(height: u16) -> Vec<u8> {
    let [hl, hh] = u16_le(height);
    vec![DC2, b'v', hl, hh]
}

/// Pack one row of 384 luma values into 48 bytes, LSB-first.
///
/// ## Example
///
/// ```
/// use brasa::protocol::raster::{pack_row, ROW_BYTES};
///
/// let mut row = [255u8; 384];
/// row[0] = 0; // ink at column 0
/// let packed = pack_row(&row);
/// assert_eq!(packed[0], 0x01);
/// assert!(packed[1..].iter().all(|&b| b == 0));
/// ```
pub fn pack_row(luma: &[u8; WIDTH_DOTS as usize]) -> [u8; ROW_BYTES] {
    let mut packed = [0u8; ROW_BYTES];
    for (i, &value) in luma.iter().enumerate() {
        if value < INK_THRESHOLD {
            packed[i / 8] |= 1 << (i % 8);
        }
    }
    packed
}

/// Validate an image against the head geometry and pack it into rows.
///
/// ## Errors
///
/// Returns [`BrasaError::Image`] before any packing when the width is
/// not exactly 384 dots or the height exceeds 65535 rows.
pub fn rows(image: &GrayImage) -> Result<Vec<[u8; ROW_BYTES]>, BrasaError> {
    if image.width() != WIDTH_DOTS {
        return Err(BrasaError::Image(format!(
            "raster width must be exactly {} dots, got {}",
            WIDTH_DOTS,
            image.width()
        )));
    }
    if image.height() > MAX_HEIGHT {
        return Err(BrasaError::Image(format!(
            "raster height must be at most {} rows, got {}",
            MAX_HEIGHT,
            image.height()
        )));
    }

    let mut rows = Vec::with_capacity(image.height() as usize);
    for y in 0..image.height() {
        let mut luma = [0u8; WIDTH_DOTS as usize];
        for (x, slot) in luma.iter_mut().enumerate() {
            *slot = image.get_pixel(x as u32, y).0[0];
        }
        rows.push(pack_row(&luma));
    }
    Ok(rows)
}

// ============================================================================
// TESTS
// ============================================================================
