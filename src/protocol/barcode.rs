//! # Barcode and QR Commands
//!
//! This module implements 1D barcode frames and the QR code command
//! sequence for CSN-A2 style thermal printers.
//!
//! ## 1D Barcode Frame
//!
//! Every symbology shares one frame shape:
//!
//! ```text
//! GS k type payload... NUL
//! 29 107 (0-10) ...    0
//! ```
//!
//! What differs per symbology is the type byte, the payload-length rule,
//! and whether the payload is case-folded before encoding. Those rules
//! live on [`Symbology`]; the frame itself is built by [`frame`].
//!
//! ## Payload Validation
//!
//! [`Symbology::accepts_len`] implements the firmware's length rules.
//! The session in [`crate::printer`] treats a failing rule as a silent
//! no-op (zero bytes written, logged at warn level), matching the
//! firmware vendor's documented contract.

use super::commands::{FS, GS};

/// 1D barcode symbologies with their firmware type bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Symbology {
    /// UPC-A (11-12 digits)
    UpcA = 0,
    /// UPC-E (11-12 digits, compressed UPC-A)
    UpcE = 1,
    /// EAN-13 / JAN-13 (12-13 digits, standard retail)
    Ean13 = 2,
    /// EAN-8 / JAN-8 (7-8 digits)
    Ean8 = 3,
    /// Code39 (A-Z, 0-9, space, `- . $ / % +`)
    Code39 = 4,
    /// Interleaved 2 of 5 (numeric pairs)
    I25 = 5,
    /// Codabar / NW-7
    Codabar = 6,
    /// Code93 (full ASCII, compact)
    Code93 = 7,
    /// Code128 (full ASCII, high density)
    Code128 = 8,
    /// Code11 (numeric plus dash)
    Code11 = 9,
    /// MSI / modified Plessey
    Msi = 10,
}

impl Symbology {
    /// Firmware type byte for the `GS k` frame (0-10).
    #[inline]
    pub fn opcode(self) -> u8 {
        self as u8
    }

    /// Whether the encoded payload length is printable for this
    /// symbology.
    ///
    /// | Symbology | Rule |
    /// |-----------|------|
    /// | UPC-A, UPC-E | length 11 or 12 |
    /// | EAN-13 | length 12 or 13 |
    /// | EAN-8 | length 7 or 8 |
    /// | I25 | length > 1 or even length |
    /// | all others | length > 1 |
    ///
    /// The I25 rule is reproduced exactly as the firmware vendor ships
    /// it; since every length > 1 already passes, the even-length arm
    /// only ever admits the empty payload.
    pub fn accepts_len(self, len: usize) -> bool {
        match self {
            Symbology::UpcA | Symbology::UpcE => len == 11 || len == 12,
            Symbology::Ean13 => len == 12 || len == 13,
            Symbology::Ean8 => len == 7 || len == 8,
            Symbology::I25 => len > 1 || len % 2 == 0,
            Symbology::Code39
            | Symbology::Codabar
            | Symbology::Code93
            | Symbology::Code128
            | Symbology::Code11
            | Symbology::Msi => len > 1,
        }
    }

    /// Whether the payload is passed through as raw UTF-8 bytes.
    ///
    /// Code93 and Code128 carry full 8-bit/ASCII payloads and must not
    /// be case-folded or code-page-converted; every other symbology
    /// upper-cases the payload and re-encodes it through the active code
    /// page.
    #[inline]
    pub fn uses_raw_bytes(self) -> bool {
        matches!(self, Symbology::Code93 | Symbology::Code128)
    }
}

/// # Print 1D Barcode (GS k n data NUL)
///
/// Builds the complete barcode frame: 3-byte header, payload bytes, and
/// the single zero terminator.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k n data... NUL |
/// | Hex     | 1D 6B n data... 00 |
/// | Decimal | 29 107 n data... 0 |
///
/// This is the pure frame builder; it does not apply the length rule.
/// Use [`Symbology::accepts_len`] (or the session method
/// [`crate::printer::Printer::print_barcode`]) for validated printing.
///
/// ## Example
///
/// ```
/// use brasa::protocol::barcode::{frame, Symbology};
///
/// let cmd = frame(Symbology::Ean13, b"5901234123457");
/// assert_eq!(&cmd[..3], &[29, 107, 2]);
/// assert_eq!(cmd[cmd.len() - 1], 0);
/// ```
pub fn frame(symbology: Symbology, payload: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(4 + payload.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(symbology.opcode());
    cmd.extend_from_slice(payload);
    cmd.push(0);
    cmd
}

/// QR code command builders
///
/// Printing a QR symbol is a two-command preamble followed by the
/// payload text:
///
/// 1. [`qr::select`] switches the 2D engine's code page
/// 2. [`qr::begin`] configures and starts the symbol
/// 3. payload bytes follow through the buffered text pipeline
///
/// No acknowledgement or symbol-size negotiation is performed.
pub mod qr {
    use super::{FS, GS};

    /// # 2D Code-Page Select (FS C 1)
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes   |
    /// |---------|---------|
    /// | Hex     | 1C 43 01|
    /// | Decimal | 28 67 1 |
    #[inline]
    pub fn select() -> Vec<u8> {
        vec![FS, b'C', 1]
    }

    /// # QR Init Frame (GS Q 6 4 4 20 0)
    ///
    /// Fixed 7-byte frame that configures cell size and starts symbol
    /// input; the payload bytes follow directly on the wire.
    ///
    /// ## Protocol Details
    ///
    /// | Format  | Bytes |
    /// |---------|-------|
    /// | Hex     | 1D 51 06 04 04 14 00 |
    /// | Decimal | 29 81 6 4 4 20 0 |
    #[inline]
    pub fn begin() -> Vec<u8> {
        vec![GS, b'Q', 6, 4, 4, 20, 0]
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcodes_cover_zero_through_ten() {
        let all = [
            Symbology::UpcA,
            Symbology::UpcE,
            Symbology::Ean13,
            Symbology::Ean8,
            Symbology::Code39,
            Symbology::I25,
            Symbology::Codabar,
            Symbology::Code93,
            Symbology::Code128,
            Symbology::Code11,
            Symbology::Msi,
        ];
        for (expected, sym) in all.iter().enumerate() {
            assert_eq!(sym.opcode() as usize, expected);
        }
    }

    #[test]
    fn test_upc_length_rule() {
        for sym in [Symbology::UpcA, Symbology::UpcE] {
            assert!(sym.accepts_len(11));
            assert!(sym.accepts_len(12));
            assert!(!sym.accepts_len(10));
            assert!(!sym.accepts_len(13));
        }
    }

    #[test]
    fn test_ean_length_rules() {
        assert!(Symbology::Ean13.accepts_len(12));
        assert!(Symbology::Ean13.accepts_len(13));
        assert!(!Symbology::Ean13.accepts_len(5));
        assert!(!Symbology::Ean13.accepts_len(14));

        assert!(Symbology::Ean8.accepts_len(7));
        assert!(Symbology::Ean8.accepts_len(8));
        assert!(!Symbology::Ean8.accepts_len(6));
        assert!(!Symbology::Ean8.accepts_len(9));
    }

    #[test]
    fn test_minimum_length_rule() {
        for sym in [
            Symbology::Code39,
            Symbology::Codabar,
            Symbology::Code93,
            Symbology::Code128,
            Symbology::Code11,
            Symbology::Msi,
        ] {
            assert!(!sym.accepts_len(0));
            assert!(!sym.accepts_len(1));
            assert!(sym.accepts_len(2));
            assert!(sym.accepts_len(100));
        }
    }

    #[test]
    fn test_i25_rule_preserved_verbatim() {
        // `len > 1 || len % 2 == 0`: the even-length arm admits the empty
        // payload, and length 1 is the only rejected value.
        assert!(Symbology::I25.accepts_len(0));
        assert!(!Symbology::I25.accepts_len(1));
        assert!(Symbology::I25.accepts_len(2));
        assert!(Symbology::I25.accepts_len(3));
    }

    #[test]
    fn test_raw_byte_symbologies() {
        assert!(Symbology::Code93.uses_raw_bytes());
        assert!(Symbology::Code128.uses_raw_bytes());
        assert!(!Symbology::Code39.uses_raw_bytes());
        assert!(!Symbology::Ean13.uses_raw_bytes());
        assert!(!Symbology::Msi.uses_raw_bytes());
    }

    #[test]
    fn test_frame_shape() {
        let cmd = frame(Symbology::Ean13, b"5901234123457");
        assert_eq!(cmd.len(), 3 + 13 + 1);
        assert_eq!(&cmd[..3], &[29, 107, 2]);
        assert_eq!(&cmd[3..16], b"5901234123457");
        assert_eq!(cmd[16], 0);
    }

    #[test]
    fn test_frame_empty_payload() {
        // The frame builder itself never validates.
        assert_eq!(frame(Symbology::Code128, b""), vec![29, 107, 8, 0]);
    }

    #[test]
    fn test_qr_preamble() {
        assert_eq!(qr::select(), vec![28, 67, 1]);
        assert_eq!(qr::begin(), vec![29, 81, 6, 4, 4, 20, 0]);
    }
}
