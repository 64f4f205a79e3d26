//! # Code Page Re-encoding
//!
//! Converts Unicode strings to the 8-bit encoding the printer firmware
//! renders. The firmware must be switched to the matching table with
//! `ESC t n` ([`crate::protocol::commands::codepage`]), which the
//! session does once at init; every subsequent text write re-encodes
//! through the active page.
//!
//! ## Supported Pages
//!
//! | Page | Firmware opcode | Backing |
//! |------|-----------------|---------|
//! | IBM437 | 0 | hand table ([`tables::CP437_HIGH`]) |
//! | IBM850 | 1 | hand table ([`tables::CP850_HIGH`]) |
//! | windows-1251 | 15 | encoding_rs |
//!
//! ## Substitution Policy
//!
//! ASCII (U+0000-U+007F) passes through unchanged on every page.
//! Characters the active page cannot represent are replaced with `?` and
//! logged at warn level. The replacement is deterministic: the same
//! input always produces the same bytes.

mod tables;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use tables::{CP437_HIGH, CP850_HIGH};

/// A code page the firmware can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CodePage {
    /// IBM Code Page 437: US English, box drawing (firmware default)
    #[default]
    #[serde(rename = "IBM437")]
    Ibm437,
    /// IBM Code Page 850: Western European
    #[serde(rename = "ibm850")]
    Ibm850,
    /// windows-1251: Cyrillic
    #[serde(rename = "windows-1251")]
    Windows1251,
}

impl CodePage {
    /// The byte identifying this page to the firmware (`ESC t n`).
    #[inline]
    pub fn opcode(self) -> u8 {
        match self {
            CodePage::Ibm437 => 0,
            CodePage::Ibm850 => 1,
            CodePage::Windows1251 => 15,
        }
    }

    /// Canonical name, as accepted by [`CodePage::parse`].
    pub fn name(self) -> &'static str {
        match self {
            CodePage::Ibm437 => "IBM437",
            CodePage::Ibm850 => "ibm850",
            CodePage::Windows1251 => "windows-1251",
        }
    }

    /// Parse a code-page name (case-insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ibm437" | "cp437" => Some(CodePage::Ibm437),
            "ibm850" | "cp850" => Some(CodePage::Ibm850),
            "windows-1251" | "cp1251" => Some(CodePage::Windows1251),
            _ => None,
        }
    }

    /// Encode a Unicode string into this page's byte sequence.
    ///
    /// Unrepresentable characters become `?` (see module docs).
    pub fn encode(self, s: &str) -> Vec<u8> {
        match self {
            CodePage::Ibm437 => encode_with_table(s, &CP437_HIGH),
            CodePage::Ibm850 => encode_with_table(s, &CP850_HIGH),
            CodePage::Windows1251 => encode_windows_1251(s),
        }
    }

    /// Decode printer bytes back to a Unicode string.
    ///
    /// Inverse of [`CodePage::encode`] over the representable subset.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            CodePage::Ibm437 => decode_with_table(bytes, &CP437_HIGH),
            CodePage::Ibm850 => decode_with_table(bytes, &CP850_HIGH),
            CodePage::Windows1251 => {
                let (text, _, _) = encoding_rs::WINDOWS_1251.decode(bytes);
                text.into_owned()
            }
        }
    }
}

fn encode_with_table(s: &str, table: &[char; 128]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if (ch as u32) < 0x80 {
            out.push(ch as u8);
        } else if let Some(pos) = table.iter().position(|&t| t == ch) {
            out.push(0x80 + pos as u8);
        } else {
            warn!(
                "character '{}' (U+{:04X}) not representable in code page, substituting '?'",
                ch, ch as u32
            );
            out.push(b'?');
        }
    }
    out
}

fn decode_with_table(bytes: &[u8], table: &[char; 128]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                table[(b - 0x80) as usize]
            }
        })
        .collect()
}

/// Encode through encoding_rs, keeping the `?` substitution policy.
///
/// encoding_rs replaces unmappable characters with numeric character
/// references, so a string that fails the whole-string fast path is
/// re-encoded character by character.
fn encode_windows_1251(s: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = encoding_rs::WINDOWS_1251.encode(s);
    if !had_errors {
        return bytes.into_owned();
    }

    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for ch in s.chars() {
        let (bytes, _, err) = encoding_rs::WINDOWS_1251.encode(ch.encode_utf8(&mut buf));
        if err {
            warn!(
                "character '{}' (U+{:04X}) not representable in code page, substituting '?'",
                ch, ch as u32
            );
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcodes() {
        assert_eq!(CodePage::Ibm437.opcode(), 0);
        assert_eq!(CodePage::Ibm850.opcode(), 1);
        assert_eq!(CodePage::Windows1251.opcode(), 15);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(CodePage::parse("IBM437"), Some(CodePage::Ibm437));
        assert_eq!(CodePage::parse("cp850"), Some(CodePage::Ibm850));
        assert_eq!(CodePage::parse("windows-1251"), Some(CodePage::Windows1251));
        assert_eq!(CodePage::parse("shift-jis"), None);
    }

    #[test]
    fn test_ascii_passthrough_all_pages() {
        for page in [CodePage::Ibm437, CodePage::Ibm850, CodePage::Windows1251] {
            assert_eq!(page.encode("Hello, world! 123"), b"Hello, world! 123");
        }
    }

    #[test]
    fn test_cp437_accented_and_box_drawing() {
        assert_eq!(CodePage::Ibm437.encode("ñ"), vec![0xA4]);
        assert_eq!(CodePage::Ibm437.encode("é"), vec![0x82]);
        // "Café" → C a f é
        assert_eq!(CodePage::Ibm437.encode("Café"), vec![0x43, 0x61, 0x66, 0x82]);
        // Divider glyph matches the horizontal-line command byte
        assert_eq!(CodePage::Ibm437.encode("─"), vec![0xC4]);
        assert_eq!(CodePage::Ibm437.encode("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
    }

    #[test]
    fn test_cp850_western_european() {
        assert_eq!(CodePage::Ibm850.encode("ø"), vec![0x9B]);
        assert_eq!(CodePage::Ibm850.encode("Ø"), vec![0x9D]);
        assert_eq!(CodePage::Ibm850.encode("Á"), vec![0xB5]);
        assert_eq!(CodePage::Ibm850.encode("¤"), vec![0xCF]);
    }

    #[test]
    fn test_windows_1251_cyrillic() {
        // "Привет" in windows-1251
        assert_eq!(
            CodePage::Windows1251.encode("Привет"),
            vec![0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2]
        );
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        assert_eq!(CodePage::Ibm437.encode("★"), vec![b'?']);
        assert_eq!(CodePage::Ibm850.encode("Ω"), vec![b'?']);
        assert_eq!(CodePage::Windows1251.encode("─"), vec![b'?']);
    }

    #[test]
    fn test_substitution_is_deterministic() {
        let mixed = "ok★ok★";
        assert_eq!(
            CodePage::Ibm437.encode(mixed),
            CodePage::Ibm437.encode(mixed)
        );
        assert_eq!(CodePage::Ibm437.encode(mixed), b"ok?ok?");
    }

    #[test]
    fn test_round_trip_representable_subset() {
        let samples = [
            (CodePage::Ibm437, "Año ¿Qué? ░▒▓ π≈√"),
            (CodePage::Ibm850, "Çà-et-là øre £9 ¾"),
            (CodePage::Windows1251, "Привет, мир! 42"),
        ];
        for (page, text) in samples {
            let encoded = page.encode(text);
            assert_eq!(page.decode(&encoded), text, "page {:?}", page);
        }
    }

    #[test]
    fn test_decode_high_half_full_range() {
        // Every high byte decodes, and re-encoding gives the byte back.
        for page in [CodePage::Ibm437, CodePage::Ibm850] {
            for b in 0x80..=0xFFu8 {
                let text = page.decode(&[b]);
                assert_eq!(page.encode(&text), vec![b], "page {:?} byte {:#04X}", page, b);
            }
        }
    }
}
