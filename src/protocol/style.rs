//! # Character Style Flags
//!
//! The firmware composes text styles from a single style byte sent with
//! `ESC !` ([`crate::protocol::commands::char_style`]). Each style is one
//! bit:
//!
//! | Bit | Style |
//! |-----|-------|
//! | 0 | Underline |
//! | 1 | Reverse (white on black) |
//! | 2 | Upside-down |
//! | 3 | Bold |
//! | 4 | Double height |
//! | 5 | Double width |
//! | 6 | Strike-through |
//! | 7 | Thick underline |
//!
//! ## The Underline Quirk
//!
//! The two underline bits are not honored through the style byte. The
//! firmware expects underline weight as a separate `ESC -` sub-command
//! with value 0 (off), 1 (thin) or 2 (thick), and the bits must be
//! cleared from the style byte before it is sent. [`Style::split`]
//! performs that decomposition; the session in [`crate::printer`] always
//! encodes through it.

use bitflags::bitflags;

bitflags! {
    /// Bit-set of character styles for one printed line.
    ///
    /// Combine with `|`:
    ///
    /// ```
    /// use brasa::protocol::style::Style;
    ///
    /// let style = Style::BOLD | Style::DOUBLE_HEIGHT;
    /// assert_eq!(style.bits(), 0b0001_1000);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Style: u8 {
        /// Thin underline (sent via `ESC -`, not the style byte)
        const UNDERLINE = 1 << 0;
        /// White text on black background
        const REVERSE = 1 << 1;
        /// Rotated 180 degrees
        const UPDOWN = 1 << 2;
        /// Emphasized
        const BOLD = 1 << 3;
        /// 2x vertical size
        const DOUBLE_HEIGHT = 1 << 4;
        /// 2x horizontal size
        const DOUBLE_WIDTH = 1 << 5;
        /// Strike-through
        const DELETE_LINE = 1 << 6;
        /// Thick underline (sent via `ESC -`, not the style byte)
        const THICK_UNDERLINE = 1 << 7;
    }
}

/// Underline weight, set through its own `ESC -` sub-command.
///
/// `Thin` and `Thick` are mutually exclusive in effect; [`Style::split`]
/// resolves a request for both in favor of `Thick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum UnderlineHeight {
    #[default]
    None = 0,
    Thin = 1,
    Thick = 2,
}

impl Style {
    /// Decompose into the style byte the firmware accepts and the
    /// underline weight for the `ESC -` sub-command.
    ///
    /// The returned `Style` has both underline bits cleared.
    ///
    /// ```
    /// use brasa::protocol::style::{Style, UnderlineHeight};
    ///
    /// let (rest, height) = (Style::BOLD | Style::UNDERLINE).split();
    /// assert_eq!(rest, Style::BOLD);
    /// assert_eq!(height, UnderlineHeight::Thin);
    /// ```
    pub fn split(self) -> (Style, UnderlineHeight) {
        let height = if self.contains(Style::THICK_UNDERLINE) {
            UnderlineHeight::Thick
        } else if self.contains(Style::UNDERLINE) {
            UnderlineHeight::Thin
        } else {
            UnderlineHeight::None
        };
        let rest = self.difference(Style::UNDERLINE | Style::THICK_UNDERLINE);
        (rest, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        assert_eq!(Style::UNDERLINE.bits(), 0x01);
        assert_eq!(Style::REVERSE.bits(), 0x02);
        assert_eq!(Style::UPDOWN.bits(), 0x04);
        assert_eq!(Style::BOLD.bits(), 0x08);
        assert_eq!(Style::DOUBLE_HEIGHT.bits(), 0x10);
        assert_eq!(Style::DOUBLE_WIDTH.bits(), 0x20);
        assert_eq!(Style::DELETE_LINE.bits(), 0x40);
        assert_eq!(Style::THICK_UNDERLINE.bits(), 0x80);
    }

    #[test]
    fn test_split_no_underline() {
        let (rest, height) = (Style::BOLD | Style::REVERSE).split();
        assert_eq!(rest, Style::BOLD | Style::REVERSE);
        assert_eq!(height, UnderlineHeight::None);
    }

    #[test]
    fn test_split_thin() {
        let (rest, height) = Style::UNDERLINE.split();
        assert_eq!(rest, Style::empty());
        assert_eq!(height, UnderlineHeight::Thin);
    }

    #[test]
    fn test_split_thick() {
        let (rest, height) = (Style::THICK_UNDERLINE | Style::DOUBLE_WIDTH).split();
        assert_eq!(rest, Style::DOUBLE_WIDTH);
        assert_eq!(height, UnderlineHeight::Thick);
    }

    #[test]
    fn test_split_both_underline_bits_thick_wins() {
        let (rest, height) = (Style::UNDERLINE | Style::THICK_UNDERLINE).split();
        assert_eq!(rest, Style::empty());
        assert_eq!(height, UnderlineHeight::Thick);
    }

    #[test]
    fn test_split_strips_underline_for_every_combination() {
        // Whatever the input, the emitted style byte never carries
        // bit 0 or bit 7.
        for bits in 0..=u8::MAX {
            let style = Style::from_bits_truncate(bits);
            let (rest, _) = style.split();
            assert_eq!(rest.bits() & 0x81, 0, "input {bits:#010b}");
        }
    }
}
