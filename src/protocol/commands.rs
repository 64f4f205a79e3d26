//! # ESC/POS Control Commands
//!
//! This module implements the control command set understood by CSN-A2 /
//! QR204 style serial thermal printers (the 384-dot panel printers sold
//! under many brand names).
//!
//! ## Protocol Overview
//!
//! The command set is ESC/POS-derived: printable bytes pass straight to
//! the line buffer, while escape characters introduce printer commands:
//!
//! - Single byte: `LF`, `DC2 …`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC a n`, `ESC 7 n1 n2 n3`
//!
//! Every function here is a pure builder: it returns the exact byte
//! sequence for one command and performs no I/O. The stateful session in
//! [`crate::printer`] writes these sequences to its sink.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding: a `u16` value
//! 0x1234 is sent as bytes `[0x34, 0x12]`.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most commands begin with ESC (0x1B). This byte signals the start of a
/// control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Introduces barcode and invert commands.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// FS (File Separator) - 2D symbol command prefix
///
/// Introduces the QR code-page sub-command.
/// Hex: 0x1C, Decimal: 28
pub const FS: u8 = 0x1C;

/// DC2 (Device Control 2) - Raster graphics prefix
///
/// Introduces the bitmap print command.
/// Hex: 0x12, Decimal: 18
pub const DC2: u8 = 0x12;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances the paper by the
/// current line spacing amount. Buffered text is not visible on the
/// receipt until this byte is sent.
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION AND POWER COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on default state. Called at the start
/// of each session to ensure consistent behavior.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## What Gets Reset
///
/// - Print buffer is cleared
/// - Text formatting (bold, underline, invert) disabled
/// - Alignment reset to left
/// - Line spacing reset to default
///
/// ## Example
///
/// ```
/// use brasa::protocol::commands;
///
/// assert_eq!(commands::reset(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn reset() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Wake Printer (ESC = 1)
///
/// Takes the controller out of low-power sleep so it accepts data again.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC = 1 |
/// | Hex     | 1B 3D 01|
/// | Decimal | 27 61 1 |
#[inline]
pub fn wake() -> Vec<u8> {
    vec![ESC, b'=', 1]
}

/// # Sleep Printer (ESC = 0)
///
/// Puts the controller into low-power sleep. Bytes sent while asleep are
/// ignored until [`wake`] is issued.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC = 0 |
/// | Hex     | 1B 3D 00|
/// | Decimal | 27 61 0 |
#[inline]
pub fn sleep() -> Vec<u8> {
    vec![ESC, b'=', 0]
}

/// # Set Printing Parameters (ESC 7 n1 n2 n3)
///
/// Configures the thermal head: how many dots fire simultaneously, how
/// long they heat, and how long they rest between strobes.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 7 n1 n2 n3 |
/// | Hex     | 1B 37 n1 n2 n3 |
/// | Decimal | 27 55 n1 n2 n3 |
///
/// ## Parameters
///
/// - `max_dots`: simultaneous heating dots, in units of 8 dots (0-255,
///   firmware-recommended default 7 → 64 dots)
/// - `heating_time`: heat duration in 10µs units (0-255, default 80 → 800µs)
/// - `heating_interval`: rest between strobes in 10µs units (0-255, default 2)
///
/// ## Trade-offs
///
/// More simultaneous dots print faster but draw more current; longer
/// heating prints darker but slower.
#[inline]
pub fn print_settings(max_dots: u8, heating_time: u8, heating_interval: u8) -> Vec<u8> {
    vec![ESC, b'7', max_dots, heating_time, heating_interval]
}

// ============================================================================
// PAPER MOVEMENT
// ============================================================================

/// # Print and Feed n Lines (ESC d n)
///
/// Prints the line buffer and feeds the paper forward by `n` text lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC d n  |
/// | Hex     | 1B 64 n  |
/// | Decimal | 27 100 n |
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'd', n]
}

/// # Print and Feed n Dots (ESC J n)
///
/// Prints the line buffer and feeds the paper forward by `n` dot rows,
/// for spacing finer than a full text line.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC J n |
/// | Hex     | 1B 4A n |
/// | Decimal | 27 74 n |
#[inline]
pub fn feed_dots(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// # Cut Paper (ESC i)
///
/// Drives the cutter on models that have one.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC i   |
/// | Hex     | 1B 69   |
/// | Decimal | 27 105  |
#[inline]
pub fn cut() -> Vec<u8> {
    vec![ESC, b'i']
}

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the vertical distance between text baselines, in dots.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC 3 n |
/// | Hex     | 1B 33 n |
/// | Decimal | 27 51 n |
#[inline]
pub fn line_spacing(dots: u8) -> Vec<u8> {
    vec![ESC, b'3', dots]
}

// ============================================================================
// ALIGNMENT AND INDENTATION
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC a n)
///
/// Sets the alignment for subsequent lines.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// ## Parameters
///
/// - `n = 0`: Left alignment (default)
/// - `n = 1`: Center alignment
/// - `n = 2`: Right alignment
///
/// ## Example
///
/// ```
/// use brasa::protocol::commands::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x61, 0x01]);
/// ```
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, b'a', alignment as u8]
}

/// Convenience function for left alignment
#[inline]
pub fn align_left() -> Vec<u8> {
    align(Alignment::Left)
}

/// Convenience function for center alignment
#[inline]
pub fn align_center() -> Vec<u8> {
    align(Alignment::Center)
}

/// Convenience function for right alignment
#[inline]
pub fn align_right() -> Vec<u8> {
    align(Alignment::Right)
}

/// # Set Left Indent (ESC B n)
///
/// Indents subsequent lines by `n` character columns.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC B n |
/// | Hex     | 1B 42 n |
/// | Decimal | 27 66 n |
///
/// ## Range
///
/// Valid columns are 0-31. Out-of-range values are silently reset to 0
/// rather than clamped to 31: the firmware treats an oversized indent
/// as "no indent".
///
/// ## Example
///
/// ```
/// use brasa::protocol::commands::indent;
///
/// assert_eq!(indent(4), vec![0x1B, 0x42, 4]);
/// assert_eq!(indent(40), vec![0x1B, 0x42, 0]); // out of range → 0
/// ```
pub fn indent(columns: u8) -> Vec<u8> {
    let columns = if columns > 31 { 0 } else { columns };
    vec![ESC, b'B', columns]
}

// ============================================================================
// CHARACTER STYLE
// ============================================================================

/// # Enable Bold (ESC SP 1, ESC E 1)
///
/// Turns on emphasized printing for subsequent text. The firmware pairs
/// the emphasis flag with a one-dot character spacing adjustment.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 20 01 1B 45 01 |
/// | Decimal | 27 32 1 27 69 1 |
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b' ', 1, ESC, b'E', 1]
}

/// # Disable Bold (ESC SP 0, ESC E 0)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 20 00 1B 45 00 |
/// | Decimal | 27 32 0 27 69 0 |
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b' ', 0, ESC, b'E', 0]
}

/// # Enable Italic (ESC SP 1, ESC 5 0)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 20 01 1B 35 00 |
/// | Decimal | 27 32 1 27 53 0 |
///
/// ## Note
///
/// The on/off pair is asymmetric on this firmware: enabling uses opcode
/// 53 with argument 0, disabling uses opcode 52 with argument 1. The
/// sequences are reproduced byte-for-byte.
#[inline]
pub fn italic_on() -> Vec<u8> {
    vec![ESC, b' ', 1, ESC, b'5', 0]
}

/// # Disable Italic (ESC SP 0, ESC 4 1)
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 20 00 1B 34 01 |
/// | Decimal | 27 32 0 27 52 1 |
#[inline]
pub fn italic_off() -> Vec<u8> {
    vec![ESC, b' ', 0, ESC, b'4', 1]
}

/// # Enable Inverted Printing (GS B 1)
///
/// Prints white text on a black background.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 42 01|
/// | Decimal | 29 66 1 |
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![GS, b'B', 1]
}

/// # Disable Inverted Printing (GS B 0)
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 42 00|
/// | Decimal | 29 66 0 |
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![GS, b'B', 0]
}

/// # Set Character Style Byte (ESC ! n)
///
/// Applies a composed style bit-set to subsequent text. See
/// [`crate::protocol::style::Style`] for the bit assignments; the
/// underline bits must be stripped from `n` and sent through
/// [`underline`] instead.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
/// | Decimal | 27 33 n |
#[inline]
pub fn char_style(style_byte: u8) -> Vec<u8> {
    vec![ESC, b'!', style_byte]
}

/// # Set Underline Height (ESC - n)
///
/// Sets the underline weight for subsequent text.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = 0`: Underline OFF
/// - `n = 1`: Thin underline (1 dot)
/// - `n = 2`: Thick underline (2 dots)
///
/// Values above 2 are clamped to 2.
#[inline]
pub fn underline(height: u8) -> Vec<u8> {
    vec![ESC, b'-', height.min(2)]
}

// ============================================================================
// CODE PAGE SELECTION
// ============================================================================

/// # Select Code Page (ESC t n)
///
/// Selects the 8-bit character table the firmware uses to render bytes
/// 0x80-0xFF. Text must be re-encoded to match; see [`crate::encoding`].
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
/// | Decimal | 27 116 n |
///
/// ## Common Values
///
/// | n  | Code Page |
/// |----|-----------|
/// | 0  | IBM437 (US English, box drawing) |
/// | 1  | IBM850 (Western European) |
/// | 15 | windows-1251 (Cyrillic) |
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

// ============================================================================
// RULES
// ============================================================================

/// Byte printed repeatedly by [`horizontal_line`]: the CP437 box-drawing
/// character `─`.
pub const LINE_CHAR: u8 = 0xC4;

/// Maximum horizontal line length in characters (32-column paper).
pub const MAX_LINE_LEN: usize = 32;

/// # Horizontal Rule
///
/// Builds a full or partial divider line: `length` repetitions of the
/// CP437 `─` glyph followed by a line feed.
///
/// ## Behavior
///
/// - `length == 0`: returns an empty sequence (nothing is printed)
/// - `length > 32`: clamped to 32 (the full paper width)
///
/// ## Example
///
/// ```
/// use brasa::protocol::commands::horizontal_line;
///
/// assert!(horizontal_line(0).is_empty());
/// assert_eq!(horizontal_line(3), vec![0xC4, 0xC4, 0xC4, 0x0A]);
/// assert_eq!(horizontal_line(40).len(), 33); // clamped to 32 + LF
/// ```
pub fn horizontal_line(length: usize) -> Vec<u8> {
    if length == 0 {
        return Vec::new();
    }
    let length = length.min(MAX_LINE_LEN);
    let mut cmd = vec![LINE_CHAR; length];
    cmd.push(LF);
    cmd
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// The protocol uses little-endian encoding for multi-byte integers.
///
/// ## Example
///
/// ```
/// use brasa::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(384), [0x80, 0x01]);
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================
