//! # Printer Configuration
//!
//! Session configuration for 384-dot serial thermal printers.
//!
//! ## Heating Parameters
//!
//! The thermal head is tuned with three bytes sent via `ESC 7`:
//!
//! | Parameter | Unit | Range | Recommended |
//! |-----------|------|-------|-------------|
//! | max_printing_dots | 8 dots | 0-255 | 7 (64 dots) |
//! | heating_time | 10µs | 0-255 | 80 (800µs) |
//! | heating_interval | 10µs | 0-255 | 2 (20µs) |
//!
//! More simultaneous dots print faster but draw more current; longer
//! heating prints darker but slower.
//!
//! ## Pacing Delays
//!
//! Two delays model the head's mechanical/thermal settle time:
//!
//! - `line_delay`: applied after every printed text line (default 0)
//! - `row_delay`: applied after every raster row (default 40ms) to
//!   avoid overrunning the head during image printing
//!
//! Both are plain cooperative sleeps, caller-configurable down to zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::encoding::CodePage;

/// Configuration for a [`crate::printer::Printer`] session.
///
/// Immutable after construction; build it with struct update syntax:
///
/// ```
/// use brasa::printer::PrinterConfig;
/// use brasa::encoding::CodePage;
/// use std::time::Duration;
///
/// let config = PrinterConfig {
///     code_page: CodePage::Ibm850,
///     row_delay: Duration::ZERO, // no pacing, e.g. for tests
///     ..PrinterConfig::default()
/// };
/// # let _ = config;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterConfig {
    /// Code page used to re-encode all outgoing text.
    pub code_page: CodePage,

    /// Simultaneous heating dots, in units of 8 dots (`ESC 7` n1).
    pub max_printing_dots: u8,

    /// Heat duration in 10µs units (`ESC 7` n2).
    pub heating_time: u8,

    /// Rest between strobes in 10µs units (`ESC 7` n3).
    pub heating_interval: u8,

    /// Settle delay after each printed text line.
    pub line_delay: Duration,

    /// Settle delay after each raster image row.
    pub row_delay: Duration,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            code_page: CodePage::Ibm437,
            max_printing_dots: 7,
            heating_time: 80,
            heating_interval: 2,
            line_delay: Duration::ZERO,
            row_delay: Duration::from_millis(40),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firmware_recommended_defaults() {
        let config = PrinterConfig::default();
        assert_eq!(config.max_printing_dots, 7);
        assert_eq!(config.heating_time, 80);
        assert_eq!(config.heating_interval, 2);
        assert_eq!(config.code_page, CodePage::Ibm437);
    }

    #[test]
    fn test_default_pacing() {
        let config = PrinterConfig::default();
        assert!(config.line_delay.is_zero());
        assert_eq!(config.row_delay, Duration::from_millis(40));
    }
}
