//! Shared formatting utilities for gas display and console output

use console::Emoji;

/// Chart emoji for report output
pub const CHART: Emoji = Emoji("📊", "~");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Format a percentage delta with two decimal places
///
/// # Examples
///
/// ```
/// use gas_report::fmt::format_percent;
///
/// assert_eq!(format_percent(25.0), "25.00%");
/// assert_eq!(format_percent(-3.251), "-3.25%");
/// ```
pub fn format_percent(delta: f64) -> String {
    format!("{:.2}%", delta)
}
