// src/output/formatter.rs

//! Renders individual metric values for the report.
//!
//! Absent values render as the literal `null`.

use crate::constants::{BYTES_PER_KB, NULL_MARKER};
use crate::core_types::Dimensions;

/// Formats a byte length as whole kilobytes (`1023` bytes render as `0kB`).
///
/// # Examples
/// ```
/// use picstat::output::formatter::format_length;
///
/// assert_eq!(format_length(1500), "1kB");
/// assert_eq!(format_length(4096), "4kB");
/// ```
pub fn format_length(length: u128) -> String {
    format!("{}kB", length / BYTES_PER_KB)
}

/// Formats dimensions as `WxH`.
///
/// # Examples
/// ```
/// use picstat::core_types::Dimensions;
/// use picstat::output::formatter::format_dimensions;
///
/// assert_eq!(format_dimensions(Some(Dimensions::new(640, 480))), "640x480");
/// assert_eq!(format_dimensions(None), "null");
/// ```
pub fn format_dimensions(dim: Option<Dimensions>) -> String {
    match dim {
        Some(dim) => dim.to_string(),
        None => NULL_MARKER.to_string(),
    }
}

/// Formats a compression percentage with two decimals.
///
/// # Examples
/// ```
/// use picstat::output::formatter::format_compression;
///
/// assert_eq!(format_compression(Some(15.0)), "15.00%");
/// assert_eq!(format_compression(None), "null");
/// ```
pub fn format_compression(compression: Option<f64>) -> String {
    match compression {
        Some(value) => format!("{:.2}%", value),
        None => NULL_MARKER.to_string(),
    }
}
