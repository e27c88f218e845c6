// src/constants.rs

/// Maximum number of leading bytes inspected when classifying a file.
pub const SNIFF_PREFIX_LEN: usize = 10;

/// Minimum prefix length needed to recognise a GIF header.
pub const GIF_MIN_HEADER_LEN: usize = 6;

/// Minimum prefix length needed to recognise a JFIF JPEG header.
pub const JPEG_MIN_HEADER_LEN: usize = 10;

/// Bytes per kilobyte used when rendering lengths.
pub const BYTES_PER_KB: u128 = 1024;

/// Placeholder rendered for any absent metric.
pub const NULL_MARKER: &str = "null";

/// Character used for one level of report indentation.
pub const INDENT: char = '\t';
