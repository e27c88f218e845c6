//! Per-file picture metrics: byte length and compression ratio.
//!
//! The compression ratio is `length * 100 / (width * height * divisor)`, where
//! the divisor approximates bytes per uncompressed pixel: 1 for palette-based
//! GIF and 3 for RGB JPEG. It is a percentage of an idealised raw size, not a
//! true compression ratio.

use crate::core_types::{Dimensions, FileType};
use crate::errors::{io_error_with_path, Result};
use crate::sniffing;
use std::fs;
use std::path::Path;

/// Returns the OS-reported length of the file at `path`, in bytes.
///
/// # Errors
/// Returns `Error::Io` if the file's metadata cannot be read.
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| io_error_with_path(e, path))
}

/// Approximate bytes per uncompressed pixel for a picture type.
///
/// Returns `None` for non-picture types.
pub fn channel_divisor(file_type: FileType) -> Option<u64> {
    match file_type {
        FileType::Gif => Some(1),
        FileType::Jpeg => Some(3),
        FileType::Directory | FileType::Unknown => None,
    }
}

/// Computes the compression percentage from already known values.
///
/// Returns `None` for non-picture types and for zero-area dimensions.
///
/// # Examples
/// ```
/// use picstat::core_types::{Dimensions, FileType};
/// use picstat::metrics::compression_ratio;
///
/// let dim = Dimensions::new(10, 10);
/// assert_eq!(compression_ratio(50, dim, FileType::Gif), Some(50.0));
/// assert_eq!(compression_ratio(150, dim, FileType::Jpeg), Some(50.0));
/// assert_eq!(compression_ratio(150, dim, FileType::Unknown), None);
/// ```
pub fn compression_ratio(length: u64, dim: Dimensions, file_type: FileType) -> Option<f64> {
    let divisor = channel_divisor(file_type)?;
    let raw_size = dim.area() * divisor;
    if raw_size == 0 {
        return None;
    }
    Some(length as f64 * 100.0 / raw_size as f64)
}

/// Computes the compression percentage of the picture at `path`.
///
/// The file is classified and measured afresh. Returns `None` if the file is
/// not a recognised picture, its dimensions cannot be parsed, or its size
/// cannot be read.
pub fn compression(path: &Path) -> Option<f64> {
    let file_type = sniffing::classify_path(path);
    let dim = sniffing::dimensions(path, file_type)?;
    match file_size(path) {
        Ok(length) => compression_ratio(length, dim, file_type),
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    }
}
