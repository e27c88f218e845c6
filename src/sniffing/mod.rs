//! Format sniffing: classifies files by their header bytes and extracts pixel
//! dimensions from GIF and JPEG streams.
//!
//! Every entry point here swallows I/O and parse failures. A file that cannot
//! be opened classifies as [`FileType::Unknown`]; a picture whose header cannot
//! be parsed yields no dimensions. File handles are opened per call and closed
//! before returning.

use crate::core_types::{Dimensions, FileType};
use std::path::Path;

mod file_type;
mod gif;
mod jpeg;

pub use file_type::{classify_bytes, classify_path, read_prefix};
pub use gif::{gif_dimensions, read_gif_dimensions};
pub use jpeg::{jpeg_dimensions, read_jpeg_dimensions};

/// Extracts pixel dimensions for a file already classified as `file_type`.
///
/// Returns `None` for directories and unknown files, and for pictures whose
/// header cannot be read or parsed.
///
/// # Examples
/// ```
/// # use std::fs;
/// # use picstat::core_types::{Dimensions, FileType};
/// # use picstat::sniffing::dimensions;
/// # use tempfile::tempdir;
/// # fn main() -> std::io::Result<()> {
/// let temp = tempdir()?;
/// let path = temp.path().join("tiny.gif");
/// fs::write(&path, [b'G', b'I', b'F', b'8', b'9', b'a', 100, 0, 50, 0])?;
///
/// assert_eq!(dimensions(&path, FileType::Gif), Some(Dimensions::new(100, 50)));
/// assert_eq!(dimensions(&path, FileType::Unknown), None);
/// # Ok(())
/// # }
/// ```
pub fn dimensions(path: &Path, file_type: FileType) -> Option<Dimensions> {
    match file_type {
        FileType::Gif => gif_dimensions(path),
        FileType::Jpeg => jpeg_dimensions(path),
        FileType::Directory | FileType::Unknown => None,
    }
}
