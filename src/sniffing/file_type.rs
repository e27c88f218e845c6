// src/sniffing/file_type.rs

use crate::constants::{GIF_MIN_HEADER_LEN, JPEG_MIN_HEADER_LEN, SNIFF_PREFIX_LEN};
use crate::core_types::FileType;
use std::{fs::File, io::Read, path::Path};

const GIF_MAGIC: &[u8; 4] = b"GIF8";
const JPEG_SOI_APP0: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
const JFIF_TAG: &[u8; 4] = b"JFIF";

/// Classifies a header prefix as GIF, JPEG or unknown.
///
/// Only the first [`SNIFF_PREFIX_LEN`] bytes matter. The GIF check looks at
/// `GIF8` and the trailing `a` of the version, so the version digit itself is
/// not inspected. The JPEG check requires the SOI + APP0 markers followed by
/// the `JFIF` identifier at offset 6.
///
/// # Examples
/// ```
/// use picstat::core_types::FileType;
/// use picstat::sniffing::classify_bytes;
///
/// assert_eq!(classify_bytes(b"GIF89a"), FileType::Gif);
/// assert_eq!(classify_bytes(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 16, b'J', b'F', b'I', b'F']), FileType::Jpeg);
/// assert_eq!(classify_bytes(b"GIF8"), FileType::Unknown);
/// ```
pub fn classify_bytes(prefix: &[u8]) -> FileType {
    let prefix = &prefix[..prefix.len().min(SNIFF_PREFIX_LEN)];

    if prefix.len() >= GIF_MIN_HEADER_LEN && &prefix[0..4] == GIF_MAGIC && prefix[5] == b'a' {
        return FileType::Gif;
    }
    if prefix.len() >= JPEG_MIN_HEADER_LEN
        && prefix[0..4] == JPEG_SOI_APP0
        && &prefix[6..10] == JFIF_TAG
    {
        return FileType::Jpeg;
    }
    FileType::Unknown
}

/// Reads at most [`SNIFF_PREFIX_LEN`] bytes from the start of a file.
///
/// # Errors
/// Returns an `Err` on I/O error (e.g., file not found, permission denied).
pub fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(SNIFF_PREFIX_LEN);
    file.take(SNIFF_PREFIX_LEN as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Classifies the entry at `path`.
///
/// Directories are reported as [`FileType::Directory`] without opening them.
/// Read failures are logged and reported as [`FileType::Unknown`].
pub fn classify_path(path: &Path) -> FileType {
    if path.is_dir() {
        return FileType::Directory;
    }
    match read_prefix(path) {
        Ok(prefix) => classify_bytes(&prefix),
        Err(e) => {
            log::debug!("Could not read header of '{}': {}", path.display(), e);
            FileType::Unknown
        }
    }
}
