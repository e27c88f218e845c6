// src/sniffing/gif.rs

use crate::core_types::Dimensions;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

/// Length of the `GIF87a`/`GIF89a` signature preceding the screen descriptor.
const GIF_SIGNATURE_LEN: usize = 6;

/// Reads the logical screen size from a GIF stream.
///
/// The 6-byte signature is skipped, then width and height are read as
/// little-endian 16-bit values.
///
/// # Errors
/// Returns an `Err` if the stream ends before the screen descriptor or the
/// read fails.
///
/// # Examples
/// ```
/// use picstat::core_types::Dimensions;
/// use picstat::sniffing::read_gif_dimensions;
///
/// let header: &[u8] = &[b'G', b'I', b'F', b'8', b'7', b'a', 0x2C, 0x01, 0xC8, 0x00];
/// assert_eq!(read_gif_dimensions(header).unwrap(), Dimensions::new(300, 200));
/// ```
pub fn read_gif_dimensions<R: Read>(mut reader: R) -> io::Result<Dimensions> {
    let mut signature = [0u8; GIF_SIGNATURE_LEN];
    reader.read_exact(&mut signature)?;

    let mut size = [0u8; 4];
    reader.read_exact(&mut size)?;
    let width = u16::from_le_bytes([size[0], size[1]]);
    let height = u16::from_le_bytes([size[2], size[3]]);
    Ok(Dimensions::new(u32::from(width), u32::from(height)))
}

/// Reads the logical screen size of the GIF file at `path`.
///
/// Returns `None` if the file cannot be opened or is truncated.
pub fn gif_dimensions(path: &Path) -> Option<Dimensions> {
    let result = File::open(path).and_then(|file| read_gif_dimensions(BufReader::new(file)));
    match result {
        Ok(dim) => Some(dim),
        Err(e) => {
            log::debug!("Could not read GIF dimensions of '{}': {}", path.display(), e);
            None
        }
    }
}
