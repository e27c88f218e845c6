// src/sniffing/jpeg.rs

//! Scans JPEG segments for the first baseline/extended start-of-frame marker.
//!
//! This is a deliberately simple scanner: it walks marker segments from the
//! start of the file and stops at the first SOF0..SOF3 segment. Files whose
//! frame header is only reachable past entropy-coded data, or that use other
//! SOF variants (progressive, lossless, arithmetic), resolve to no dimensions.

use crate::core_types::Dimensions;
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const SOF_FIRST: u8 = 0xC0;
const SOF_LAST: u8 = 0xC3;

fn read_u8<R: Read>(reader: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u16_be<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Skips up to `count` bytes. Stopping early at end of stream is not an
/// error; the next read reports it.
fn skip<R: Read>(reader: &mut R, count: u64) -> io::Result<()> {
    io::copy(&mut reader.by_ref().take(count), &mut io::sink())?;
    Ok(())
}

/// Reads the frame size from a JPEG stream.
///
/// Returns `Ok(None)` when the stream does not start with an SOI marker.
///
/// # Errors
/// Returns an `Err` if the stream ends (or a read fails) before a
/// start-of-frame segment is found.
///
/// # Examples
/// ```
/// use picstat::core_types::Dimensions;
/// use picstat::sniffing::read_jpeg_dimensions;
///
/// // SOI, then an SOF0 segment: length 17, precision 8, height 480, width 640.
/// let bytes: &[u8] = &[0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x01, 0xE0, 0x02, 0x80];
/// assert_eq!(read_jpeg_dimensions(bytes).unwrap(), Some(Dimensions::new(640, 480)));
/// ```
pub fn read_jpeg_dimensions<R: Read>(mut reader: R) -> io::Result<Option<Dimensions>> {
    if read_u8(&mut reader)? != MARKER_PREFIX || read_u8(&mut reader)? != SOI {
        return Ok(None);
    }

    loop {
        let mut marker = read_u8(&mut reader)?;
        while marker == MARKER_PREFIX {
            marker = read_u8(&mut reader)?;
        }
        let segment_len = read_u16_be(&mut reader)?;

        if (SOF_FIRST..=SOF_LAST).contains(&marker) {
            let _precision = read_u8(&mut reader)?;
            let height = read_u16_be(&mut reader)?;
            let width = read_u16_be(&mut reader)?;
            return Ok(Some(Dimensions::new(u32::from(width), u32::from(height))));
        }

        // The length field counts itself.
        skip(&mut reader, u64::from(segment_len.saturating_sub(2)))?;
    }
}

/// Reads the frame size of the JPEG file at `path`.
///
/// Returns `None` if the file cannot be opened, is truncated, or holds no
/// SOF0..SOF3 segment before the stream ends.
pub fn jpeg_dimensions(path: &Path) -> Option<Dimensions> {
    let result = File::open(path).and_then(|file| read_jpeg_dimensions(BufReader::new(file)));
    match result {
        Ok(dim) => dim,
        Err(e) => {
            log::debug!("Could not read JPEG dimensions of '{}': {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Builds a minimal JFIF stream: SOI, APP0, optional extra segments, SOF.
    fn jpeg_bytes(sof_marker: u8, width: u16, height: u16) -> Vec<u8> {
        let mut bytes = vec![0xFF, 0xD8];
        // APP0 / JFIF, length 16
        bytes.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
        bytes.extend_from_slice(b"JFIF\0");
        bytes.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
        // DQT stub, length 4
        bytes.extend_from_slice(&[0xFF, 0xDB, 0x00, 0x04, 0xAA, 0xBB]);
        // SOF
        bytes.extend_from_slice(&[0xFF, sof_marker, 0x00, 0x11, 0x08]);
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&[0x03, 0x01, 0x22, 0x00]);
        bytes
    }

    #[test]
    fn test_baseline_sof_width_and_height() -> io::Result<()> {
        let bytes = jpeg_bytes(0xC0, 1024, 768);
        assert_eq!(
            read_jpeg_dimensions(bytes.as_slice())?,
            Some(Dimensions::new(1024, 768))
        );
        Ok(())
    }

    #[test]
    fn test_extended_sof_markers_accepted() -> io::Result<()> {
        for marker in 0xC1..=0xC3 {
            let bytes = jpeg_bytes(marker, 32, 16);
            assert_eq!(
                read_jpeg_dimensions(bytes.as_slice())?,
                Some(Dimensions::new(32, 16))
            );
        }
        Ok(())
    }

    #[test]
    fn test_fill_bytes_before_marker_are_skipped() -> io::Result<()> {
        let bytes = [
            0xFF, 0xD8, 0xFF, 0xFF, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x00, 0x0A, 0x00, 0x14,
        ];
        assert_eq!(
            read_jpeg_dimensions(&bytes[..])?,
            Some(Dimensions::new(20, 10))
        );
        Ok(())
    }

    #[test]
    fn test_missing_soi_is_none() -> io::Result<()> {
        let bytes = [0x00, 0xD8, 0xFF, 0xC0];
        assert_eq!(read_jpeg_dimensions(&bytes[..])?, None);
        Ok(())
    }

    #[test]
    fn test_progressive_only_stream_runs_out() {
        // SOF6 is not one of the scanned markers, so the scan runs off the end.
        let mut bytes = jpeg_bytes(0xC0, 8, 8);
        let marker_index = bytes.len() - 12;
        bytes[marker_index] = 0xC6;
        assert!(read_jpeg_dimensions(bytes.as_slice()).is_err());
    }

    #[test]
    fn test_truncated_segment_is_error() {
        let bytes = jpeg_bytes(0xC0, 640, 480);
        let result = read_jpeg_dimensions(&bytes[..bytes.len() - 8]);
        assert!(result.is_err());
    }

    #[test]
    fn test_jpeg_dimensions_from_file() -> io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("photo.jpg");
        fs::write(&path, jpeg_bytes(0xC0, 800, 600))?;
        assert_eq!(jpeg_dimensions(&path), Some(Dimensions::new(800, 600)));

        let broken = temp.path().join("broken.jpg");
        fs::write(&broken, [0xFF, 0xD8, 0xFF, 0xE0, 0x00])?;
        assert_eq!(jpeg_dimensions(&broken), None);
        temp.close()?;
        Ok(())
    }
}
