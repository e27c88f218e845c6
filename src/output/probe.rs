// src/output/probe.rs

//! Per-file probe report.
//!
//! For each path: a `name: <path>, type: <type>` line, followed for pictures by
//! the byte length, the frame size and an integer compression percentage.
//! Pictures whose dimensions cannot be read print nothing at all.

use crate::constants::NULL_MARKER;
use crate::core_types::FileType;
use crate::errors::Result;
use crate::{metrics, sniffing};
use std::io::Write;
use std::path::Path;

/// Produces the probe lines for a single path.
///
/// # Examples
/// ```
/// use picstat::output::probe::probe_lines;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let gif = temp.path().join("x.gif");
/// fs::write(&gif, [b'G', b'I', b'F', b'8', b'7', b'a', 3, 0, 3, 0]).unwrap();
///
/// let lines = probe_lines(&gif);
/// assert!(lines[0].ends_with("x.gif, type: GIF-image"));
/// assert_eq!(lines[1], "  length:      10");
/// assert_eq!(lines[2], "  size:        3 x 3");
/// assert_eq!(lines[3], "  compression: 111%");
/// ```
pub fn probe_lines(path: &Path) -> Vec<String> {
    let file_type = sniffing::classify_path(path);
    let header = format!("name: {}, type: {}", path.display(), file_type);

    match file_type {
        FileType::Directory | FileType::Unknown => vec![header],
        FileType::Gif | FileType::Jpeg => {
            let Some(dim) = sniffing::dimensions(path, file_type) else {
                log::debug!("No dimensions for '{}', skipping", path.display());
                return Vec::new();
            };
            let length = metrics::file_size(path).unwrap_or_else(|e| {
                log::debug!("{}", e);
                0
            });
            let raw_size = metrics::channel_divisor(file_type)
                .map(|divisor| dim.area() * divisor)
                .unwrap_or(0);
            let compression = match (u128::from(length) * 100).checked_div(u128::from(raw_size)) {
                Some(percent) => format!("{}%", percent),
                None => NULL_MARKER.to_string(),
            };
            vec![
                header,
                format!("  length:      {}", length),
                format!("  size:        {} x {}", dim.width, dim.height),
                format!("  compression: {}", compression),
            ]
        }
    }
}

/// Writes the probe report for every path, in order.
pub fn write_probe_report(paths: &[impl AsRef<Path>], writer: &mut dyn Write) -> Result<()> {
    for path in paths {
        for line in probe_lines(path.as_ref()) {
            writeln!(writer, "{}", line)?;
        }
    }
    Ok(())
}
