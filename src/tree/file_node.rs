// src/tree/file_node.rs

use crate::core_types::{Dimensions, FileType};
use crate::{metrics, sniffing};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// A leaf of the tree: any filesystem entry that is not a directory.
///
/// Every accessor is computed on first call and cached for the lifetime of
/// the node.
#[derive(Debug)]
pub struct FileNode {
    path: PathBuf,
    file_type: OnceCell<FileType>,
    length: OnceCell<u64>,
    dimensions: OnceCell<Option<Dimensions>>,
    compression: OnceCell<Option<f64>>,
}

impl FileNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_type: OnceCell::new(),
            length: OnceCell::new(),
            dimensions: OnceCell::new(),
            compression: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header-based classification of the file.
    pub fn file_type(&self) -> FileType {
        *self
            .file_type
            .get_or_init(|| sniffing::classify_path(&self.path))
    }

    pub fn is_picture(&self) -> bool {
        self.file_type().is_picture()
    }

    /// Raw size of the file in bytes, whatever its type. Unreadable files
    /// and links to directories count as zero.
    pub fn total_length(&self) -> u128 {
        u128::from(self.length())
    }

    fn length(&self) -> u64 {
        *self.length.get_or_init(|| {
            // A leaf that resolves to a directory is a link; its target's
            // inode size is not file content.
            if self.file_type() == FileType::Directory {
                return 0;
            }
            match metrics::file_size(&self.path) {
                Ok(len) => len,
                Err(e) => {
                    log::debug!("{}", e);
                    0
                }
            }
        })
    }

    /// Pixel dimensions, present only for pictures whose header parses.
    pub fn avg_dimensions(&self) -> Option<Dimensions> {
        *self.dimensions.get_or_init(|| {
            let file_type = self.file_type();
            if !file_type.is_picture() {
                return None;
            }
            sniffing::dimensions(&self.path, file_type)
        })
    }

    /// Compression percentage, present only when dimensions are.
    ///
    /// A picture whose header reports a zero width or height has dimensions
    /// but no compression, since its raw size is zero.
    pub fn avg_compression(&self) -> Option<f64> {
        *self.compression.get_or_init(|| {
            let dim = self.avg_dimensions()?;
            metrics::compression_ratio(self.length(), dim, self.file_type())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_gif(path: &Path, width: u16, height: u16, total_len: usize) -> std::io::Result<()> {
        let mut bytes = b"GIF87a".to_vec();
        bytes.extend_from_slice(&width.to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.resize(total_len, 0);
        fs::write(path, bytes)
    }

    #[test]
    fn test_gif_leaf_metrics() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("pic.gif");
        write_gif(&path, 10, 10, 25)?;

        let node = FileNode::new(&path);
        assert_eq!(node.file_type(), FileType::Gif);
        assert_eq!(node.total_length(), 25);
        assert_eq!(node.avg_dimensions(), Some(Dimensions::new(10, 10)));
        assert_eq!(node.avg_compression(), Some(25.0));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_non_picture_leaf_keeps_length_only() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("readme.txt");
        fs::write(&path, "0123456789")?;

        let node = FileNode::new(&path);
        assert!(!node.is_picture());
        assert_eq!(node.total_length(), 10);
        assert_eq!(node.avg_dimensions(), None);
        assert_eq!(node.avg_compression(), None);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_values_are_cached() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("pic.gif");
        write_gif(&path, 4, 4, 16)?;

        let node = FileNode::new(&path);
        let first = (
            node.file_type(),
            node.total_length(),
            node.avg_dimensions(),
            node.avg_compression(),
        );

        // Replacing the file does not change what the node reports.
        fs::write(&path, "no longer a picture, and longer than before")?;
        let second = (
            node.file_type(),
            node.total_length(),
            node.avg_dimensions(),
            node.avg_compression(),
        );
        assert_eq!(first, second);
        assert_eq!(FileNode::new(&path).file_type(), FileType::Unknown);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_zero_area_picture_has_no_compression() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("flat.gif");
        write_gif(&path, 0, 12, 40)?;

        let node = FileNode::new(&path);
        assert_eq!(node.avg_dimensions(), Some(Dimensions::new(0, 12)));
        assert_eq!(node.avg_compression(), None);
        assert_eq!(node.total_length(), 40);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_file_is_empty_leaf() {
        let node = FileNode::new("missing/leaf.gif");
        assert_eq!(node.file_type(), FileType::Unknown);
        assert_eq!(node.total_length(), 0);
        assert_eq!(node.avg_dimensions(), None);
        assert_eq!(node.avg_compression(), None);
    }
}
