//! The lazily evaluated file tree.
//!
//! A [`Node`] is either a leaf ([`FileNode`]) or a directory ([`DirNode`]).
//! Nodes are built from a path without touching the filesystem. Each derived
//! value (classification, total length, average dimensions, average
//! compression, and for directories the child list) lives in its own
//! compute-once cell and is loaded on first access. Cached values are never
//! refreshed, even if the filesystem changes afterwards.
//!
//! Directory statistics fold over the flattened set of descendant leaves, not
//! over the children's own averages.
//!
//! # Example
//!
//! ```
//! use picstat::tree::DirNode;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! fs::create_dir(temp.path().join("sub")).unwrap();
//! fs::write(temp.path().join("sub").join("a.gif"), [b'G', b'I', b'F', b'8', b'9', b'a', 4, 0, 2, 0]).unwrap();
//! fs::write(temp.path().join("notes.txt"), "hello").unwrap();
//!
//! let root = DirNode::new(temp.path());
//! assert_eq!(root.total_length(), 15);
//! assert_eq!(root.avg_dimensions().unwrap().to_string(), "4x2");
//! ```

mod dir_node;
mod file_node;
mod listing;

pub use dir_node::DirNode;
pub use file_node::FileNode;

use crate::core_types::{Dimensions, FileType};
use std::path::Path;

/// A node of the scanned tree: a leaf file or a directory.
#[derive(Debug)]
pub enum Node {
    File(FileNode),
    Dir(DirNode),
}

impl Node {
    pub fn path(&self) -> &Path {
        match self {
            Node::File(file) => file.path(),
            Node::Dir(dir) => dir.path(),
        }
    }

    /// The final path component, or the whole path when there is none.
    pub fn name(&self) -> String {
        display_name(self.path())
    }

    pub fn file_type(&self) -> FileType {
        match self {
            Node::File(file) => file.file_type(),
            Node::Dir(dir) => dir.file_type(),
        }
    }

    pub fn is_picture(&self) -> bool {
        self.file_type().is_picture()
    }

    /// Total byte length: the file size for a leaf, the flattened sum of all
    /// leaf sizes for a directory.
    pub fn total_length(&self) -> u128 {
        match self {
            Node::File(file) => file.total_length(),
            Node::Dir(dir) => dir.total_length(),
        }
    }

    pub fn avg_dimensions(&self) -> Option<Dimensions> {
        match self {
            Node::File(file) => file.avg_dimensions(),
            Node::Dir(dir) => dir.avg_dimensions(),
        }
    }

    pub fn avg_compression(&self) -> Option<f64> {
        match self {
            Node::File(file) => file.avg_compression(),
            Node::Dir(dir) => dir.avg_compression(),
        }
    }

    pub fn as_dir(&self) -> Option<&DirNode> {
        match self {
            Node::Dir(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
