// src/tree/dir_node.rs

use super::{listing::list_children, Node};
use crate::core_types::{Dimensions, FileType};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// A directory of the tree.
///
/// The child list and the flattened per-leaf value lists are loaded on first
/// use and cached, as are the three aggregates derived from them. Children are
/// owned exclusively by this node.
#[derive(Debug)]
pub struct DirNode {
    path: PathBuf,
    children: OnceCell<Vec<Node>>,
    lengths: OnceCell<Vec<u128>>,
    dimensions: OnceCell<Vec<Dimensions>>,
    compressions: OnceCell<Vec<f64>>,
    total_length: OnceCell<u128>,
    avg_dimensions: OnceCell<Option<Dimensions>>,
    avg_compression: OnceCell<Option<f64>>,
}

impl DirNode {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            children: OnceCell::new(),
            lengths: OnceCell::new(),
            dimensions: OnceCell::new(),
            compressions: OnceCell::new(),
            total_length: OnceCell::new(),
            avg_dimensions: OnceCell::new(),
            avg_compression: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_type(&self) -> FileType {
        FileType::Directory
    }

    /// Immediate entries of the directory, sorted by name.
    ///
    /// An unreadable directory has no children.
    pub fn children(&self) -> &[Node] {
        self.children.get_or_init(|| list_children(&self.path))
    }

    /// Lengths of every leaf below this directory, at any depth.
    pub fn lengths(&self) -> &[u128] {
        self.lengths.get_or_init(|| {
            let mut lengths = Vec::new();
            for child in self.children() {
                match child {
                    Node::Dir(dir) => lengths.extend_from_slice(dir.lengths()),
                    Node::File(file) => lengths.push(file.total_length()),
                }
            }
            lengths
        })
    }

    /// Dimensions of every parseable picture below this directory.
    pub fn dimensions(&self) -> &[Dimensions] {
        self.dimensions.get_or_init(|| {
            let mut dims = Vec::new();
            for child in self.children() {
                match child {
                    Node::Dir(dir) => dims.extend_from_slice(dir.dimensions()),
                    Node::File(file) => dims.extend(file.avg_dimensions()),
                }
            }
            dims
        })
    }

    /// Compression percentages of every parseable picture below this directory.
    pub fn compressions(&self) -> &[f64] {
        self.compressions.get_or_init(|| {
            let mut compressions = Vec::new();
            for child in self.children() {
                match child {
                    Node::Dir(dir) => compressions.extend_from_slice(dir.compressions()),
                    Node::File(file) => compressions.extend(file.avg_compression()),
                }
            }
            compressions
        })
    }

    /// Sum of all leaf lengths in the subtree. Saturates instead of wrapping.
    pub fn total_length(&self) -> u128 {
        *self.total_length.get_or_init(|| {
            self.lengths()
                .iter()
                .fold(0u128, |acc, len| acc.saturating_add(*len))
        })
    }

    /// Floor of the mean width and mean height over all picture leaves.
    pub fn avg_dimensions(&self) -> Option<Dimensions> {
        *self
            .avg_dimensions
            .get_or_init(|| mean_dimensions(self.dimensions()))
    }

    /// Arithmetic mean of all picture leaf compressions.
    pub fn avg_compression(&self) -> Option<f64> {
        *self
            .avg_compression
            .get_or_init(|| mean(self.compressions()))
    }
}

fn mean_dimensions(dims: &[Dimensions]) -> Option<Dimensions> {
    if dims.is_empty() {
        return None;
    }
    let count = dims.len() as u64;
    let total_width: u64 = dims.iter().map(|d| u64::from(d.width)).sum();
    let total_height: u64 = dims.iter().map(|d| u64::from(d.height)).sum();
    // Each mean is bounded by the largest component, so it fits back in u32.
    Some(Dimensions::new(
        (total_width / count) as u32,
        (total_height / count) as u32,
    ))
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
