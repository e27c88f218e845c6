// src/tree/listing.rs

use super::{DirNode, FileNode, Node};
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Lists the immediate entries of `dir` as fresh, unloaded nodes.
///
/// Entries are sorted by file name. Symbolic links are not followed, so a
/// link to a directory becomes a leaf that contributes no length. An
/// unreadable directory (or a path that is not a directory at all) yields an
/// empty list; individual unreadable entries are skipped.
pub(super) fn list_children(dir: &Path) -> Vec<Node> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut children = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let is_dir = entry.file_type().is_dir();
                let path = entry.into_path();
                let node = if is_dir {
                    Node::Dir(DirNode::new(path))
                } else {
                    Node::File(FileNode::new(path))
                };
                children.push(node);
            }
            Err(e) => {
                // Covers both the directory itself and single entries.
                warn!("Skipping unreadable entry under '{}': {}", dir.display(), e);
            }
        }
    }
    debug!("Listed {} entries in '{}'", children.len(), dir.display());
    children
}
