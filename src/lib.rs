//! `picstat` is a library and command-line tool that scans a directory tree
//! for GIF and JPEG files and reports size, dimension and compression
//! statistics per file and per directory.
//!
//! The pipeline has three layers:
//! 1.  **Sniff**: classify files by header bytes and read pixel dimensions
//!     ([`sniffing`], [`metrics`]).
//! 2.  **Aggregate**: a lazily loaded [`tree`] of nodes whose directory
//!     statistics fold over every descendant picture.
//! 3.  **Report**: render the tree as tab-indented lines ([`output`]).
//!
//! # Example: Library Usage
//!
//! ```
//! use picstat::{scan, output::render};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let album = temp_dir.path().join("album");
//! fs::create_dir(&album).unwrap();
//! // A 10x10 GIF header padded to 50 bytes.
//! let mut gif = vec![b'G', b'I', b'F', b'8', b'9', b'a', 10, 0, 10, 0];
//! gif.resize(50, 0);
//! fs::write(album.join("dot.gif"), gif).unwrap();
//!
//! let root = scan(&album);
//! assert_eq!(root.avg_compression(), Some(50.0));
//!
//! let lines = render(&root, 0);
//! assert_eq!(lines[0], "album (0kB;10x10;50.00%)");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod metrics;
pub mod output;
pub mod prelude;
pub mod sniffing;
pub mod tree;

pub use config::{Config, ConfigBuilder, OutputDestination, ReportMode};
pub use core_types::{Dimensions, FileType};

use crate::errors::{Error, Result};
use crate::tree::{DirNode, Node};
use std::path::Path;

/// Creates the unloaded root node for a tree report.
///
/// The root is always treated as a directory; a path that is missing or is a
/// regular file simply has no children.
pub fn scan(root: impl AsRef<Path>) -> Node {
    Node::Dir(DirNode::new(root.as_ref()))
}

/// Executes a complete run: builds the requested report and writes it to the
/// configured destination.
///
/// # Errors
/// Returns an error if the output destination cannot be opened or written.
/// Unreadable files and directories inside the scanned tree are not errors.
pub fn run(config: &Config) -> Result<()> {
    let mut writer = output::writer::setup_output_writer(config)?;

    match config.mode {
        ReportMode::Tree => {
            let root_path = config
                .root()
                .ok_or_else(|| Error::Config("No path given.".to_string()))?;
            if !root_path.is_dir() {
                log::warn!(
                    "'{}' is not a readable directory; reporting it as empty.",
                    root_path.display()
                );
            }
            let root = scan(root_path);
            output::write_report(&root, &mut writer)?;
            log::debug!(
                "Report finished: {} bytes in tree",
                root.total_length()
            );
        }
        ReportMode::Probe => {
            output::probe::write_probe_report(&config.input_paths, &mut writer)?;
        }
    }

    output::writer::finalize_output(writer)
}
