//! The `picstat` prelude for convenient library usage.
//!
//! ```
//! use picstat::prelude::*;
//! use tempfile::tempdir;
//!
//! let temp = tempdir().unwrap();
//! let root = scan(temp.path());
//! assert_eq!(root.total_length(), 0);
//! assert_eq!(render(&root, 0).len(), 1);
//! ```

pub use crate::config::{Config, ConfigBuilder, OutputDestination, ReportMode};
pub use crate::core_types::{Dimensions, FileType};
pub use crate::errors::{Error, Result};
pub use crate::metrics::{compression, compression_ratio, file_size};
pub use crate::output::{probe::probe_lines, render, write_report};
pub use crate::sniffing::{classify_bytes, classify_path, dimensions};
pub use crate::tree::{DirNode, FileNode, Node};
pub use crate::{run, scan};
