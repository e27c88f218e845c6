// src/output/mod.rs

//! The tree report.
//!
//! Each directory prints one line with its name and aggregates:
//! `name (XkB;WxH;NN.NN%)`. Each picture file prints its name followed by
//! three indented metric lines. Non-picture files print nothing. Every level
//! of nesting adds one tab of indentation.

pub mod formatter;
pub mod probe;
pub mod writer;

use crate::constants::INDENT;
use crate::errors::Result;
use crate::tree::Node;
use formatter::{format_compression, format_dimensions, format_length};
use std::io::Write;

/// Renders `node` and everything below it, starting at indentation `depth`.
///
/// Children are visited in the order of [`DirNode::children`](crate::tree::DirNode::children).
///
/// # Examples
/// ```
/// use picstat::output::render;
/// use picstat::tree::{DirNode, Node};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// let pics = temp.path().join("pics");
/// fs::create_dir(&pics).unwrap();
/// fs::write(pics.join("a.gif"), [b'G', b'I', b'F', b'8', b'9', b'a', 2, 0, 5, 0]).unwrap();
///
/// let root = Node::Dir(DirNode::new(&pics));
/// let lines = render(&root, 0);
/// assert_eq!(lines[0], "pics (0kB;2x5;100.00%)");
/// assert_eq!(lines[1], "\ta.gif");
/// assert_eq!(lines[2], "\t\t length: \t0kB");
/// ```
pub fn render(node: &Node, depth: usize) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(node, depth, &mut lines);
    lines
}

fn render_into(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let prefix: String = std::iter::repeat(INDENT).take(depth).collect();

    match node {
        Node::Dir(dir) => {
            lines.push(format!(
                "{}{} ({};{};{})",
                prefix,
                node.name(),
                format_length(dir.total_length()),
                format_dimensions(dir.avg_dimensions()),
                format_compression(dir.avg_compression()),
            ));
            for child in dir.children() {
                render_into(child, depth + 1, lines);
            }
        }
        Node::File(file) => {
            if !file.is_picture() {
                return;
            }
            lines.push(format!("{}{}", prefix, node.name()));
            lines.push(format!(
                "{}{} length: \t{}",
                prefix,
                INDENT,
                format_length(file.total_length())
            ));
            lines.push(format!(
                "{}{} dim: \t{}",
                prefix,
                INDENT,
                format_dimensions(file.avg_dimensions())
            ));
            lines.push(format!(
                "{}{} compression: \t{}",
                prefix,
                INDENT,
                format_compression(file.avg_compression())
            ));
        }
    }
}

/// Writes the full report for `root` to `writer`, one line per entry.
pub fn write_report(root: &Node, writer: &mut dyn Write) -> Result<()> {
    for line in render(root, 0) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
