// tests/common.rs

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Not every integration test drives the binary.
pub fn picstat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("picstat"))
}

/// Writes a GIF header with the given screen size, padded with zeros to `total_len` bytes.
#[allow(dead_code)]
pub fn write_gif(path: &Path, width: u16, height: u16, total_len: usize) -> io::Result<()> {
    let mut bytes = b"GIF89a".to_vec();
    bytes.extend_from_slice(&width.to_le_bytes());
    bytes.extend_from_slice(&height.to_le_bytes());
    bytes.resize(total_len.max(bytes.len()), 0);
    fs::write(path, bytes)
}

/// Writes a JFIF stream with a baseline frame header, padded with zeros to `total_len` bytes.
#[allow(dead_code)]
pub fn write_jpeg(path: &Path, width: u16, height: u16, total_len: usize) -> io::Result<()> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend_from_slice(&[0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    bytes.extend_from_slice(&[0xFF, 0xC0, 0x00, 0x11, 0x08]);
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&[0x03, 0x01, 0x22, 0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01]);
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes.resize(total_len.max(bytes.len()), 0);
    fs::write(path, bytes)
}
