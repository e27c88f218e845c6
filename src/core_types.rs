//! Defines the small value types shared by the sniffer, the metric
//! extractor and the tree model.

use std::fmt;

/// Classification of a filesystem entry, derived from its header bytes.
///
/// # Examples
///
/// ```
/// use picstat::core_types::FileType;
///
/// assert!(FileType::Gif.is_picture());
/// assert!(FileType::Jpeg.is_picture());
/// assert!(!FileType::Directory.is_picture());
/// assert!(!FileType::Unknown.is_picture());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    /// A directory; classified without reading any bytes.
    Directory,
    /// A file starting with a `GIF8?a` header.
    Gif,
    /// A file starting with a JFIF APP0 header.
    Jpeg,
    /// Anything else, including unreadable and short files.
    #[default]
    Unknown,
}

impl FileType {
    /// Returns `true` for the recognised picture types (GIF and JPEG).
    pub fn is_picture(self) -> bool {
        matches!(self, FileType::Gif | FileType::Jpeg)
    }

    /// Human-readable label used by the probe report.
    pub fn label(self) -> &'static str {
        match self {
            FileType::Directory => "directory",
            FileType::Gif => "GIF-image",
            FileType::Jpeg => "JPEG-image",
            FileType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pixel dimensions of a picture.
///
/// # Examples
///
/// ```
/// use picstat::core_types::Dimensions;
///
/// let dim = Dimensions::new(640, 480);
/// assert_eq!(dim.area(), 307_200);
/// assert_eq!(dim.to_string(), "640x480");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered by these dimensions.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
