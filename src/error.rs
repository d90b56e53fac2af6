use std::io;
use std::path::PathBuf;

/// An error that occurred while generating an icon set.
///
/// Each variant corresponds to one step of generation, so callers can tell
/// a source image that failed to decode apart from an output directory or
/// icon file that failed to be written.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read, or its contents could not be
    /// decoded as a supported image format.
    #[error("failed to decode source image {}: {source}", .path.display())]
    Decode {
        /// Path of the source image.
        path: PathBuf,
        /// The underlying decode failure.
        source: image::ImageError,
    },
    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem failure.
        source: io::Error,
    },
    /// A resized icon could not be encoded or written to disk.
    #[error("failed to write icon {}: {source}", .path.display())]
    WriteIcon {
        /// Path of the icon file that could not be written.
        path: PathBuf,
        /// The underlying encode or write failure.
        source: image::ImageError,
    },
}
