use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name suffixes (lowercase) recognized as candidate source images.
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".tiff", ".bmp"];

/// Scans `dir` (without recursing) for image files and returns the name of
/// the first candidate in lexicographic order, or `None` if the directory
/// contains none.  A candidate is any regular file whose name ends,
/// case-insensitively, with a recognized image extension; file contents are
/// not examined until decode time.
pub fn find_source_image(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };
        if is_image_name(&name) && entry.path().is_file() {
            candidates.push(name);
        }
    }
    Ok(candidates.into_iter().min().map(PathBuf::from))
}

fn is_image_name(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
