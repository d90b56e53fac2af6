use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::catalog::{IconSpec, ICON_CATALOG};
use crate::error::Error;
use crate::source::SourceImage;

/// Creates `dir` and any missing parent directories.  Succeeds if the
/// directory already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Resizes `source` to the catalog entry's pixel dimensions and writes it
/// as a PNG file into `output_dir`, replacing any existing file of that
/// name.  Returns the path of the written file.
pub fn write_icon(
    source: &SourceImage,
    spec: &IconSpec,
    output_dir: &Path,
) -> Result<PathBuf, Error> {
    let resized = source.resized(spec.pixel_size());
    let path = output_dir.join(spec.file_name);
    let file = File::create(&path).map_err(|err| Error::WriteIcon {
        path: path.clone(),
        source: err.into(),
    })?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(
        &mut writer,
        CompressionType::Best,
        FilterType::Adaptive,
    );
    resized
        .write_with_encoder(encoder)
        .map_err(|source| Error::WriteIcon {
            path: path.clone(),
            source,
        })?;
    // A dropped BufWriter swallows I/O errors, so flush explicitly.
    writer.flush().map_err(|err| Error::WriteIcon {
        path: path.clone(),
        source: err.into(),
    })?;
    Ok(path)
}

/// Creates `output_dir` if needed, then generates every icon in the
/// catalog in order, each resized directly from `source`.  Stops at the
/// first failure; icons already written are left in place.  Returns the
/// paths of the written files.
pub fn generate_icon_set(
    source: &SourceImage,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, Error> {
    ensure_output_dir(output_dir)?;
    let mut written = Vec::with_capacity(ICON_CATALOG.len());
    for spec in &ICON_CATALOG {
        written.push(write_icon(source, spec, output_dir)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn ensure_output_dir_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("ios/Runner/AppIcon.appiconset");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directories are fine.
        ensure_output_dir(&nested).unwrap();
    }

    #[test]
    fn ensure_output_dir_reports_creation_failure() {
        let dir = tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, b"").unwrap();
        let result = ensure_output_dir(&blocked);
        assert!(matches!(result, Err(Error::CreateDir { .. })));
    }

    #[test]
    fn write_icon_produces_exact_dimensions() {
        let dir = tempdir().unwrap();
        let source = sample_source(dir.path(), 64);
        let spec = &ICON_CATALOG[0];
        let path = write_icon(&source, spec, dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), spec.file_name);
        let written = image::open(&path).unwrap();
        let pixel_size = spec.pixel_size();
        assert_eq!((written.width(), written.height()), (pixel_size, pixel_size));
    }

    #[test]
    fn write_icon_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let source = sample_source(dir.path(), 64);
        let spec = &ICON_CATALOG[0];
        let path = dir.path().join(spec.file_name);
        fs::write(&path, b"stale contents").unwrap();
        write_icon(&source, spec, dir.path()).unwrap();
        let written = image::open(&path).unwrap();
        assert_eq!(written.width(), spec.pixel_size());
    }

    #[test]
    fn write_icon_reports_creation_failure() {
        let dir = tempdir().unwrap();
        let source = sample_source(dir.path(), 64);
        let spec = &ICON_CATALOG[0];
        let output_dir = dir.path().join("icons");
        fs::create_dir_all(output_dir.join(spec.file_name)).unwrap();
        let result = write_icon(&source, spec, &output_dir);
        assert!(matches!(result, Err(Error::WriteIcon { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_icon_reports_write_failure() {
        let dir = tempdir().unwrap();
        let source = sample_source(dir.path(), 64);
        let spec = &ICON_CATALOG[0];
        // Every write to /dev/full fails with ENOSPC.
        std::os::unix::fs::symlink("/dev/full", dir.path().join(spec.file_name))
            .unwrap();
        let result = write_icon(&source, spec, dir.path());
        assert!(matches!(result, Err(Error::WriteIcon { .. })));
    }

    #[test]
    fn generate_icon_set_writes_catalog_in_order() {
        let dir = tempdir().unwrap();
        let source = sample_source(dir.path(), 32);
        let output_dir = dir.path().join("icons");
        let written = generate_icon_set(&source, &output_dir).unwrap();
        assert_eq!(written.len(), ICON_CATALOG.len());
        for (path, spec) in written.iter().zip(ICON_CATALOG.iter()) {
            assert_eq!(path.file_name().unwrap(), spec.file_name);
            assert!(path.is_file());
        }
    }

    fn sample_source(dir: &Path, size: u32) -> SourceImage {
        let path = dir.join("sample-source.png");
        RgbImage::from_pixel(size, size, Rgb([200, 100, 50]))
            .save(&path)
            .unwrap();
        SourceImage::open(&path).unwrap()
    }
}
