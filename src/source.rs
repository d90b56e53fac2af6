use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ColorType, ImageReader, RgbaImage};

use crate::error::Error;

/// A source image decoded into memory, with its pixel data normalized to
/// 8-bit RGBA.
pub struct SourceImage {
    path: PathBuf,
    color_type: ColorType,
    image: RgbaImage,
}

impl SourceImage {
    /// Opens and decodes the image file at `path`.  The format is detected
    /// from the file contents, so a misnamed but otherwise valid image
    /// still decodes.  Pixel data is converted to 8-bit RGBA; images
    /// without an alpha channel become fully opaque.
    ///
    /// Returns an error if the file cannot be read or is not a supported
    /// image format.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<SourceImage, Error> {
        let path = path.as_ref().to_path_buf();
        let reader = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|err| Error::Decode {
                path: path.clone(),
                source: err.into(),
            })?;
        let decoded = reader.decode().map_err(|source| Error::Decode {
            path: path.clone(),
            source,
        })?;
        let color_type = decoded.color();
        let image = decoded.into_rgba8();
        Ok(SourceImage { path, color_type, image })
    }

    /// Returns the path this image was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the color type the file decoded as, before the pixel data
    /// was normalized to RGBA.
    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    /// Returns a reference to the normalized RGBA pixel data.
    pub fn rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns a copy of the image resampled to a `pixel_size` square with
    /// a Lanczos filter.  Every call resamples from the original decoded
    /// pixels, never from a previously resized copy.  Non-square sources
    /// are stretched to fit.
    pub fn resized(&self, pixel_size: u32) -> RgbaImage {
        imageops::resize(&self.image, pixel_size, pixel_size, FilterType::Lanczos3)
    }
}
