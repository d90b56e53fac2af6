//! Library for generating iOS app icon sets from a single source image.
//!
//! An iOS app ships its icon as a family of PNG files at fixed sizes,
//! collected in an `AppIcon.appiconset` directory inside an Xcode asset
//! catalog.  This crate owns the catalog of required sizes and produces
//! the complete set from one source image, resampling every icon
//! independently from the decoded source pixels.
//!
//! See https://developer.apple.com/design/human-interface-guidelines/app-icons
//! for more information about the required icon sizes.
//!
//! # Examples
//! ```no_run
//! use appiconset::{generate_icon_set, SourceImage};
//! use std::path::Path;
//!
//! let source = SourceImage::open("icon.png")?;
//! let written = generate_icon_set(&source, Path::new("AppIcon.appiconset"))?;
//! assert_eq!(written.len(), 15);
//! # Ok::<(), appiconset::Error>(())
//! ```

#![warn(missing_docs)]

mod catalog;
mod discovery;
mod error;
mod generate;
mod source;

pub use self::catalog::{IconSpec, ICON_CATALOG};
pub use self::discovery::find_source_image;
pub use self::error::Error;
pub use self::generate::{ensure_output_dir, generate_icon_set, write_icon};
pub use self::source::SourceImage;
