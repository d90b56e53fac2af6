/// One entry in the icon catalog: a required icon size and the name of the
/// PNG file it is saved as within the icon set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSpec {
    /// Nominal icon size in points, before the display scale factor is
    /// applied.
    pub point_size: f64,
    /// Display density multiplier (1x, 2x, or 3x).
    pub scale: u32,
    /// Name of the generated PNG file within the icon set directory.
    pub file_name: &'static str,
}

impl IconSpec {
    /// Returns the width and height of the generated icon, in pixels.
    /// Normally this is the same as the point size, but for 2x and 3x
    /// "retina" density icons it will be that multiple of the point size,
    /// rounded to the nearest whole pixel.
    ///
    /// # Examples
    /// ```
    /// use appiconset::ICON_CATALOG;
    /// let spec = ICON_CATALOG
    ///     .iter()
    ///     .find(|spec| spec.file_name == "Icon-App-83.5x83.5@2x.png")
    ///     .unwrap();
    /// assert_eq!(spec.pixel_size(), 167);
    /// ```
    pub fn pixel_size(&self) -> u32 {
        (self.point_size * f64::from(self.scale)).round() as u32
    }
}

/// The fixed, ordered list of icons that make up a complete
/// `AppIcon.appiconset`.  Every generated icon set contains exactly these
/// fifteen files.
///
/// # Examples
/// ```
/// use appiconset::ICON_CATALOG;
/// assert_eq!(ICON_CATALOG.len(), 15);
/// ```
pub static ICON_CATALOG: [IconSpec; 15] = [
    // iPhone
    IconSpec { point_size: 20.0, scale: 2, file_name: "Icon-App-20x20@2x.png" },
    IconSpec { point_size: 20.0, scale: 3, file_name: "Icon-App-20x20@3x.png" },
    IconSpec { point_size: 29.0, scale: 1, file_name: "Icon-App-29x29@1x.png" },
    IconSpec { point_size: 29.0, scale: 2, file_name: "Icon-App-29x29@2x.png" },
    IconSpec { point_size: 29.0, scale: 3, file_name: "Icon-App-29x29@3x.png" },
    IconSpec { point_size: 40.0, scale: 2, file_name: "Icon-App-40x40@2x.png" },
    IconSpec { point_size: 40.0, scale: 3, file_name: "Icon-App-40x40@3x.png" },
    IconSpec { point_size: 60.0, scale: 2, file_name: "Icon-App-60x60@2x.png" },
    IconSpec { point_size: 60.0, scale: 3, file_name: "Icon-App-60x60@3x.png" },
    // iPad
    IconSpec { point_size: 20.0, scale: 1, file_name: "Icon-App-20x20@1x.png" },
    IconSpec { point_size: 40.0, scale: 1, file_name: "Icon-App-40x40@1x.png" },
    IconSpec { point_size: 76.0, scale: 1, file_name: "Icon-App-76x76@1x.png" },
    IconSpec { point_size: 76.0, scale: 2, file_name: "Icon-App-76x76@2x.png" },
    IconSpec { point_size: 83.5, scale: 2, file_name: "Icon-App-83.5x83.5@2x.png" },
    // App Store
    IconSpec { point_size: 1024.0, scale: 1, file_name: "Icon-App-1024x1024@1x.png" },
];
