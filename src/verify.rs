use anyhow::{Context, Result};
use image::Rgb;
use std::path::Path;

/// Colors sampled from a generated icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconInspection {
    pub width: u32,
    pub height: u32,
    /// Top-left pixel, always outside the circle for icons of 4px and up.
    pub corner: Rgb<u8>,
    /// Pixel at `(width / 2, height / 2)`.
    pub center: Rgb<u8>,
}

impl IconInspection {
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn matches(&self, background: Rgb<u8>, foreground: Rgb<u8>) -> bool {
        self.is_square() && self.corner == background && self.center == foreground
    }
}

/// Load an icon from disk and sample its corner and center pixels.
pub fn inspect(path: &Path) -> Result<IconInspection> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .to_rgb8();

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        anyhow::bail!("{} is empty", path.display());
    }

    Ok(IconInspection {
        width,
        height,
        corner: *img.get_pixel(0, 0),
        center: *img.get_pixel(width / 2, height / 2),
    })
}
