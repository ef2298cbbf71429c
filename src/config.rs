use crate::error::IconError;
use image::Rgb;
use std::{path::PathBuf, str::FromStr};

/// Sizes generated when none are requested.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Largest edge length the command line accepts for a single icon.
pub const MAX_ICON_SIZE: u32 = 8192;

pub const DEFAULT_BACKGROUND: Rgb<u8> = Rgb([59, 130, 246]);
pub const DEFAULT_FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

const SIZE_PLACEHOLDER: &str = "{size}";

/// File name pattern for generated icons; `{size}` is replaced by the edge
/// length in pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, IconError> {
        let template = template.into();
        if !template.contains(SIZE_PLACEHOLDER) {
            return Err(IconError::InvalidTemplate { template });
        }
        Ok(OutputTemplate(template))
    }

    pub fn render(&self, size: u32) -> String {
        self.0.replace(SIZE_PLACEHOLDER, &size.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        OutputTemplate("icon-{size}.png".to_string())
    }
}

impl FromStr for OutputTemplate {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputTemplate::new(s)
    }
}

/// Everything a generation run needs.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub sizes: Vec<u32>,
    pub background: Rgb<u8>,
    pub foreground: Rgb<u8>,
    pub output_dir: PathBuf,
    pub template: OutputTemplate,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            background: DEFAULT_BACKGROUND,
            foreground: DEFAULT_FOREGROUND,
            output_dir: PathBuf::from("."),
            template: OutputTemplate::default(),
        }
    }
}

impl IconConfig {
    /// Reject zero-pixel sizes. Repeated sizes are allowed and simply
    /// rewrite the same file.
    pub fn validate(&self) -> Result<(), IconError> {
        if let Some(&size) = self.sizes.iter().find(|&&size| size == 0) {
            return Err(IconError::InvalidSize {
                size,
                reason: "size must be at least 1 pixel",
            });
        }
        Ok(())
    }
}

/// Parse a CSS color string (`#3b82f6`, `white`, ...)
/// into an opaque RGB value. Alpha is dropped.
pub fn parse_color(value: &str) -> Result<Rgb<u8>, String> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| format!("'{value}' is not a valid CSS color"))?;

    Ok(Rgb([
        channel(color.red),
        channel(color.green),
        channel(color.blue),
    ]))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
