use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating an icon set.
#[derive(Debug, Error)]
pub enum IconError {
    /// A requested size cannot produce a usable icon.
    #[error("invalid icon size {size}: {reason}")]
    InvalidSize { size: u32, reason: &'static str },

    /// The file name template would not give each size its own file.
    #[error("output template {template:?} must contain the {{size}} placeholder")]
    InvalidTemplate { template: String },

    /// Creating the output directory or writing an icon file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the image.
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}
