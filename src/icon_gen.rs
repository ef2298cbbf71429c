use crate::{
    config::IconConfig,
    error::IconError,
    raster::{BoundingBox, Canvas},
};
use image::{Rgb, RgbImage};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Progress notifications emitted by [`generate_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// One icon has been written to disk.
    Created {
        size: u32,
        file_name: &'a str,
        path: &'a Path,
    },
    /// Every requested icon has been written.
    Finished { count: usize },
}

/// A file written by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub file_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
}

/// Margin between the image edge and the circle's bounding box.
pub fn margin_for(size: u32) -> u32 {
    size / 4
}

/// Draw a single icon: background fill, then the centered circle.
pub fn render_icon(size: u32, background: Rgb<u8>, foreground: Rgb<u8>) -> RgbImage {
    let mut canvas = RgbImage::blank(size, size, background);
    let bounds = BoundingBox::inset(size, margin_for(size));
    canvas.fill_ellipse(bounds, foreground);
    canvas
}

/// Generate one icon per configured size, in order.
///
/// The configuration is validated before anything touches the filesystem.
/// After that the run is fail-fast: the first write error aborts the
/// remaining sizes and leaves already written files in place.
pub fn generate_all<F>(
    config: &IconConfig,
    mut on_progress: F,
) -> Result<GenerationReport, IconError>
where
    F: FnMut(&Progress<'_>),
{
    config.validate()?;

    create_dir_all(&config.output_dir).map_err(|e| IconError::io(&config.output_dir, e))?;
    log::debug!(
        "Generating {} icon(s) into {}",
        config.sizes.len(),
        config.output_dir.display()
    );

    let mut report = GenerationReport::default();

    for &size in &config.sizes {
        let file_name = config.template.render(size);
        let path = config.output_dir.join(&file_name);

        let icon = render_icon(size, config.background, config.foreground);
        save_png(&icon, &path)?;
        log::debug!("Wrote {}x{} icon to {}", size, size, path.display());

        on_progress(&Progress::Created {
            size,
            file_name: &file_name,
            path: &path,
        });
        report.icons.push(GeneratedIcon {
            size,
            file_name,
            path,
        });
    }

    on_progress(&Progress::Finished {
        count: report.icons.len(),
    });

    Ok(report)
}

fn save_png(image: &RgbImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut out_file = BufWriter::new(file);

    image
        .write_png(&mut out_file)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    out_file.flush().map_err(|e| IconError::io(path, e))?;

    Ok(())
}
