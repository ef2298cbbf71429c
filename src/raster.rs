//! Minimal drawing surface used by the icon generator.
//!
//! The generator only needs four things from an imaging backend: allocate a
//! canvas, fill it, fill an ellipse, and encode the result losslessly.
//! [`Canvas`] captures exactly that, and is implemented for [`RgbImage`].

use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, ImageResult, Rgb, RgbImage,
};
use std::io::Write;

/// Axis-aligned box in pixel coordinates, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Box inset by `margin` on every side of a `size × size` square,
    /// spanning `margin..=size - margin` on both axes.
    pub fn inset(size: u32, margin: u32) -> Self {
        let far = size.saturating_sub(margin);
        BoundingBox {
            left: margin,
            top: margin,
            right: far,
            bottom: far,
        }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left) + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top) + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }
}

pub trait Canvas: Sized {
    /// Allocate a `width × height` canvas with every pixel set to `color`.
    fn blank(width: u32, height: u32, color: Rgb<u8>) -> Self;

    fn fill(&mut self, color: Rgb<u8>);

    /// Paint every pixel whose center falls inside the ellipse inscribed in
    /// `bounds`. Parts of the box outside the canvas are ignored.
    fn fill_ellipse(&mut self, bounds: BoundingBox, color: Rgb<u8>);

    /// Encode the canvas as an RGB PNG.
    fn write_png<W: Write>(&self, w: W) -> ImageResult<()>;
}

impl Canvas for RgbImage {
    fn blank(width: u32, height: u32, color: Rgb<u8>) -> Self {
        let mut canvas = RgbImage::new(width, height);
        canvas.fill(color);
        canvas
    }

    fn fill(&mut self, color: Rgb<u8>) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }

    fn fill_ellipse(&mut self, bounds: BoundingBox, color: Rgb<u8>) {
        if self.width() == 0 || self.height() == 0 || bounds.right < bounds.left {
            return;
        }

        // Work in pixel-edge space: the box covers [left, right + 1).
        let center_x = (bounds.left as f64 + bounds.right as f64 + 1.0) / 2.0;
        let center_y = (bounds.top as f64 + bounds.bottom as f64 + 1.0) / 2.0;
        let radius_x = bounds.width() as f64 / 2.0;
        let radius_y = bounds.height() as f64 / 2.0;

        let max_x = bounds.right.min(self.width() - 1);
        let max_y = bounds.bottom.min(self.height() - 1);

        for y in bounds.top..=max_y {
            let dy = (y as f64 + 0.5 - center_y) / radius_y;
            for x in bounds.left..=max_x {
                let dx = (x as f64 + 0.5 - center_x) / radius_x;
                if dx * dx + dy * dy <= 1.0 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    fn write_png<W: Write>(&self, w: W) -> ImageResult<()> {
        let encoder =
            PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
        encoder.write_image(self.as_raw(), self.width(), self.height(), ColorType::Rgb8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Rgb<u8> = Rgb([59, 130, 246]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn inset_box_spans_margin_to_far_edge() {
        let bounds = BoundingBox::inset(16, 4);
        assert_eq!(bounds, BoundingBox { left: 4, top: 4, right: 12, bottom: 12 });
        assert_eq!(bounds.width(), 9);
        assert!(bounds.contains(12, 4));
        assert!(!bounds.contains(13, 4));
    }

    #[test]
    fn ellipse_stays_inside_its_box() {
        let mut canvas = RgbImage::blank(32, 32, BLUE);
        let bounds = BoundingBox::inset(32, 8);
        canvas.fill_ellipse(bounds, WHITE);

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if !bounds.contains(x, y) {
                assert_eq!(*pixel, BLUE, "pixel ({x}, {y}) outside the box was painted");
            }
        }
        assert_eq!(*canvas.get_pixel(16, 16), WHITE);
        // Box corners are outside the inscribed circle.
        assert_eq!(*canvas.get_pixel(8, 8), BLUE);
        assert_eq!(*canvas.get_pixel(24, 24), BLUE);
    }

    #[test]
    fn ellipse_is_symmetric() {
        let mut canvas = RgbImage::blank(48, 48, BLUE);
        canvas.fill_ellipse(BoundingBox::inset(48, 12), WHITE);

        // The box spans 12..=36, so mirror around 24.
        for y in 12..=36 {
            for x in 12..=36 {
                assert_eq!(
                    canvas.get_pixel(x, y),
                    canvas.get_pixel(48 - x, y),
                    "asymmetry at ({x}, {y})"
                );
                assert_eq!(canvas.get_pixel(x, y), canvas.get_pixel(y, x));
            }
        }
    }

    #[test]
    fn ellipse_clipped_at_canvas_edge() {
        // Zero margin on a 2px canvas puts the far edge of the box off-canvas.
        let mut canvas = RgbImage::blank(2, 2, BLUE);
        canvas.fill_ellipse(BoundingBox::inset(2, 0), WHITE);
        assert_eq!(*canvas.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn blank_fills_every_pixel() {
        // A zeroed buffer would leave black pixels behind.
        let canvas = RgbImage::blank(5, 3, BLUE);
        assert_eq!(canvas.dimensions(), (5, 3));
        assert!(canvas.pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut canvas = RgbImage::blank(4, 4, WHITE);
        canvas.fill(BLUE);
        assert!(canvas.pixels().all(|p| *p == BLUE));
    }

    #[test]
    fn png_round_trip_keeps_rgb() {
        let mut canvas = RgbImage::blank(16, 16, BLUE);
        canvas.fill_ellipse(BoundingBox::inset(16, 4), WHITE);

        let mut buf = Vec::new();
        canvas.write_png(&mut buf).expect("encode");
        let decoded = image::load_from_memory(&buf).expect("decode");

        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), canvas);
    }
}
