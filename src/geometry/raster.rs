//! Bitmap palettes.
//!
//! Any ARGB image can act as a palette. Pixels with zero alpha are outside
//! the selectable region.

use std::path::Path;

use image::RgbaImage;

use crate::affine::Affine;
use crate::error::{Result, SwatchError};
use crate::types::{Colour, Pixel, Point, Rect, View};

/// A fixed-size grid of ARGB pixels placed somewhere in view space.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
    bounds: Rect<View>,
}

impl RasterImage {
    /// Build from row-major pixels. Bounds default to the bitmap's own size
    /// at the view origin.
    pub fn new(width: u32, height: u32, pixels: Vec<Colour>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SwatchError::InvalidPalette {
                message: format!("raster palette has no area ({}x{})", width, height),
            });
        }

        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(SwatchError::InvalidPalette {
                message: format!(
                    "raster palette is {}x{} but has {} pixels (expected {})",
                    width,
                    height,
                    pixels.len(),
                    expected
                ),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            bounds: Rect::sized(width as f32, height as f32),
        })
    }

    /// Build from a decoded RGBA image.
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self> {
        let pixels = img.pixels().map(|p| Colour::from_rgba(p.0)).collect();
        Self::new(img.width(), img.height(), pixels)
    }

    /// Decode an image file into a palette.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| SwatchError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .to_rgba8();

        tracing::debug!(
            path = %path.display(),
            width = img.width(),
            height = img.height(),
            "loaded raster palette"
        );

        Self::from_rgba_image(&img)
    }

    /// Place the bitmap over `bounds` in view space.
    pub fn with_bounds(mut self, bounds: Rect<View>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(SwatchError::InvalidPalette {
                message: "raster palette bounds have no area".to_string(),
            });
        }
        self.bounds = bounds;
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect<View> {
        self.bounds
    }

    /// Stored pixel under `p`, or transparent outside `[0,W)×[0,H)`.
    pub fn colour_at(&self, p: Point<Pixel>) -> Colour {
        // NaN fails this check too
        if !(p.x >= 0.0 && p.y >= 0.0) {
            return Colour::TRANSPARENT;
        }

        let (x, y) = (p.x.floor(), p.y.floor());
        if x >= self.width as f32 || y >= self.height as f32 {
            return Colour::TRANSPARENT;
        }

        let index = y as usize * self.width as usize + x as usize;
        self.pixels.get(index).copied().unwrap_or(Colour::TRANSPARENT)
    }

    /// The transform that stretches the bitmap over its view bounds.
    pub fn view_transform(&self) -> Affine<Pixel, View> {
        let sx = self.bounds.width / self.width as f32;
        let sy = self.bounds.height / self.height as f32;
        Affine::<Pixel, View>::scale(sx, sy).then(&Affine::translate(
            self.bounds.origin.x,
            self.bounds.origin.y,
        ))
    }

    /// Copy out as an RGBA image buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let colour = self.colour_at(Point::new(x as f32, y as f32));
            image::Rgba(colour.to_rgba())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn corner_red() -> RasterImage {
        RasterImage::new(
            2,
            2,
            vec![
                Colour::TRANSPARENT,
                Colour::TRANSPARENT,
                Colour::TRANSPARENT,
                RED,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_colour_at_inside() {
        let raster = corner_red();
        assert_eq!(raster.colour_at(Point::new(1.0, 1.0)), RED);
        assert_eq!(raster.colour_at(Point::new(1.9, 1.2)), RED);
        assert_eq!(raster.colour_at(Point::new(0.0, 0.0)), Colour::TRANSPARENT);
    }

    #[test]
    fn test_colour_at_outside_is_transparent() {
        let raster = corner_red();
        assert_eq!(raster.colour_at(Point::new(2.0, 1.0)), Colour::TRANSPARENT);
        assert_eq!(raster.colour_at(Point::new(1.0, 2.0)), Colour::TRANSPARENT);
        assert_eq!(raster.colour_at(Point::new(-0.5, 1.0)), Colour::TRANSPARENT);
        assert_eq!(raster.colour_at(Point::new(f32::NAN, 1.0)), Colour::TRANSPARENT);
    }

    #[test]
    fn test_degenerate_raster() {
        assert!(RasterImage::new(0, 4, vec![]).is_err());
        assert!(RasterImage::new(2, 2, vec![RED]).is_err());
    }

    #[test]
    fn test_view_transform_uses_bounds() {
        let raster = corner_red()
            .with_bounds(Rect::new(10.0, 20.0, 100.0, 50.0))
            .unwrap();
        let to_view = raster.view_transform();
        assert_eq!(to_view.map_point(Point::new(0.0, 0.0)), Point::new(10.0, 20.0));
        assert_eq!(to_view.map_point(Point::new(2.0, 2.0)), Point::new(110.0, 70.0));

        let to_pixel = to_view.invert().unwrap();
        assert_eq!(raster.colour_at(to_pixel.map_point(Point::new(100.0, 60.0))), RED);
    }

    #[test]
    fn test_empty_bounds_rejected() {
        assert!(corner_red().with_bounds(Rect::sized(0.0, 10.0)).is_err());
    }

    #[test]
    fn test_open_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.png");
        corner_red().to_rgba_image().save(&path).unwrap();

        let loaded = RasterImage::open(&path).unwrap();
        assert_eq!(loaded, corner_red());
    }

    #[test]
    fn test_open_missing_file() {
        let result = RasterImage::open(Path::new("/nonexistent/palette.png"));
        assert!(matches!(result, Err(SwatchError::Io { .. })));
    }
}
