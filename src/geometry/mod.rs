//! Palette geometry: where colours live on a 2-D surface.
//!
//! Two palette kinds exist:
//! - [`HueWheel`] - procedural, polar, invertible
//! - [`RasterImage`] - an arbitrary bitmap, many-to-one, not invertible

mod raster;
mod wheel;

pub use raster::RasterImage;
pub use wheel::HueWheel;

use crate::affine::Affine;
use crate::error::{Result, SwatchError};
use crate::snap::BoundarySnapper;
use crate::types::{Colour, Pixel, Point, View};

/// A palette surface, either a hue wheel or a raster image.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteGeometry {
    HueWheel(HueWheel),
    Raster(RasterImage),
}

impl PaletteGeometry {
    /// Short name of the palette kind, for messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HueWheel(_) => "hue wheel",
            Self::Raster(_) => "raster image",
        }
    }

    pub fn is_hue_wheel(&self) -> bool {
        matches!(self, Self::HueWheel(_))
    }

    /// Logical centre of the palette in view space.
    pub fn center(&self) -> Point<View> {
        match self {
            Self::HueWheel(wheel) => wheel.center(),
            Self::Raster(raster) => raster.bounds().center(),
        }
    }

    /// Colour under a view-space point.
    ///
    /// Hue wheels are evaluated directly in view space; raster palettes map
    /// `p` into pixel space through `to_pixel` first.
    pub fn colour_at(&self, p: Point<View>, to_pixel: &Affine<View, Pixel>) -> Colour {
        match self {
            Self::HueWheel(wheel) => wheel.colour_at(p),
            Self::Raster(raster) => raster.colour_at(to_pixel.map_point(p)),
        }
    }

    /// View-space position of `colour`. Only hue wheels can answer this.
    pub fn point_at(&self, colour: Colour) -> Result<Point<View>> {
        match self {
            Self::HueWheel(wheel) => Ok(wheel.point_at(colour)),
            Self::Raster(_) => Err(SwatchError::UnsupportedPalette {
                message: format!("cannot locate {} on a raster image palette", colour),
                help: Some(
                    "Locating a colour by position requires a hue wheel palette".to_string(),
                ),
            }),
        }
    }

    /// Nearest selectable point to `p`.
    ///
    /// Hue wheels clamp onto the disk in closed form; raster palettes bisect
    /// toward `center` with `snapper`.
    pub fn clamp(
        &self,
        p: Point<View>,
        center: Point<View>,
        to_pixel: &Affine<View, Pixel>,
        snapper: &BoundarySnapper,
    ) -> Result<Point<View>> {
        match self {
            Self::HueWheel(wheel) => Ok(wheel.clamp_to_disk(p)),
            Self::Raster(_) => snapper.snap_with(self, to_pixel, center, p),
        }
    }

    /// The palette's own pixel→view placement (identity for hue wheels).
    pub fn view_transform(&self) -> Affine<Pixel, View> {
        match self {
            Self::HueWheel(_) => Affine::identity(),
            Self::Raster(raster) => raster.view_transform(),
        }
    }
}

impl From<HueWheel> for PaletteGeometry {
    fn from(wheel: HueWheel) -> Self {
        Self::HueWheel(wheel)
    }
}

impl From<RasterImage> for PaletteGeometry {
    fn from(raster: RasterImage) -> Self {
        Self::Raster(raster)
    }
}
