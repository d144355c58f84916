//! swatch - Colour picker geometry engine
//!
//! Maps touch coordinates on a palette (a hue wheel or a raster image) to
//! colours and back, snaps selections onto the opaque part of an image,
//! and composes brightness and alpha slider values.

pub mod affine;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod picker;
pub mod prefs;
pub mod slider;
pub mod snap;
pub mod space;
pub mod types;

pub use affine::Affine;
pub use config::{Config, PaletteSource, SliderConfig};
pub use error::{Result, SwatchError};
pub use geometry::{HueWheel, PaletteGeometry, RasterImage};
pub use picker::{Picker, PickerEvent, PickerState};
pub use prefs::Preferences;
pub use slider::{
    assemble_colour, position_from_touch, IntInterpolation, LinearSlider, SliderChannel, TouchMode,
};
pub use snap::BoundarySnapper;
pub use space::{argb_to_hsv, gradient_endpoints, hsv_to_argb, with_alpha, with_value, Hsv};
pub use types::{Colour, DragEvent, Pixel, Point, Rect, Size, TouchPhase, View};
