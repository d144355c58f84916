//! ARGB/HSV conversion primitives.
//!
//! All conversions go through `palette`'s `Srgb`/`Hsv` types. Alpha never
//! takes part in HSV math; it is carried across every conversion untouched.

use palette::{Hsv as PaletteHsv, IntoColor, Srgb};
use serde::Serialize;

use crate::types::Colour;

/// A colour in hue/saturation/value form.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `value` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Decompose the RGB channels of `colour` into HSV.
///
/// Hue is 0 for greys, where it is otherwise undefined.
pub fn argb_to_hsv(colour: Colour) -> Hsv {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let hsv: PaletteHsv = rgb.into_color();

    let hue = if hsv.saturation > 0.0 {
        normalize_hue(hsv.hue.into_positive_degrees())
    } else {
        0.0
    };

    Hsv::new(hue, hsv.saturation, hsv.value)
}

/// Build a colour from HSV and an explicit alpha.
///
/// Hue wraps modulo 360 (negative values included); saturation and value are
/// clamped to `[0, 1]`.
pub fn hsv_to_argb(hue: f32, saturation: f32, value: f32, alpha: u8) -> Colour {
    let hsv = PaletteHsv::new(
        normalize_hue(hue),
        clamp01(saturation),
        clamp01(value),
    );

    let rgb: Srgb<f32> = hsv.into_color();
    Colour::argb(
        alpha,
        unit_to_byte(rgb.red),
        unit_to_byte(rgb.green),
        unit_to_byte(rgb.blue),
    )
}

/// Same hue and saturation as `colour`, value forced to 0 and 1.
///
/// These are the two ends of a brightness gradient; alpha is preserved.
pub fn gradient_endpoints(colour: Colour) -> (Colour, Colour) {
    (with_value(colour, 0.0), with_value(colour, 1.0))
}

/// Replace the alpha channel with `round(alpha * 255)`.
pub fn with_alpha(colour: Colour, alpha: f32) -> Colour {
    Colour {
        a: unit_to_byte(alpha),
        ..colour
    }
}

/// Replace the HSV value of `colour`, keeping hue, saturation and alpha.
pub fn with_value(colour: Colour, value: f32) -> Colour {
    let hsv = argb_to_hsv(colour);
    hsv_to_argb(hsv.hue, hsv.saturation, value, colour.a)
}

/// Wrap any finite hue into `[0, 360)`.
pub(crate) fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}
