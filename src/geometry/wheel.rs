//! Procedural hue/saturation wheel.
//!
//! Angle maps to hue and distance from the centre to saturation; value is
//! always 1. The wheel is mirrored horizontally: hue 0 (red) sits at the
//! right-hand rim and hue increases counter-clockwise on screen.

use std::f32::consts::PI;

use crate::error::{Result, SwatchError};
use crate::space::{argb_to_hsv, hsv_to_argb};
use crate::types::{Colour, Point, View};

/// Relative slack when deciding whether a point is on or inside the rim.
///
/// A point pulled onto the rim can land a few ulps outside it; counting
/// anything within this slack as on the rim keeps `clamp_to_disk` idempotent.
const RIM_TOLERANCE: f32 = 1e-5;

/// A hue wheel laid out in view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueWheel {
    center: Point<View>,
    radius: f32,
}

impl HueWheel {
    /// Create a wheel; the radius must be finite and positive.
    pub fn new(center: Point<View>, radius: f32) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) || !center.is_finite() {
            return Err(SwatchError::InvalidPalette {
                message: format!("hue wheel radius must be positive, got {}", radius),
            });
        }
        Ok(Self { center, radius })
    }

    /// The largest wheel that fits a `width × height` view, centred in it.
    pub fn fit(width: f32, height: f32) -> Result<Self> {
        let center = Point::new(width * 0.5, height * 0.5);
        Self::new(center, width.min(height) * 0.5)
    }

    pub fn center(&self) -> Point<View> {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Colour under `p`. Points beyond the rim are fully saturated.
    pub fn colour_at(&self, p: Point<View>) -> Colour {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let r = dx.hypot(dy);

        let hue = if r > 0.0 {
            dy.atan2(-dx) * 180.0 / PI + 180.0
        } else {
            0.0
        };
        let saturation = (r / self.radius).clamp(0.0, 1.0);

        hsv_to_argb(hue, saturation, 1.0, 255)
    }

    /// Where `colour`'s hue and saturation sit on the wheel.
    ///
    /// Value and alpha are ignored; they do not have a position.
    pub fn point_at(&self, colour: Colour) -> Point<View> {
        let hsv = argb_to_hsv(colour);
        let distance = hsv.saturation * self.radius;
        let angle = hsv.hue.to_radians();

        Point::new(
            distance * angle.cos() + self.center.x,
            -distance * angle.sin() + self.center.y,
        )
    }

    /// Pull `p` back onto the rim if it lies outside the wheel.
    pub fn clamp_to_disk(&self, p: Point<View>) -> Point<View> {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let r = dx.hypot(dy);

        if r <= self.radius * (1.0 + RIM_TOLERANCE) {
            return p;
        }

        let k = self.radius / r;
        Point::new(self.center.x + dx * k, self.center.y + dy * k)
    }
}
