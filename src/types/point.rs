//! Points and rectangles tagged with their coordinate space.
//!
//! A touch arrives in [`View`] space, while a raster palette is indexed in
//! [`Pixel`] space. The two only meet through an explicit
//! [`Affine`](crate::affine::Affine), so mixing them is a compile error.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// View (touch) coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct View;

/// Bitmap pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel;

/// A 2-D point in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<S> {
    pub x: f32,
    pub y: f32,
    #[serde(skip)]
    space: PhantomData<S>,
}

impl<S> Point<S> {
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Euclidean distance to another point in the same space.
    pub fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Halfway point between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<S> fmt::Display for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `X,Y` (whitespace around either number is ignored).
impl<S> FromStr for Point<S> {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || SwatchError::Parse {
            message: format!("Invalid point: {}", s),
            help: Some("Use X,Y, e.g. 120,48.5".to_string()),
        };

        let (x, y) = s.split_once(',').ok_or_else(parse_err)?;
        let x: f32 = x.trim().parse().map_err(|_| parse_err())?;
        let y: f32 = y.trim().parse().map_err(|_| parse_err())?;
        Ok(Self::new(x, y))
    }
}

/// An axis-aligned rectangle in coordinate space `S`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<S> {
    pub origin: Point<S>,
    pub width: f32,
    pub height: f32,
}

impl<S> Rect<S> {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin.
    pub const fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn center(&self) -> Point<S> {
        Point::new(
            self.origin.x + self.width * 0.5,
            self.origin.y + self.height * 0.5,
        )
    }

    /// True when the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// A view or image size, parsed from `WxH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn to_rect<S>(self) -> Rect<S> {
        Rect::sized(self.width as f32, self.height as f32)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        let parse_err = || SwatchError::Parse {
            message: format!("Invalid size: {}", s),
            help: Some("Use WxH, e.g. 320x240".to_string()),
        };

        let (w, h) = s
            .split_once(|c: char| c == 'x' || c == 'X')
            .ok_or_else(parse_err)?;
        let width = w.trim().parse().map_err(|_| parse_err())?;
        let height = h.trim().parse().map_err(|_| parse_err())?;
        Ok(Self::new(width, height))
    }
}
