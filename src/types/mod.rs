//! Core value types for swatch.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Colour` - 32-bit ARGB colour values
//! - `Point`, `Rect` - geometry tagged with a coordinate space
//! - `TouchPhase`, `DragEvent` - input phases and change notifications

mod colour;
mod event;
mod point;

pub use colour::Colour;
pub use event::{DragEvent, TouchPhase};
pub use point::{Pixel, Point, Rect, Size, View};
