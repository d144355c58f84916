//! One-dimensional slide bars.
//!
//! A slider maps a touch along its track to a position in `[0, 1]` and uses
//! that position either as the HSV value (brightness) or the alpha of a base
//! colour. [`IntInterpolation`] maps the same position onto a stepped integer
//! range for generic numeric sliders.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::space::{clamp01, gradient_endpoints, with_alpha, with_value};
use crate::types::{Colour, DragEvent, TouchPhase};

/// Which channel of the base colour a slider drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderChannel {
    Brightness,
    Alpha,
}

/// How touches move the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchMode {
    /// The selector jumps to the touch position.
    #[default]
    Absolute,
    /// The selector moves by the drag distance from where the touch began.
    Relative,
}

/// Position along a track of `track_width`, clamped to `[0, 1]`.
///
/// A non-positive or NaN width yields 0.
pub fn position_from_touch(x: f32, track_width: f32) -> f32 {
    if !(track_width > 0.0) || x.is_nan() || x <= 0.0 {
        return 0.0;
    }
    if x >= track_width {
        return 1.0;
    }
    x / track_width
}

/// Combine `base` with a slider position on `channel`.
pub fn assemble_colour(base: Colour, position: f32, channel: SliderChannel) -> Colour {
    match channel {
        SliderChannel::Brightness => with_value(base, position),
        SliderChannel::Alpha => with_alpha(base, position),
    }
}

/// Maps `[0, 1]` onto the integers in `[min, max]` that are multiples of
/// `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntInterpolation {
    min: i32,
    max: i32,
    step: i32,
}

impl IntInterpolation {
    pub fn new(min: i32, max: i32, step: i32) -> Result<Self> {
        if step <= 0 {
            return Err(SwatchError::InvalidConfiguration {
                message: format!("slider step must be positive, got {}", step),
                help: Some("Use a step of 1 for an unstepped integer range".to_string()),
            });
        }
        if max <= min {
            return Err(SwatchError::InvalidConfiguration {
                message: format!("slider range is empty ({}..={})", min, max),
                help: None,
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Integer at `position`, rounded to the nearest multiple of `step`.
    pub fn interpolate(&self, position: f32) -> i32 {
        let (min, max, step) = (self.min as i64, self.max as i64, self.step as i64);
        let raw = min as f64 + (max - min) as f64 * clamp01(position) as f64;

        let mut stepped = (raw / step as f64).round() as i64 * step;
        if stepped > max {
            stepped -= step;
        }
        if stepped < min {
            stepped += step;
        }

        // No multiple of step inside the range at all
        stepped.clamp(min, max) as i32
    }

    /// Position of `value` along the range, clamped to `[0, 1]`.
    pub fn reverse_interpolate(&self, value: i32) -> f32 {
        let span = (self.max as i64 - self.min as i64) as f64;
        clamp01(((value as i64 - self.min as i64) as f64 / span) as f32)
    }
}

/// A slide bar driving one channel of a base colour.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSlider {
    channel: SliderChannel,
    mode: TouchMode,
    base: Colour,
    position: f32,
    track_width: f32,
    selector_size: f32,
    enabled: bool,
    /// Touch x and position when the current relative drag began.
    drag_origin: Option<(f32, f32)>,
}

impl LinearSlider {
    /// A slider with a white base, positioned at the full end of the track.
    pub fn new(channel: SliderChannel, track_width: f32) -> Self {
        Self {
            channel,
            mode: TouchMode::default(),
            base: Colour::WHITE,
            position: 1.0,
            track_width,
            selector_size: 0.0,
            enabled: true,
            drag_origin: None,
        }
    }

    pub fn with_mode(mut self, mode: TouchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Width of the selector thumb; the usable track shrinks by this much.
    pub fn with_selector_size(mut self, size: f32) -> Self {
        self.selector_size = size.max(0.0);
        self
    }

    pub fn channel(&self) -> SliderChannel {
        self.channel
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn base(&self) -> Colour {
        self.base
    }

    /// Replace the colour this slider modifies.
    pub fn set_base(&mut self, base: Colour) {
        self.base = base;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag_origin = None;
        }
    }

    /// Track length the selector can travel.
    pub fn available_width(&self) -> f32 {
        (self.track_width - self.selector_size).max(0.0)
    }

    /// Where the selector's left edge sits along the track.
    pub fn selector_x(&self) -> f32 {
        self.available_width() * self.position
    }

    /// Move the selector programmatically.
    pub fn set_position(&mut self, position: f32) -> DragEvent<f32> {
        self.position = clamp01(position);
        DragEvent::Changed {
            value: self.position,
            from_user: false,
        }
    }

    /// Feed a touch at track coordinate `x`.
    pub fn touch(&mut self, phase: TouchPhase, x: f32) -> Vec<DragEvent<f32>> {
        if !self.enabled {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if phase == TouchPhase::Down {
            events.push(DragEvent::StartedDragging);
        }

        match (self.mode, phase) {
            (_, TouchPhase::Cancel) => {}
            (TouchMode::Absolute, _) => {
                self.position = position_from_touch(x, self.available_width());
                events.push(self.user_change());
            }
            (TouchMode::Relative, TouchPhase::Down) => {
                self.drag_origin = Some((x, self.position));
            }
            (TouchMode::Relative, TouchPhase::Move) => {
                let (down_x, down_position) = *self.drag_origin.get_or_insert((x, self.position));
                let width = self.available_width();
                if width > 0.0 {
                    self.position = clamp01(down_position + (x - down_x) / width);
                }
                events.push(self.user_change());
            }
            (TouchMode::Relative, TouchPhase::Up) => {}
        }

        if phase.ends_drag() {
            self.drag_origin = None;
            events.push(DragEvent::StoppedDragging);
        }

        events
    }

    /// The base colour with this slider's channel applied.
    pub fn assembled(&self) -> Colour {
        assemble_colour(self.base, self.position, self.channel)
    }

    /// Colours at the two ends of the track.
    pub fn gradient(&self) -> (Colour, Colour) {
        match self.channel {
            SliderChannel::Brightness => gradient_endpoints(self.base),
            SliderChannel::Alpha => (with_alpha(self.base, 0.0), with_alpha(self.base, 1.0)),
        }
    }

    fn user_change(&self) -> DragEvent<f32> {
        DragEvent::Changed {
            value: self.position,
            from_user: true,
        }
    }
}
