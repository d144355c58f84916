//! Saved picker data keyed by a caller-chosen name.
//!
//! [`Preferences`] is a plain value owned by the caller. It serializes with
//! serde, so the host decides where (and whether) it is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::picker::{Picker, PickerEvent};
use crate::slider::SliderChannel;
use crate::types::{Colour, Point, View};

const COLOUR: &str = "_COLOR";
const SELECTOR_X: &str = "_SELECTOR_X";
const SELECTOR_Y: &str = "_SELECTOR_Y";
const ALPHA_SLIDER: &str = "_SLIDER_ALPHA";
const BRIGHTNESS_SLIDER: &str = "_SLIDER_BRIGHTNESS";

/// A stored preference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Int(i64),
    Float(f32),
}

impl PrefValue {
    fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    fn as_float(self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(v),
            Self::Int(v) => Some(v as f32),
        }
    }
}

/// Key/value store for picker selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preferences {
    values: BTreeMap<String, PrefValue>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set_colour(&mut self, name: &str, colour: Colour) -> &mut Self {
        self.values
            .insert(key(name, COLOUR), PrefValue::Int(colour.to_u32() as i64));
        self
    }

    pub fn colour(&self, name: &str, default: Colour) -> Colour {
        self.int(&key(name, COLOUR))
            .and_then(|v| u32::try_from(v).ok())
            .map(Colour::from_u32)
            .unwrap_or(default)
    }

    pub fn clear_colour(&mut self, name: &str) -> &mut Self {
        self.values.remove(&key(name, COLOUR));
        self
    }

    pub fn set_selector_position(&mut self, name: &str, point: Point<View>) -> &mut Self {
        self.values
            .insert(key(name, SELECTOR_X), PrefValue::Float(point.x));
        self.values
            .insert(key(name, SELECTOR_Y), PrefValue::Float(point.y));
        self
    }

    /// Saved selector position; each coordinate falls back independently.
    pub fn selector_position(&self, name: &str, default: Point<View>) -> Point<View> {
        Point::new(
            self.float(&key(name, SELECTOR_X)).unwrap_or(default.x),
            self.float(&key(name, SELECTOR_Y)).unwrap_or(default.y),
        )
    }

    pub fn clear_selector_position(&mut self, name: &str) -> &mut Self {
        self.values.remove(&key(name, SELECTOR_X));
        self.values.remove(&key(name, SELECTOR_Y));
        self
    }

    pub fn set_slider_position(
        &mut self,
        name: &str,
        channel: SliderChannel,
        position: f32,
    ) -> &mut Self {
        self.values
            .insert(slider_key(name, channel), PrefValue::Float(position));
        self
    }

    pub fn slider_position(&self, name: &str, channel: SliderChannel, default: f32) -> f32 {
        self.float(&slider_key(name, channel)).unwrap_or(default)
    }

    pub fn clear_slider_position(&mut self, name: &str, channel: SliderChannel) -> &mut Self {
        self.values.remove(&slider_key(name, channel));
        self
    }

    /// Drop everything saved under every name.
    pub fn clear_all(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    /// Record the picker's colour, selector position and slider positions.
    pub fn save_picker(&mut self, name: &str, picker: &Picker) -> &mut Self {
        let state = picker.state();
        self.set_colour(name, state.colour);
        self.set_selector_position(name, state.selected_point);
        if let Some(position) = state.brightness {
            self.set_slider_position(name, SliderChannel::Brightness, position);
        }
        if let Some(position) = state.alpha {
            self.set_slider_position(name, SliderChannel::Alpha, position);
        }
        self
    }

    /// Reapply data saved under `name`.
    ///
    /// Slider positions are restored first so the final colour event already
    /// reflects them. Returns `None` when no selector position was saved.
    pub fn restore_picker(&self, name: &str, picker: &mut Picker) -> Result<Option<PickerEvent>> {
        for channel in [SliderChannel::Brightness, SliderChannel::Alpha] {
            if let Some(position) = self.float(&slider_key(name, channel)) {
                if picker.slider(channel).is_some() {
                    picker.set_slider_position(channel, position)?;
                }
            }
        }

        let has_point = self.values.contains_key(&key(name, SELECTOR_X))
            && self.values.contains_key(&key(name, SELECTOR_Y));
        if !has_point {
            return Ok(None);
        }

        let point = self.selector_position(name, picker.center());
        picker.select_point(point).map(Some)
    }

    fn int(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(|v| v.as_int())
    }

    fn float(&self, key: &str) -> Option<f32> {
        self.values.get(key).and_then(|v| v.as_float())
    }
}

fn key(name: &str, suffix: &str) -> String {
    format!("{}{}", name, suffix)
}

fn slider_key(name: &str, channel: SliderChannel) -> String {
    match channel {
        SliderChannel::Brightness => key(name, BRIGHTNESS_SLIDER),
        SliderChannel::Alpha => key(name, ALPHA_SLIDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HueWheel;
    use crate::slider::LinearSlider;

    fn picker() -> Picker {
        let mut picker = Picker::new(HueWheel::fit(100.0, 100.0).unwrap(), 100.0, 100.0).unwrap();
        picker.attach_slider(LinearSlider::new(SliderChannel::Brightness, 100.0));
        picker
    }

    #[test]
    fn test_colour_defaults_and_clear() {
        let mut prefs = Preferences::new();
        assert_eq!(prefs.colour("main", Colour::BLACK), Colour::BLACK);

        prefs.set_colour("main", Colour::argb(0x80, 1, 2, 3));
        assert_eq!(prefs.colour("main", Colour::BLACK), Colour::argb(0x80, 1, 2, 3));
        assert_eq!(prefs.colour("other", Colour::WHITE), Colour::WHITE);

        prefs.clear_colour("main");
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_selector_position_keys() {
        let mut prefs = Preferences::new();
        prefs.set_selector_position("main", Point::new(12.5, 40.0));
        assert_eq!(prefs.len(), 2);
        assert_eq!(
            prefs.selector_position("main", Point::new(0.0, 0.0)),
            Point::new(12.5, 40.0)
        );

        prefs.clear_selector_position("main");
        assert_eq!(
            prefs.selector_position("main", Point::new(1.0, 2.0)),
            Point::new(1.0, 2.0)
        );
    }

    #[test]
    fn test_slider_positions() {
        let mut prefs = Preferences::new();
        prefs
            .set_slider_position("main", SliderChannel::Alpha, 0.3)
            .set_slider_position("main", SliderChannel::Brightness, 0.7);
        assert_eq!(prefs.slider_position("main", SliderChannel::Alpha, 1.0), 0.3);
        assert_eq!(prefs.slider_position("main", SliderChannel::Brightness, 1.0), 0.7);

        prefs.clear_all();
        assert_eq!(prefs.slider_position("main", SliderChannel::Alpha, 1.0), 1.0);
    }

    #[test]
    fn test_save_and_restore_picker() {
        let mut original = picker();
        original.select_point(Point::new(0.0, 50.0)).unwrap();
        original
            .set_slider_position(SliderChannel::Brightness, 0.5)
            .unwrap();

        let mut prefs = Preferences::new();
        prefs.save_picker("main", &original);

        let mut restored = picker();
        let event = prefs.restore_picker("main", &mut restored).unwrap();
        assert!(event.is_some());
        assert_eq!(restored.state(), original.state());
    }

    #[test]
    fn test_restore_without_data() {
        let prefs = Preferences::new();
        let mut p = picker();
        assert_eq!(prefs.restore_picker("main", &mut p).unwrap(), None);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut prefs = Preferences::new();
        prefs.set_colour("a", Colour::rgb(255, 0, 0));
        prefs.set_slider_position("a", SliderChannel::Alpha, 0.5);

        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"a_COLOR":4294901760,"a_SLIDER_ALPHA":0.5}"#);

        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }
}
