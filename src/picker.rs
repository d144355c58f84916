//! Headless colour picker session.
//!
//! [`Picker`] keeps the selection state a picker widget needs: where the
//! selector sits, which palette colour is under it, and the sliders that
//! refine it. The host toolkit feeds it touches in view coordinates and
//! forwards the returned [`PickerEvent`]s to its listeners; drawing stays
//! with the host.

use serde::{Deserialize, Serialize};

use crate::affine::Affine;
use crate::error::{Result, SwatchError};
use crate::geometry::PaletteGeometry;
use crate::slider::{LinearSlider, SliderChannel};
use crate::snap::BoundarySnapper;
use crate::types::{Colour, DragEvent, Pixel, Point, Rect, TouchPhase, View};

/// Notification emitted by a [`Picker`].
pub type PickerEvent = DragEvent<Colour>;

/// Snapshot of a picker's selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerState {
    pub selected_point: Point<View>,
    /// Palette colour under the selector, before sliders are applied.
    pub pure_colour: Colour,
    /// Final colour with brightness and alpha applied.
    pub colour: Colour,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// Selection state over one palette shown in a view.
#[derive(Debug, Clone)]
pub struct Picker {
    palette: PaletteGeometry,
    to_view: Affine<Pixel, View>,
    to_pixel: Affine<View, Pixel>,
    snapper: BoundarySnapper,
    selected_point: Point<View>,
    pure_colour: Colour,
    brightness: Option<LinearSlider>,
    alpha: Option<LinearSlider>,
    enabled: bool,
}

impl Picker {
    /// Show `palette` in a `width × height` view with the selector centred.
    ///
    /// Raster palettes are letterboxed into the view; hue wheels are used
    /// in view coordinates as-is.
    pub fn new(palette: impl Into<PaletteGeometry>, width: f32, height: f32) -> Result<Self> {
        let palette = palette.into();
        let view: Rect<View> = Rect::sized(width, height);
        if view.is_empty() {
            return Err(SwatchError::InvalidPalette {
                message: format!("picker view has no area ({}x{})", width, height),
            });
        }

        let to_view: Affine<Pixel, View> = match &palette {
            PaletteGeometry::HueWheel(_) => Affine::identity(),
            PaletteGeometry::Raster(raster) => Affine::fit_center(
                raster.width() as f32,
                raster.height() as f32,
                width,
                height,
            ),
        };

        let mut picker = Self {
            palette,
            to_view,
            to_pixel: to_view.invert()?,
            snapper: BoundarySnapper::default(),
            selected_point: view.center(),
            pure_colour: Colour::TRANSPARENT,
            brightness: None,
            alpha: None,
            enabled: true,
        };
        picker.select_center()?;
        Ok(picker)
    }

    /// Override where the palette bitmap is drawn inside the view.
    ///
    /// The selector moves to the centre of the newly placed palette.
    pub fn with_transform(mut self, to_view: Affine<Pixel, View>) -> Result<Self> {
        self.to_pixel = to_view.invert()?;
        self.to_view = to_view;
        self.select_center()?;
        Ok(self)
    }

    pub fn with_snapper(mut self, snapper: BoundarySnapper) -> Self {
        self.snapper = snapper;
        self
    }

    /// Attach a brightness or alpha slider, replacing any slider already
    /// attached for that channel.
    pub fn attach_slider(&mut self, slider: LinearSlider) {
        match slider.channel() {
            SliderChannel::Brightness => self.brightness = Some(slider),
            SliderChannel::Alpha => self.alpha = Some(slider),
        }
        self.refresh_sliders();
    }

    pub fn slider(&self, channel: SliderChannel) -> Option<&LinearSlider> {
        match channel {
            SliderChannel::Brightness => self.brightness.as_ref(),
            SliderChannel::Alpha => self.alpha.as_ref(),
        }
    }

    pub fn palette(&self) -> &PaletteGeometry {
        &self.palette
    }

    /// Centre of the palette as drawn in the view; raster snapping bisects
    /// toward it.
    ///
    /// A raster's centre follows this picker's placement, not the raster's
    /// own bounds.
    pub fn center(&self) -> Point<View> {
        match &self.palette {
            PaletteGeometry::HueWheel(wheel) => wheel.center(),
            PaletteGeometry::Raster(raster) => self.to_view.map_point(Point::new(
                raster.width() as f32 * 0.5,
                raster.height() as f32 * 0.5,
            )),
        }
    }

    pub fn selected_point(&self) -> Point<View> {
        self.selected_point
    }

    /// Palette colour under the selector, without brightness or alpha.
    pub fn pure_colour(&self) -> Colour {
        self.pure_colour
    }

    /// Replace the pure colour without moving the selector.
    pub fn set_pure_colour(&mut self, colour: Colour) {
        self.pure_colour = colour;
        self.refresh_sliders();
    }

    /// The selected colour with every attached slider applied.
    pub fn colour(&self) -> Colour {
        match (&self.alpha, &self.brightness) {
            (Some(alpha), _) => alpha.assembled(),
            (None, Some(brightness)) => brightness.assembled(),
            (None, None) => self.pure_colour,
        }
    }

    /// Alpha of the selected colour in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        self.colour().a as f32 / 255.0
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled pickers (and their sliders) ignore touches.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        for slider in [&mut self.brightness, &mut self.alpha].into_iter().flatten() {
            slider.set_enabled(enabled);
        }
    }

    /// Feed a palette touch in view coordinates.
    pub fn touch(&mut self, phase: TouchPhase, p: Point<View>) -> Result<Vec<PickerEvent>> {
        if !self.enabled {
            return Ok(Vec::new());
        }

        let mut events = Vec::with_capacity(3);
        if phase == TouchPhase::Down {
            events.push(DragEvent::StartedDragging);
        }
        if phase != TouchPhase::Cancel {
            events.push(self.select(p, true)?);
        }
        if phase.ends_drag() {
            events.push(DragEvent::StoppedDragging);
        }
        Ok(events)
    }

    /// Move the selector to `p` programmatically, sampling the palette there.
    pub fn select_point(&mut self, p: Point<View>) -> Result<PickerEvent> {
        self.select(p, false)
    }

    pub fn select_center(&mut self) -> Result<PickerEvent> {
        self.select(self.center(), false)
    }

    /// Place the selector at `p` with a known colour, skipping the palette
    /// lookup.
    pub fn move_selector(&mut self, p: Point<View>, colour: Colour) -> PickerEvent {
        self.selected_point = p;
        self.set_pure_colour(colour);
        self.changed(false)
    }

    /// Move the selector to where `colour` sits on a hue wheel.
    pub fn select_by_colour(&mut self, colour: Colour) -> Result<PickerEvent> {
        let point = self.palette.point_at(colour)?;
        let point = self
            .palette
            .clamp(point, self.center(), &self.to_pixel, &self.snapper)?;

        self.selected_point = point;
        self.set_pure_colour(colour);
        Ok(self.changed(false))
    }

    /// Feed a touch to an attached slider.
    pub fn touch_slider(
        &mut self,
        channel: SliderChannel,
        phase: TouchPhase,
        x: f32,
    ) -> Result<Vec<PickerEvent>> {
        let events = self.slider_mut(channel)?.touch(phase, x);
        self.refresh_sliders();
        Ok(events.into_iter().map(|e| self.lift(e)).collect())
    }

    /// Set an attached slider's position programmatically.
    pub fn set_slider_position(
        &mut self,
        channel: SliderChannel,
        position: f32,
    ) -> Result<PickerEvent> {
        let event = self.slider_mut(channel)?.set_position(position);
        self.refresh_sliders();
        Ok(self.lift(event))
    }

    pub fn state(&self) -> PickerState {
        PickerState {
            selected_point: self.selected_point,
            pure_colour: self.pure_colour,
            colour: self.colour(),
            brightness: self.brightness.as_ref().map(LinearSlider::position),
            alpha: self.alpha.as_ref().map(LinearSlider::position),
        }
    }

    /// Reapply a snapshot. Slider positions are restored only for sliders
    /// that are attached.
    pub fn restore(&mut self, state: &PickerState) -> PickerEvent {
        if let (Some(slider), Some(position)) = (self.brightness.as_mut(), state.brightness) {
            slider.set_position(position);
        }
        if let (Some(slider), Some(position)) = (self.alpha.as_mut(), state.alpha) {
            slider.set_position(position);
        }
        self.move_selector(state.selected_point, state.pure_colour)
    }

    fn select(&mut self, p: Point<View>, from_user: bool) -> Result<PickerEvent> {
        let snapped = self
            .palette
            .clamp(p, self.center(), &self.to_pixel, &self.snapper)?;
        let colour = self.palette.colour_at(snapped, &self.to_pixel);

        tracing::debug!(touch = %p, %snapped, %colour, "palette selection");

        self.selected_point = snapped;
        self.set_pure_colour(colour);
        Ok(self.changed(from_user))
    }

    fn slider_mut(&mut self, channel: SliderChannel) -> Result<&mut LinearSlider> {
        let slider = match channel {
            SliderChannel::Brightness => self.brightness.as_mut(),
            SliderChannel::Alpha => self.alpha.as_mut(),
        };
        slider.ok_or_else(|| SwatchError::InvalidConfiguration {
            message: format!("no {:?} slider is attached", channel).to_lowercase(),
            help: Some("Attach one with Picker::attach_slider".to_string()),
        })
    }

    /// Brightness works on the pure colour; alpha on the brightness result.
    fn refresh_sliders(&mut self) {
        let mut base = self.pure_colour;
        if let Some(brightness) = self.brightness.as_mut() {
            brightness.set_base(base);
            base = brightness.assembled();
        }
        if let Some(alpha) = self.alpha.as_mut() {
            alpha.set_base(base);
        }
    }

    fn changed(&self, from_user: bool) -> PickerEvent {
        DragEvent::Changed {
            value: self.colour(),
            from_user,
        }
    }

    fn lift(&self, event: DragEvent<f32>) -> PickerEvent {
        match event {
            DragEvent::StartedDragging => DragEvent::StartedDragging,
            DragEvent::Changed { from_user, .. } => self.changed(from_user),
            DragEvent::StoppedDragging => DragEvent::StoppedDragging,
        }
    }
}
