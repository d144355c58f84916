//! Project configuration (swatch.yaml) parsing.
//!
//! The config names the palette to sample, the view it is shown in, and
//! default tuning for snapping and sliders. CLI flags override it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};
use crate::geometry::{HueWheel, PaletteGeometry, RasterImage};
use crate::slider::{IntInterpolation, LinearSlider, SliderChannel, TouchMode};
use crate::snap::BoundarySnapper;
use crate::types::{Colour, Size};

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "swatch.yaml";

/// Where palette colours come from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaletteSource {
    /// Hue wheel fitted to the view.
    #[default]
    Wheel,
    /// Image file decoded with the `image` crate.
    Image(PathBuf),
}

impl PaletteSource {
    /// Build the palette geometry for a view of `size`.
    pub fn load(&self, size: Size) -> Result<PaletteGeometry> {
        match self {
            Self::Wheel => Ok(HueWheel::fit(size.width as f32, size.height as f32)?.into()),
            Self::Image(path) => Ok(RasterImage::open(path)?.into()),
        }
    }
}

impl From<String> for PaletteSource {
    fn from(s: String) -> Self {
        if s.trim().eq_ignore_ascii_case("wheel") {
            Self::Wheel
        } else {
            Self::Image(PathBuf::from(s))
        }
    }
}

impl From<PaletteSource> for String {
    fn from(source: PaletteSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for PaletteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wheel => write!(f, "wheel"),
            Self::Image(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Slider defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub track_width: f32,
    pub selector_size: f32,
    pub mode: TouchMode,
    /// Integer range reported alongside slider positions.
    pub range: Option<IntInterpolation>,
}

impl SliderConfig {
    /// A slider for `channel` with these defaults applied.
    pub fn slider(&self, channel: SliderChannel) -> LinearSlider {
        LinearSlider::new(channel, self.track_width)
            .with_mode(self.mode)
            .with_selector_size(self.selector_size)
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            track_width: 200.0,
            selector_size: 0.0,
            mode: TouchMode::default(),
            range: None,
        }
    }
}

/// Project config loaded from swatch.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `wheel` or a path to an image, relative to the config file.
    pub palette: PaletteSource,

    /// View the palette is shown in.
    pub size: Size,

    pub snap: BoundarySnapper,

    pub slider: SliderConfig,

    /// Colour to preselect on a hue wheel.
    pub initial_colour: Option<Colour>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: PaletteSource::Wheel,
            size: Size::new(200, 200),
            snap: BoundarySnapper::default(),
            slider: SliderConfig::default(),
            initial_colour: None,
        }
    }
}

impl Config {
    /// Load config from a swatch.yaml file.
    ///
    /// A relative image path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        if let (PaletteSource::Image(image), Some(dir)) = (&mut config.palette, path.parent()) {
            if image.is_relative() {
                *image = dir.join(&*image);
            }
        }
        Ok(config)
    }

    /// Parse and validate config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| SwatchError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `swatch.yaml` from `root` if present, else the defaults.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILENAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(invalid(
                format!("size must be non-zero, got {}", self.size),
                "Set size to e.g. {width: 200, height: 200}",
            ));
        }
        if !(self.snap.threshold.is_finite() && self.snap.threshold > 0.0) {
            return Err(invalid(
                format!("snap.threshold must be positive, got {}", self.snap.threshold),
                "The default threshold is 3.0",
            ));
        }
        if self.snap.max_iterations == 0 {
            return Err(invalid(
                "snap.max_iterations must be at least 1".to_string(),
                "The default is 20",
            ));
        }
        if !(self.slider.track_width.is_finite() && self.slider.track_width > 0.0) {
            return Err(invalid(
                format!("slider.track_width must be positive, got {}", self.slider.track_width),
                "Set slider.track_width to the track length in view units",
            ));
        }
        if let Some(range) = self.slider.range {
            // Deserialization skips the constructor's checks.
            IntInterpolation::new(range.min(), range.max(), range.step())?;
        }
        Ok(())
    }
}

fn invalid(message: String, help: &str) -> SwatchError {
    SwatchError::InvalidConfiguration {
        message,
        help: Some(help.to_string()),
    }
}
