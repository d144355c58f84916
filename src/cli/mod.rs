pub mod adjust;
pub mod completions;
pub mod gradient;
pub mod locate;
pub mod sample;
pub mod snap;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{Config, PaletteSource, CONFIG_FILENAME};
use crate::error::Result;
use crate::output::Printer;
use crate::picker::{Picker, PickerEvent};
use crate::slider::SliderChannel;
use crate::types::Size;

/// swatch - Colour picker geometry from the terminal
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample the palette colour at a view coordinate
    Sample(sample::SampleArgs),

    /// Find where a colour sits on a hue wheel
    Locate(locate::LocateArgs),

    /// Apply brightness and alpha to a colour
    Adjust(adjust::AdjustArgs),

    /// Print the two ends of a slider gradient
    Gradient(gradient::GradientArgs),

    /// Snap a point onto the opaque part of an image palette
    Snap(snap::SnapArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Palette selection shared by the sampling commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PaletteArgs {
    /// Image to use as the palette (overrides swatch.yaml)
    #[arg(long, conflicts_with = "wheel")]
    pub image: Option<PathBuf>,

    /// Use a hue wheel as the palette (overrides swatch.yaml)
    #[arg(long)]
    pub wheel: bool,

    /// View size, e.g. 200x200 (default: from swatch.yaml, else 200x200)
    #[arg(long)]
    pub size: Option<Size>,
}

impl PaletteArgs {
    pub fn source(&self, config: &Config) -> PaletteSource {
        match (&self.image, self.wheel) {
            (Some(path), _) => PaletteSource::Image(path.clone()),
            (None, true) => PaletteSource::Wheel,
            (None, false) => config.palette.clone(),
        }
    }

    /// Build a picker over the selected palette in the selected view.
    pub fn picker(&self, config: &Config) -> Result<Picker> {
        let size = self.size.unwrap_or(config.size);
        let palette = self.source(config).load(size)?;
        Ok(Picker::new(palette, size.width as f32, size.height as f32)?.with_snapper(config.snap))
    }
}

/// Slider channel as named on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelArg {
    #[default]
    Brightness,
    Alpha,
}

impl From<ChannelArg> for SliderChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Brightness => SliderChannel::Brightness,
            ChannelArg::Alpha => SliderChannel::Alpha,
        }
    }
}

/// Load swatch.yaml from the working directory, if there is one.
pub fn load_config(printer: &Printer) -> Result<Config> {
    let path = PathBuf::from(CONFIG_FILENAME);
    if path.is_file() {
        printer.info("Loading", CONFIG_FILENAME);
    }
    Config::discover(".")
}

/// Move the selector to the config's initial colour, or the centre.
///
/// Only hue wheels can locate a colour; other palettes start centred.
pub fn select_initial(picker: &mut Picker, config: &Config) -> Result<PickerEvent> {
    match config.initial_colour {
        Some(colour) if picker.palette().is_hue_wheel() => picker.select_by_colour(colour),
        _ => picker.select_center(),
    }
}

/// Attach sliders for the channels given and set their positions.
pub fn apply_sliders(
    picker: &mut Picker,
    config: &Config,
    brightness: Option<f32>,
    alpha: Option<f32>,
) -> Result<()> {
    for (channel, position) in [
        (SliderChannel::Brightness, brightness),
        (SliderChannel::Alpha, alpha),
    ] {
        if let Some(position) = position {
            picker.attach_slider(config.slider.slider(channel));
            picker.set_slider_position(channel, position)?;
        }
    }
    Ok(())
}
