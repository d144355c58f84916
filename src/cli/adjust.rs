use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit, Printer};
use crate::slider::{assemble_colour, SliderChannel};
use crate::space::{argb_to_hsv, Hsv};
use crate::types::Colour;

/// Apply brightness and alpha to a colour
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Colour to adjust, e.g. #3399CC
    pub colour: Colour,

    /// Replace the HSV value, in [0, 1]
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Replace the alpha, in [0, 1]
    #[arg(long)]
    pub alpha: Option<f32>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Slider positions mapped onto the configured integer range.
#[derive(Serialize, Default)]
struct Levels {
    #[serde(skip_serializing_if = "Option::is_none")]
    brightness: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alpha: Option<i32>,
}

#[derive(Serialize)]
struct AdjustReport {
    input: Colour,
    colour: Colour,
    hsv: Hsv,
    #[serde(skip_serializing_if = "Option::is_none")]
    levels: Option<Levels>,
}

pub fn run(args: AdjustArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(printer)?;

    let mut colour = args.colour;
    if let Some(brightness) = args.brightness {
        colour = assemble_colour(colour, brightness, SliderChannel::Brightness);
    }
    if let Some(alpha) = args.alpha {
        colour = assemble_colour(colour, alpha, SliderChannel::Alpha);
    }

    let levels = config.slider.range.map(|range| Levels {
        brightness: args.brightness.map(|p| range.interpolate(p)),
        alpha: args.alpha.map(|p| range.interpolate(p)),
    });

    printer.status(
        "Adjusted",
        &format!("{} -> {}", printer.colour(args.colour), printer.colour(colour)),
    );

    let report = AdjustReport {
        input: args.colour,
        colour,
        hsv: argb_to_hsv(colour),
        levels,
    };
    emit(&report, args.json, &[colour.to_string()])
}
