use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit, Printer};
use crate::types::{Colour, Point, View};

use super::PaletteArgs;

/// Snap a point onto the opaque part of an image palette
#[derive(Args, Debug)]
pub struct SnapArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// View coordinate to snap, e.g. 0,0
    #[arg(long)]
    pub at: Point<View>,

    /// Stop bisecting once the bracket is this short (overrides swatch.yaml)
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SnapReport {
    requested: Point<View>,
    snapped: Point<View>,
    colour: Colour,
}

pub fn run(args: SnapArgs, printer: &Printer) -> Result<()> {
    let mut config = super::load_config(printer)?;
    if let Some(threshold) = args.threshold {
        config.snap.threshold = threshold;
        config.validate()?;
    }

    let mut picker = args.palette.picker(&config)?;
    picker.select_point(args.at)?;

    let snapped = picker.selected_point();
    let colour = picker.pure_colour();
    printer.status(
        "Snapped",
        &format!(
            "{} -> {} {}",
            args.at,
            snapped,
            printer.colour(colour)
        ),
    );

    let report = SnapReport {
        requested: args.at,
        snapped,
        colour,
    };
    emit(&report, args.json, &[format!("{} {}", snapped, colour)])
}
