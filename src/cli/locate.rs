use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit, Printer};
use crate::types::{Colour, Point, View};

use super::PaletteArgs;

/// Find where a colour sits on a hue wheel
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Colour to locate, e.g. #3399CC
    pub colour: Colour,

    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LocateReport {
    colour: Colour,
    point: Point<View>,
}

pub fn run(args: LocateArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(printer)?;
    let mut picker = args.palette.picker(&config)?;
    picker.select_by_colour(args.colour)?;

    let point = picker.selected_point();
    printer.status(
        "Located",
        &format!("{} at {}", printer.colour(args.colour), point),
    );

    let report = LocateReport {
        colour: args.colour,
        point,
    };
    emit(&report, args.json, &[point.to_string()])
}
