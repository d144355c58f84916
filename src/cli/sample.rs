use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit, Printer};
use crate::picker::PickerState;
use crate::space::{argb_to_hsv, Hsv};
use crate::types::{Point, View};

use super::PaletteArgs;

/// Sample the palette colour at a view coordinate
#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// View coordinate to sample, e.g. 100,50 (default: initial colour or centre)
    #[arg(long)]
    pub at: Option<Point<View>>,

    /// Brightness slider position in [0, 1]
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Alpha slider position in [0, 1]
    #[arg(long)]
    pub alpha: Option<f32>,

    /// Print the full selection as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SampleReport {
    #[serde(flatten)]
    state: PickerState,
    hsv: Hsv,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(printer)?;
    let mut picker = args.palette.picker(&config)?;
    super::apply_sliders(&mut picker, &config, args.brightness, args.alpha)?;

    match args.at {
        Some(at) => picker.select_point(at)?,
        None => super::select_initial(&mut picker, &config)?,
    };

    let state = picker.state();
    if state.pure_colour.is_transparent() {
        printer.warning(
            "Outside",
            &format!("palette at {}", state.selected_point),
        );
    }
    printer.status(
        "Sampled",
        &format!(
            "{} {}",
            printer.colour(state.colour),
            printer.dim(&format!("at {}", state.selected_point))
        ),
    );

    let report = SampleReport {
        hsv: argb_to_hsv(state.colour),
        state,
    };
    emit(&report, args.json, &[state.colour.to_string()])
}
