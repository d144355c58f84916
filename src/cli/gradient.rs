use clap::Args;
use serde::Serialize;

use crate::error::Result;
use crate::output::{emit, Printer};
use crate::slider::SliderChannel;
use crate::types::Colour;

use super::ChannelArg;

/// Print the two ends of a slider gradient
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Base colour, e.g. #3399CC
    pub colour: Colour,

    /// Slider channel the gradient is drawn for
    #[arg(long, value_enum, default_value_t)]
    pub channel: ChannelArg,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GradientReport {
    channel: SliderChannel,
    start: Colour,
    end: Colour,
}

pub fn run(args: GradientArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(printer)?;
    let channel = SliderChannel::from(args.channel);

    let mut slider = config.slider.slider(channel);
    slider.set_base(args.colour);
    let (start, end) = slider.gradient();

    printer.status(
        "Gradient",
        &format!("{} .. {}", printer.colour(start), printer.colour(end)),
    );

    let report = GradientReport {
        channel,
        start,
        end,
    };
    emit(&report, args.json, &[start.to_string(), end.to_string()])
}
