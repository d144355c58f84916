use clap::Parser;
use miette::Result;
use swatch::cli::{Cli, Commands};
use swatch::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Sample(args) => swatch::cli::sample::run(args, &printer)?,
        Commands::Locate(args) => swatch::cli::locate::run(args, &printer)?,
        Commands::Adjust(args) => swatch::cli::adjust::run(args, &printer)?,
        Commands::Gradient(args) => swatch::cli::gradient::run(args, &printer)?,
        Commands::Snap(args) => swatch::cli::snap::run(args, &printer)?,
        Commands::Completions(args) => swatch::cli::completions::run(args)?,
    }

    Ok(())
}
