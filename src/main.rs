use clap::Parser;
use miette::Result;
use pbn::cli::{Cli, Commands};
use pbn::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Process(args) => pbn::cli::process::run(args, &printer)?,
        Commands::Palette(args) => pbn::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => pbn::cli::completions::run(args)?,
    }

    Ok(())
}
