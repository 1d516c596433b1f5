pub mod completions;
pub mod palette;
pub mod process;

use clap::{Parser, Subcommand};

/// pbn - pixelated paint-by-number generator
#[derive(Parser, Debug)]
#[command(name = "pbn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process images into pixelated and paint-by-number outputs
    Process(process::ProcessArgs),

    /// List the built-in Crayola palette
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
