//! Palette listing command.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::Palette;

/// List the built-in Crayola palette
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Emit the palette as JSON instead of text lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let palette = Palette::crayola();

    printer.info(
        "Palette",
        &format!("{} (built-in)", plural(palette.len(), "colour", "colours")),
    );

    if args.json {
        let entries: Vec<serde_json::Value> = palette
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::json!({
                    "index": i + 1,
                    "name": entry.name,
                    "hex": entry.colour.to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries).map_err(|e| {
            crate::error::PbnError::Parse {
                message: format!("Failed to serialise palette: {}", e),
                help: None,
            }
        })?);
        return Ok(());
    }

    for (i, entry) in palette.entries().iter().enumerate() {
        println!("{:>3}  {}  {}", i + 1, entry.colour, entry.name);
    }

    Ok(())
}
