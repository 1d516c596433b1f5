//! Process command implementation.
//!
//! Decodes each input image, runs the transform pipeline, and writes
//! the pixelated PNG, the numbered overlay PNG, and the JSON legend.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use walkdir::WalkDir;

use crate::codec::{decode_raster, encode_raster};
use crate::error::{PbnError, Result};
use crate::legend::Legend;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{process, ProcessOptions, Status};
use crate::types::{Colour, Palette};

/// Extensions accepted when expanding directory inputs.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

/// Process images into pixelated and paint-by-number outputs
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Input images or directories to process
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Block size override (derived from dimensions when omitted)
    #[arg(long)]
    pub block_size: Option<u32>,

    /// Overlay background colour (hex)
    #[arg(long, default_value = "#FFFFFF")]
    pub background: String,
}

pub fn run(args: ProcessArgs, printer: &Printer) -> Result<()> {
    let background = Colour::from_hex(&args.background)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| PbnError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        return Err(PbnError::Parse {
            message: "No image files found in the given inputs".to_string(),
            help: Some(format!(
                "Supported extensions: {}",
                IMAGE_EXTENSIONS.join(", ")
            )),
        });
    }

    let palette = Palette::crayola();
    let options = ProcessOptions {
        block_size: args.block_size,
        background,
    };

    for file in &files {
        process_file(file, &args.output, &palette, &options, printer)?;
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(files.len(), "image", "images"),
            args.output.display()
        ),
    );

    Ok(())
}

/// Expand file and directory arguments into a flat image file list.
///
/// Directories are walked recursively; entries are sorted so output
/// order does not depend on filesystem iteration order.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| has_image_extension(p))
                .collect();
            found.sort();
            files.extend(found);
        } else if input.exists() {
            files.push(input.clone());
        } else {
            return Err(PbnError::Io {
                path: input.clone(),
                message: "No such file or directory".to_string(),
            });
        }
    }

    Ok(files)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Run the pipeline over one file and write its three artifacts.
fn process_file(
    file: &Path,
    output_dir: &Path,
    palette: &Palette,
    options: &ProcessOptions,
    printer: &Printer,
) -> Result<()> {
    let display = display_path(file);
    let source = decode_raster(file)?;

    let result = process(source, palette, options, |status| match status {
        Status::Processing => printer.status("Processing", &display),
        Status::Failed => printer.error("Failed", &display),
        // Completed is reported below with the run metadata
        _ => {}
    })?;

    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let pixelated_path = output_dir.join(format!("{}.pixelated.png", stem));
    let numbered_path = output_dir.join(format!("{}.numbered.png", stem));
    let legend_path = output_dir.join(format!("{}.legend.json", stem));

    encode_raster(&result.pixelated, &pixelated_path)?;
    encode_raster(&result.overlay, &numbered_path)?;

    let legend = Legend::from_result(&result);
    fs::write(&legend_path, legend.to_json()?).map_err(|e| PbnError::Io {
        path: legend_path.clone(),
        message: format!("Failed to write legend: {}", e),
    })?;

    printer.info(
        "Completed",
        &format!(
            "{} ({}x{}, block {}, {})",
            display,
            result.width,
            result.height,
            result.block_size,
            plural(result.colour_count(), "colour", "colours")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_test_png(path: &Path, width: u32, height: u32, rgba: [u8; 4]) {
        let img = RgbaImage::from_pixel(width, height, Rgba(rgba));
        img.save(path).unwrap();
    }

    fn test_args(inputs: Vec<PathBuf>, output: PathBuf) -> ProcessArgs {
        ProcessArgs {
            inputs,
            output,
            block_size: None,
            background: "#FFFFFF".to_string(),
        }
    }

    #[test]
    fn test_process_writes_all_artifacts() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("photo.png");
        let output = dir.path().join("out");
        write_test_png(&input, 100, 100, [238, 32, 77, 255]);

        run(test_args(vec![input], output.clone()), &Printer::new()).unwrap();

        assert!(output.join("photo.pixelated.png").exists());
        assert!(output.join("photo.numbered.png").exists());
        assert!(output.join("photo.legend.json").exists());

        let legend: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("photo.legend.json")).unwrap())
                .unwrap();
        assert_eq!(legend["width"], 100);
        assert_eq!(legend["block_size"], 2);
        assert_eq!(legend["colour_count"], 1);
        assert_eq!(legend["entries"][0]["name"], "Red");
    }

    #[test]
    fn test_process_output_dimensions_match_source() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("small.png");
        let output = dir.path().join("out");
        write_test_png(&input, 7, 5, [0, 0, 0, 255]);

        run(test_args(vec![input], output.clone()), &Printer::new()).unwrap();

        let img = image::open(output.join("small.pixelated.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!((img.width(), img.height()), (7, 5));
    }

    #[test]
    fn test_directory_input_expansion() {
        let dir = tempdir().unwrap();
        let images = dir.path().join("images");
        fs::create_dir_all(&images).unwrap();
        write_test_png(&images.join("a.png"), 4, 4, [10, 20, 30, 255]);
        write_test_png(&images.join("b.png"), 4, 4, [30, 20, 10, 255]);
        fs::write(images.join("notes.txt"), "not an image").unwrap();

        let output = dir.path().join("out");
        run(test_args(vec![images], output.clone()), &Printer::new()).unwrap();

        assert!(output.join("a.pixelated.png").exists());
        assert!(output.join("b.numbered.png").exists());
        assert!(!output.join("notes.pixelated.png").exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempdir().unwrap();
        let args = test_args(vec![dir.path().join("absent.png")], dir.path().join("out"));
        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_invalid_background_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("x.png");
        write_test_png(&input, 2, 2, [1, 2, 3, 255]);

        let mut args = test_args(vec![input], dir.path().join("out"));
        args.background = "#NOTHEX".to_string();
        assert!(matches!(
            run(args, &Printer::new()),
            Err(PbnError::Parse { .. })
        ));
    }

    #[test]
    fn test_block_size_override_reaches_legend() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("y.png");
        let output = dir.path().join("out");
        write_test_png(&input, 64, 64, [100, 100, 100, 255]);

        let mut args = test_args(vec![input], output.clone());
        args.block_size = Some(8);
        run(args, &Printer::new()).unwrap();

        let legend: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join("y.legend.json")).unwrap())
                .unwrap();
        assert_eq!(legend["block_size"], 8);
    }
}
