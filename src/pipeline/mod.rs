//! The transform pipeline: pixelate, quantise, render, in that order.
//!
//! The orchestrator owns every buffer for the duration of one call and
//! reports progress to the caller through a status callback; it never
//! touches storage itself.

mod grid;
mod overlay;
mod pixelate;
mod quantize;

pub use grid::{Block, BlockGrid};
pub use overlay::{marker_colour, render_overlay};
pub use pixelate::pixelate;
pub use quantize::{quantize, ColourAssignment, ColourMap};

use crate::error::{PbnError, Result};
use crate::types::{Colour, Palette, Raster};

/// Output grid target: block size is chosen so the result is roughly
/// a 50x50 grid of blocks.
const TARGET_CELLS: u32 = 50;

/// Processing status of one pipeline run, as observed by the caller's
/// persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Source received, pipeline not yet started.
    Uploaded,
    /// Pipeline running.
    Processing,
    /// Terminal: both outputs produced.
    Completed,
    /// Terminal: some stage failed; the error follows separately.
    Failed,
}

impl Status {
    /// Lowercase wire/database form.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Uploaded => "uploaded",
            Status::Processing => "processing",
            Status::Completed => "completed",
            Status::Failed => "failed",
        }
    }

    /// True for `Completed` and `Failed`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Completed | Status::Failed)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-tunable knobs for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    /// Explicit block size. `None` derives it from the dimensions.
    pub block_size: Option<u32>,
    /// Overlay background fill.
    pub background: Colour,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            block_size: None,
            background: Colour::WHITE,
        }
    }
}

/// Everything one successful run produces.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Block-averaged raster, same dimensions as the source.
    pub pixelated: Raster,
    /// Paint-by-number raster, same dimensions as the source.
    pub overlay: Raster,
    /// Distinct averaged colours with their numbered palette entries.
    pub colour_map: ColourMap,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Block size the run used.
    pub block_size: u32,
}

impl PipelineResult {
    /// Number of distinct colours assigned (cardinality of the map).
    pub fn colour_count(&self) -> usize {
        self.colour_map.len()
    }
}

/// Block size for a source image: `max(width/50, height/50)`,
/// truncating, never below 1.
pub fn compute_block_size(width: u32, height: u32) -> u32 {
    (width / TARGET_CELLS).max(height / TARGET_CELLS).max(1)
}

/// Run the full pipeline over a decoded source raster.
///
/// `on_status` observes the state machine: `Processing` fires before
/// any pixel work, then exactly one of `Completed` or `Failed`. The
/// `Failed` transition is reported before the error propagates, so a
/// caller never observes `processing` after a failure. No partial
/// result survives a failure; intermediate buffers drop on every exit
/// path.
pub fn process(
    source: Raster,
    palette: &Palette,
    options: &ProcessOptions,
    mut on_status: impl FnMut(Status),
) -> Result<PipelineResult> {
    on_status(Status::Processing);

    match run_stages(source, palette, options) {
        Ok(result) => {
            on_status(Status::Completed);
            Ok(result)
        }
        Err(err) => {
            on_status(Status::Failed);
            Err(err)
        }
    }
}

fn run_stages(
    source: Raster,
    palette: &Palette,
    options: &ProcessOptions,
) -> Result<PipelineResult> {
    let (width, height) = source.size();
    if source.is_empty() {
        return Err(PbnError::EmptyImage { width, height });
    }

    let block_size = options
        .block_size
        .map(|size| size.max(1))
        .unwrap_or_else(|| compute_block_size(width, height));

    let pixelated = pixelate(&source, block_size);
    drop(source);

    let colour_map = quantize(&pixelated, palette);
    let overlay = render_overlay(&pixelated, &colour_map, block_size, options.background);

    Ok(PipelineResult {
        pixelated,
        overlay,
        colour_map,
        width,
        height,
        block_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compute_block_size() {
        assert_eq!(compute_block_size(100, 100), 2);
        assert_eq!(compute_block_size(500, 300), 10);
        assert_eq!(compute_block_size(300, 500), 10);
        // Small images clamp to 1
        assert_eq!(compute_block_size(30, 30), 1);
        assert_eq!(compute_block_size(49, 49), 1);
        assert_eq!(compute_block_size(1, 1), 1);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(Status::Uploaded.as_str(), "uploaded");
        assert_eq!(Status::Processing.as_str(), "processing");
        assert_eq!(Status::Completed.as_str(), "completed");
        assert_eq!(Status::Failed.as_str(), "failed");
        assert!(!Status::Processing.is_terminal());
        assert!(Status::Completed.is_terminal());
        assert!(Status::Failed.is_terminal());
    }

    #[test]
    fn test_uniform_red_100x100() {
        let source = Raster::new(100, 100, Colour::rgb(238, 32, 77));
        let mut transitions = Vec::new();

        let result = process(
            source,
            &Palette::crayola(),
            &ProcessOptions::default(),
            |status| transitions.push(status),
        )
        .unwrap();

        assert_eq!(result.block_size, 2);
        assert_eq!(result.colour_count(), 1);
        assert_eq!((result.width, result.height), (100, 100));
        assert_eq!(transitions, vec![Status::Processing, Status::Completed]);

        // Averaging a uniform image changes nothing
        assert_eq!(result.pixelated.get(50, 50), Colour::rgb(238, 32, 77));

        // Markers at block centres only
        let marker = marker_colour(1);
        assert_eq!(result.overlay.get(1, 1), marker);
        assert_eq!(result.overlay.get(0, 0), Colour::WHITE);
    }

    #[test]
    fn test_empty_raster_fails_with_status_order() {
        let source = Raster::new(0, 0, Colour::WHITE);
        let mut transitions = Vec::new();

        let err = process(
            source,
            &Palette::crayola(),
            &ProcessOptions::default(),
            |status| transitions.push(status),
        )
        .unwrap_err();

        assert!(matches!(err, PbnError::EmptyImage { width: 0, height: 0 }));
        assert_eq!(transitions, vec![Status::Processing, Status::Failed]);
        assert!(!transitions.contains(&Status::Completed));
    }

    #[test]
    fn test_block_size_override() {
        let source = Raster::new(100, 100, Colour::rgb(1, 2, 3));
        let options = ProcessOptions {
            block_size: Some(10),
            ..Default::default()
        };

        let result = process(source, &Palette::crayola(), &options, |_| {}).unwrap();
        assert_eq!(result.block_size, 10);
    }

    #[test]
    fn test_block_size_override_zero_clamped() {
        let source = Raster::new(10, 10, Colour::rgb(1, 2, 3));
        let options = ProcessOptions {
            block_size: Some(0),
            ..Default::default()
        };

        let result = process(source, &Palette::crayola(), &options, |_| {}).unwrap();
        assert_eq!(result.block_size, 1);
    }

    #[test]
    fn test_transparent_regions_excluded_end_to_end() {
        // Left half opaque, right half transparent, block 2
        let mut source = Raster::new(8, 4, Colour::TRANSPARENT);
        for y in 0..4 {
            for x in 0..4 {
                source.set(x, y, Colour::rgb(30, 120, 250));
            }
        }

        let options = ProcessOptions {
            block_size: Some(2),
            ..Default::default()
        };
        let result = process(source, &Palette::crayola(), &options, |_| {}).unwrap();

        assert_eq!(result.colour_count(), 1);
        // Transparent half stays transparent in the pixelated output
        assert!(result.pixelated.get(6, 2).is_transparent());
        // And carries no markers in the overlay
        assert_eq!(result.overlay.get(5, 1), Colour::WHITE);
        assert_eq!(result.overlay.get(7, 3), Colour::WHITE);
        // Opaque half does
        assert_eq!(result.overlay.get(1, 1), marker_colour(1));
    }

    #[test]
    fn test_colour_count_matches_map() {
        let mut source = Raster::new(4, 2, Colour::rgb(10, 10, 10));
        for y in 0..2 {
            for x in 2..4 {
                source.set(x, y, Colour::rgb(240, 240, 240));
            }
        }

        let options = ProcessOptions {
            block_size: Some(2),
            ..Default::default()
        };
        let result = process(source, &Palette::crayola(), &options, |_| {}).unwrap();
        assert_eq!(result.colour_count(), result.colour_map.len());
        assert_eq!(result.colour_count(), 2);
    }

    #[test]
    fn test_zero_width_only_fails() {
        let source = Raster::new(0, 5, Colour::WHITE);
        let err = process(
            source,
            &Palette::crayola(),
            &ProcessOptions::default(),
            |_| {},
        )
        .unwrap_err();
        assert!(matches!(err, PbnError::EmptyImage { width: 0, height: 5 }));
    }
}
