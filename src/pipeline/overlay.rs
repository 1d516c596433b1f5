//! Overlay rendering - the numbered paint-by-number sheet.

use crate::types::{Colour, Raster};

use super::grid::BlockGrid;
use super::quantize::ColourMap;

/// Marker colour for an assignment number.
///
/// The number's low byte goes in the red channel and the high byte in
/// green, so markers stay machine-distinguishable for any assignment
/// count below 2^16 and identical numbers always render identically.
/// The visual form is a placeholder for real digit rendering.
pub fn marker_colour(number: u32) -> Colour {
    Colour::rgb((number & 0xFF) as u8, ((number >> 8) & 0xFF) as u8, 0)
}

/// Render the paint-by-number raster for a pixelated source.
///
/// The output matches the source dimensions and starts as a solid
/// `background` fill. For every block of the same grid pixelation used,
/// the colour at the block origin (the block's uniform averaged colour)
/// is looked up in `assignments` and a marker pixel is placed at the
/// block centre. Transparent blocks are skipped and keep the
/// background, as do centres that fall outside the raster.
pub fn render_overlay(
    pixelated: &Raster,
    assignments: &ColourMap,
    block_size: u32,
    background: Colour,
) -> Raster {
    let (width, height) = pixelated.size();
    let mut overlay = Raster::new(width, height, background);

    for block in BlockGrid::new(width, height, block_size) {
        let colour = pixelated.get(block.x, block.y);
        if colour.is_transparent() {
            continue;
        }

        if let Some(assignment) = assignments.get(colour) {
            let (cx, cy) = block.centre();
            if cx < width && cy < height {
                overlay.set(cx, cy, marker_colour(assignment.number));
            }
        }
    }

    overlay
}
