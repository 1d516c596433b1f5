//! Pixelation - block-averaged downsampling at full resolution.

use crate::types::{Colour, Raster};

use super::grid::BlockGrid;

/// Replace each block of `source` with its average colour.
///
/// The output has the same dimensions as the source; every pixel of a
/// block receives the per-channel arithmetic mean (truncating integer
/// division) of the pixels the block covers. A block size of 1 is the
/// identity transform. Partial edge blocks average only the pixels
/// that exist.
pub fn pixelate(source: &Raster, block_size: u32) -> Raster {
    let (width, height) = source.size();
    let mut output = Raster::new(width, height, Colour::TRANSPARENT);

    for block in BlockGrid::new(width, height, block_size) {
        let mut sum_r: u32 = 0;
        let mut sum_g: u32 = 0;
        let mut sum_b: u32 = 0;
        let mut sum_a: u32 = 0;

        for dy in 0..block.height {
            for dx in 0..block.width {
                let pixel = source.get(block.x + dx, block.y + dy);
                sum_r += pixel.r as u32;
                sum_g += pixel.g as u32;
                sum_b += pixel.b as u32;
                sum_a += pixel.a as u32;
            }
        }

        let count = block.pixel_count();
        // Grid blocks always cover at least one pixel; transparent is
        // the defensive answer if that ever stops holding.
        let average = if count == 0 {
            Colour::TRANSPARENT
        } else {
            Colour::new(
                (sum_r / count) as u8,
                (sum_g / count) as u8,
                (sum_b / count) as u8,
                (sum_a / count) as u8,
            )
        };

        for dy in 0..block.height {
            for dx in 0..block.width {
                output.set(block.x + dx, block.y + dy, average);
            }
        }
    }

    output
}
