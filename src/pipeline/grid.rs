//! Block grid shared by pixelation and overlay rendering.
//!
//! Both stages must walk the exact same partition of the raster, so the
//! grid is defined once: blocks start at (0, 0), advance by the block
//! size on both axes, and the final row/column is clipped to the image
//! boundary. Partial edge blocks cover only the pixels that exist.

/// One block of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Origin column.
    pub x: u32,
    /// Origin row.
    pub y: u32,
    /// Clipped width (equals the block size except at the right edge).
    pub width: u32,
    /// Clipped height (equals the block size except at the bottom edge).
    pub height: u32,
    /// Nominal (unclipped) block size.
    size: u32,
}

impl Block {
    /// Number of pixels the block actually covers.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Visual centre of the nominal block, `(x + size/2, y + size/2)`
    /// with truncating division. For a clipped edge block this can fall
    /// outside the raster; callers skip it then.
    pub fn centre(&self) -> (u32, u32) {
        (self.x + self.size / 2, self.y + self.size / 2)
    }
}

/// Iterator over the blocks of a `width x height` raster, row-major.
#[derive(Debug, Clone)]
pub struct BlockGrid {
    width: u32,
    height: u32,
    size: u32,
    x: u32,
    y: u32,
}

impl BlockGrid {
    /// Create the grid for a raster. A block size of 0 is treated as 1.
    pub fn new(width: u32, height: u32, block_size: u32) -> Self {
        Self {
            width,
            height,
            size: block_size.max(1),
            x: 0,
            y: 0,
        }
    }

    /// The (possibly clamped) block size this grid uses.
    pub fn block_size(&self) -> u32 {
        self.size
    }
}

impl Iterator for BlockGrid {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.y >= self.height || self.width == 0 {
            return None;
        }

        let block = Block {
            x: self.x,
            y: self.y,
            width: self.size.min(self.width - self.x),
            height: self.size.min(self.height - self.y),
            size: self.size,
        };

        self.x += self.size;
        if self.x >= self.width {
            self.x = 0;
            self.y += self.size;
        }

        Some(block)
    }
}
