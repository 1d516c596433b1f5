//! pbn - pixelated paint-by-number generator
//!
//! A library for turning raster images into a block-pixelated version
//! and a numbered paint-by-number sheet tied to a fixed colour palette.

pub mod cli;
pub mod codec;
pub mod error;
pub mod legend;
pub mod output;
pub mod pipeline;
pub mod types;

pub use codec::{decode_raster, encode_raster};
pub use error::{PbnError, Result};
pub use legend::{Legend, LegendEntry};
pub use pipeline::{
    compute_block_size, marker_colour, pixelate, process, quantize, render_overlay, Block,
    BlockGrid, ColourAssignment, ColourMap, PipelineResult, ProcessOptions, Status,
};
pub use types::{Colour, Palette, PaletteEntry, Raster};
