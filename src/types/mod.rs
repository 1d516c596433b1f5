//! Core domain types for pbn.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Raster` - owned rectangular pixel buffers
//! - `Palette` - the fixed reference palette and nearest-entry search

mod colour;
mod palette;
mod raster;

pub use colour::Colour;
pub use palette::{Palette, PaletteEntry};
pub use raster::Raster;
