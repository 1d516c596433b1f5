//! Decode/encode boundary with the `image` crate.
//!
//! The pipeline itself only sees `Raster` buffers; file formats start
//! and end here.

use std::path::Path;

use crate::error::{PbnError, Result};
use crate::types::Raster;

/// Decode an image file into an RGBA raster.
///
/// Any format the `image` crate understands is accepted; everything is
/// converted to RGBA8 on the way in.
pub fn decode_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .map_err(|e| PbnError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
            help: Some("Supported formats include PNG, JPEG, GIF, and BMP".to_string()),
        })?
        .to_rgba8();

    Ok(Raster::from_rgba_image(&img))
}

/// Encode a raster as a PNG file.
pub fn encode_raster(raster: &Raster, path: &Path) -> Result<()> {
    let img = raster
        .to_rgba_image()
        .ok_or_else(|| PbnError::InternalInvariant {
            message: format!(
                "cannot encode {}x{} raster",
                raster.width(),
                raster.height()
            ),
        })?;

    img.save(path).map_err(|e| PbnError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
