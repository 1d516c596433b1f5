//! Colour legend output.
//!
//! The legend is the machine-readable companion to the numbered
//! overlay: which number means which crayon, plus run metadata.

use serde::Serialize;

use crate::pipeline::PipelineResult;

/// One legend line: an assignment number with its palette entry.
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    /// 1-based assignment number as drawn on the overlay.
    pub number: u32,
    /// Palette entry name.
    pub name: &'static str,
    /// Palette entry colour as `#RRGGBB`.
    pub hex: String,
}

/// The full legend for one processed image.
#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub width: u32,
    pub height: u32,
    pub block_size: u32,
    pub colour_count: usize,
    /// Entries in assignment-number order.
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Build the legend from a pipeline result.
    pub fn from_result(result: &PipelineResult) -> Self {
        let entries = result
            .colour_map
            .iter()
            .map(|(_, assignment)| LegendEntry {
                number: assignment.number,
                name: assignment.entry.name,
                hex: assignment.entry.colour.to_string(),
            })
            .collect();

        Self {
            width: result.width,
            height: result.height,
            block_size: result.block_size,
            colour_count: result.colour_count(),
            entries,
        }
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| crate::error::PbnError::Parse {
            message: format!("Failed to serialise legend: {}", e),
            help: None,
        })
    }
}
