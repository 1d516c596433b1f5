//! Colour quantisation - mapping averaged colours to numbered palette
//! entries.
//!
//! Numbering follows first-discovery order under a row-major scan, so
//! the same raster always quantises to the same numbers. Discovery
//! order is kept in an explicit ordered list with a membership index;
//! a hash set alone would not give a stable iteration order.

use std::collections::HashMap;

use crate::types::{Colour, Palette, PaletteEntry, Raster};

/// One distinct averaged colour mapped to a numbered palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourAssignment {
    /// 1-based label, assigned in discovery order.
    pub number: u32,
    /// Nearest palette entry for the colour.
    pub entry: &'static PaletteEntry,
}

/// The quantiser's output: every distinct non-transparent colour of a
/// pixelated raster, in discovery order, with its assignment.
#[derive(Debug, Clone, Default)]
pub struct ColourMap {
    /// Distinct colours in first-discovery order.
    order: Vec<Colour>,
    /// Colour -> position in `order`.
    index: HashMap<Colour, usize>,
    /// Assignments, parallel to `order`.
    assignments: Vec<ColourAssignment>,
}

impl ColourMap {
    /// Look up the assignment for a colour.
    pub fn get(&self, colour: Colour) -> Option<&ColourAssignment> {
        self.index.get(&colour).map(|&i| &self.assignments[i])
    }

    /// Iterate (colour, assignment) pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Colour, &ColourAssignment)> + '_ {
        self.order
            .iter()
            .copied()
            .zip(self.assignments.iter())
    }

    /// Number of distinct colours (the `colour_count` of the run).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True for an all-transparent (or empty) source raster.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Quantise a pixelated raster against a palette.
///
/// Pass 1 scans row-major (top-to-bottom, left-to-right), skipping
/// fully transparent pixels, and records distinct RGBA colours in the
/// order they are first seen. Alpha is part of colour identity here.
/// Pass 2 resolves each distinct colour to its nearest palette entry
/// and numbers them 1, 2, 3, ... in discovery order.
///
/// Never fails: an all-transparent raster yields an empty map.
pub fn quantize(pixelated: &Raster, palette: &Palette) -> ColourMap {
    let mut map = ColourMap::default();

    for colour in pixelated.pixels() {
        if colour.is_transparent() {
            continue;
        }
        if !map.index.contains_key(&colour) {
            map.index.insert(colour, map.order.len());
            map.order.push(colour);
        }
    }

    map.assignments.reserve(map.order.len());
    for (i, &colour) in map.order.iter().enumerate() {
        map.assignments.push(ColourAssignment {
            number: (i + 1) as u32,
            entry: palette.nearest(colour),
        });
    }

    map
}
