//! Fixed reference palette and nearest-entry search.

use super::Colour;

/// A single named reference colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Crayon name, e.g. "Turquoise Blue".
    pub name: &'static str,
    /// Opaque reference colour.
    pub colour: Colour,
}

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> PaletteEntry {
    PaletteEntry {
        name,
        colour: Colour::rgb(r, g, b),
    }
}

/// The Crayola 64 palette, a representative subset of the full 128.
///
/// Order is fixed and load-bearing: nearest-entry ties resolve to the
/// earlier entry.
const CRAYOLA: [PaletteEntry; 64] = [
    entry("Red", 0xEE, 0x20, 0x4D),
    entry("Blue", 0x1F, 0x75, 0xFE),
    entry("Yellow", 0xFC, 0xE8, 0x83),
    entry("Green", 0x1C, 0xAC, 0x78),
    entry("Orange", 0xFF, 0x75, 0x38),
    entry("Purple", 0x9C, 0x51, 0xB6),
    entry("Brown", 0xAF, 0x59, 0x3E),
    entry("Black", 0x00, 0x00, 0x00),
    entry("White", 0xFF, 0xFF, 0xFF),
    entry("Pink", 0xFC, 0x74, 0xFD),
    entry("Gray", 0x95, 0x91, 0x8C),
    entry("Turquoise Blue", 0x6C, 0xDA, 0xE7),
    entry("Violet", 0x73, 0x2E, 0x6C),
    entry("Sky Blue", 0x76, 0xD7, 0xEA),
    entry("Forest Green", 0x5F, 0xA7, 0x77),
    entry("Maroon", 0xC3, 0x21, 0x48),
    entry("Navy Blue", 0x19, 0x74, 0xD2),
    entry("Tan", 0xFA, 0x9A, 0x85),
    entry("Silver", 0xC9, 0xC0, 0xBB),
    entry("Gold", 0xE7, 0xC6, 0x97),
    entry("Magenta", 0xF6, 0x53, 0xA6),
    entry("Lime Green", 0x32, 0xCD, 0x32),
    entry("Aqua", 0x00, 0xFF, 0xFF),
    entry("Hot Pink", 0xFF, 0x69, 0xB4),
    entry("Dark Blue", 0x00, 0x33, 0x66),
    entry("Light Blue", 0xAD, 0xD8, 0xE6),
    entry("Yellow Green", 0xC5, 0xE3, 0x84),
    entry("Orange Red", 0xFF, 0x45, 0x00),
    entry("Dark Green", 0x22, 0x8B, 0x22),
    entry("Light Green", 0x90, 0xEE, 0x90),
    entry("Salmon", 0xFA, 0x80, 0x72),
    entry("Peach", 0xFF, 0xCB, 0xA4),
    entry("Lavender", 0xE6, 0xE6, 0xFA),
    entry("Coral", 0xFF, 0x7F, 0x50),
    entry("Crimson", 0xDC, 0x14, 0x3C),
    entry("Indigo", 0x4B, 0x00, 0x82),
    entry("Mint Green", 0x98, 0xFB, 0x98),
    entry("Royal Blue", 0x41, 0x69, 0xE1),
    entry("Teal", 0x00, 0x80, 0x80),
    entry("Khaki", 0xF0, 0xE6, 0x8C),
    entry("Plum", 0xDD, 0xA0, 0xDD),
    entry("Olive", 0x80, 0x80, 0x00),
    entry("Beige", 0xF5, 0xF5, 0xDC),
    entry("Ivory", 0xFF, 0xFF, 0xF0),
    entry("Chocolate", 0xD2, 0x69, 0x1E),
    entry("Sienna", 0xA0, 0x52, 0x2D),
    entry("Peru", 0xCD, 0x85, 0x3F),
    entry("Saddle Brown", 0x8B, 0x45, 0x13),
    entry("Dark Orange", 0xFF, 0x8C, 0x00),
    entry("Dark Red", 0x8B, 0x00, 0x00),
    entry("Dark Violet", 0x94, 0x00, 0xD3),
    entry("Medium Blue", 0x00, 0x00, 0xCD),
    entry("Light Coral", 0xF0, 0x80, 0x80),
    entry("Pale Green", 0x98, 0xFB, 0x98),
    entry("Light Yellow", 0xFF, 0xFF, 0xE0),
    entry("Dark Cyan", 0x00, 0x8B, 0x8B),
    entry("Medium Purple", 0x93, 0x70, 0xDB),
    entry("Deep Pink", 0xFF, 0x14, 0x93),
    entry("Medium Sea Green", 0x3C, 0xB3, 0x71),
    entry("Light Steel Blue", 0xB0, 0xC4, 0xDE),
    entry("Pale Turquoise", 0xAF, 0xEE, 0xEE),
    entry("Medium Orchid", 0xBA, 0x55, 0xD3),
    entry("Light Salmon", 0xFF, 0xA0, 0x7A),
    entry("Powder Blue", 0xB0, 0xE0, 0xE6),
];

/// An ordered, immutable collection of reference colours.
///
/// Entry order is stable across runs and doubles as the tie-break rule
/// for [`Palette::nearest`].
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    entries: &'static [PaletteEntry],
}

impl Palette {
    /// The built-in Crayola palette.
    pub const fn crayola() -> Self {
        Self { entries: &CRAYOLA }
    }

    /// Build a palette from a static entry table.
    ///
    /// The table must be non-empty; [`Palette::nearest`] has no answer
    /// for an empty palette.
    pub const fn from_entries(entries: &'static [PaletteEntry]) -> Self {
        assert!(!entries.is_empty(), "palette must not be empty");
        Self { entries }
    }

    /// The entries in fixed order.
    pub fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; palettes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry with the smallest Euclidean RGB distance to
    /// `colour`. Alpha is ignored. Ties go to the earlier entry.
    pub fn nearest(&self, colour: Colour) -> &'static PaletteEntry {
        let entries = self.entries;
        let mut best = &entries[0];
        let mut best_dist = colour.distance_sq(best.colour);
        for entry in &entries[1..] {
            let dist = colour.distance_sq(entry.colour);
            if dist < best_dist {
                best = entry;
                best_dist = dist;
            }
        }
        best
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::crayola()
    }
}
