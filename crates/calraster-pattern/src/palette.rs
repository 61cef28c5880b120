/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Indexed palettes with reserved slots.
//!
//! Six color e-paper panels address their inks through small indices,
//! index 4 exists in the controller table but drives no ink, so it must
//! never end up in a pattern.

use alloc::vec::Vec;

use crate::color::Rgb;
use crate::errors::PatternErrors;

const E6_RESERVED: [u8; 1] = [4];

// values the panel controller expects
const E6_THEORETICAL: [(u8, Rgb); 7] = [
    (0, Rgb::BLACK),
    (1, Rgb::WHITE),
    (2, Rgb::YELLOW),
    (3, Rgb::RED),
    (4, Rgb::BLACK),
    (5, Rgb::BLUE),
    (6, Rgb::GREEN)
];

// what the inks actually look like on a reference panel
const E6_MEASURED: [(u8, Rgb); 7] = [
    (0, Rgb::new(2, 2, 2)),
    (1, Rgb::new(190, 190, 190)),
    (2, Rgb::new(205, 202, 0)),
    (3, Rgb::new(135, 19, 0)),
    (4, Rgb::BLACK),
    (5, Rgb::new(5, 64, 158)),
    (6, Rgb::new(39, 102, 60))
];

/// A palette index paired with its color
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    pub index: u8,
    #[cfg_attr(feature = "serde", serde(rename = "rgb"))]
    pub color: Rgb
}

impl PaletteEntry {
    pub const fn new(index: u8, color: Rgb) -> PaletteEntry {
        PaletteEntry { index, color }
    }
}

/// A mapping from small indices to colors where some indices are reserved.
///
/// Reserved indices are filtered out once, when the palette is built,
/// [`usable`](Palette::usable) is the allow list every selection goes through.
#[derive(Clone, Debug)]
pub struct Palette {
    entries:  Vec<PaletteEntry>,
    reserved: Vec<u8>,
    usable:   Vec<PaletteEntry>
}

impl Palette {
    /// Build a palette from its entries and the indices that must never
    /// be selected.
    ///
    /// Reserved indices do not need to be present in `entries`.
    ///
    /// # Errors
    /// [`PatternErrors::DuplicateIndex`] if two entries share an index
    pub fn new(entries: &[PaletteEntry], reserved: &[u8]) -> Result<Palette, PatternErrors> {
        let mut sorted = entries.to_vec();
        sorted.sort_unstable_by_key(|entry| entry.index);

        if let Some(pair) = sorted.windows(2).find(|pair| pair[0].index == pair[1].index) {
            return Err(PatternErrors::DuplicateIndex(pair[0].index));
        }
        Ok(Palette::from_sorted(sorted, reserved))
    }

    /// The palette the e-paper controller firmware is written against
    pub fn e6_theoretical() -> Palette {
        Palette::from_table(&E6_THEORETICAL)
    }

    /// Ink colors as measured on a reference panel
    pub fn e6_measured() -> Palette {
        Palette::from_table(&E6_MEASURED)
    }

    fn from_table(table: &[(u8, Rgb)]) -> Palette {
        let entries = table
            .iter()
            .map(|(index, color)| PaletteEntry::new(*index, *color))
            .collect();

        Palette::from_sorted(entries, &E6_RESERVED)
    }

    fn from_sorted(entries: Vec<PaletteEntry>, reserved: &[u8]) -> Palette {
        let mut reserved = reserved.to_vec();
        reserved.sort_unstable();
        reserved.dedup();

        let usable = entries
            .iter()
            .filter(|entry| reserved.binary_search(&entry.index).is_err())
            .copied()
            .collect();

        Palette {
            entries,
            reserved,
            usable
        }
    }

    /// Raw lookup, reserved indices included
    pub fn get(&self, index: u8) -> Option<Rgb> {
        self.entries
            .binary_search_by_key(&index, |entry| entry.index)
            .ok()
            .map(|pos| self.entries[pos].color)
    }

    pub fn is_reserved(&self, index: u8) -> bool {
        self.reserved.binary_search(&index).is_ok()
    }

    /// Every entry, in ascending index order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn reserved(&self) -> &[u8] {
        &self.reserved
    }

    /// Entries that may be rendered, in ascending index order
    pub fn usable(&self) -> &[PaletteEntry] {
        &self.usable
    }

    /// Map `indices` to colors, keeping their order
    ///
    /// # Errors
    /// - [`PatternErrors::ReservedIndex`]: an index is reserved
    /// - [`PatternErrors::UnknownIndex`]: an index has no entry
    pub fn select(&self, indices: &[u8]) -> Result<Vec<Rgb>, PatternErrors> {
        indices
            .iter()
            .map(|index| {
                if self.is_reserved(*index) {
                    return Err(PatternErrors::ReservedIndex(*index));
                }
                self.usable
                    .binary_search_by_key(index, |entry| entry.index)
                    .map(|pos| self.usable[pos].color)
                    .map_err(|_| PatternErrors::UnknownIndex(*index))
            })
            .collect()
    }

    /// All usable colors, in ascending index order.
    ///
    /// For the built in palettes this is black, white, yellow, red, blue, green.
    pub fn calibration_colors(&self) -> Vec<Rgb> {
        self.usable.iter().map(|entry| entry.color).collect()
    }
}
