// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam deletion and coordinate bookkeeping
//!
//! Removing a seam shrinks the working image by one column.  After
//! many removals the working coordinates of a pixel no longer match
//! where it sat in the source image, so every removal also updates a
//! `ShiftMap` that translates back.

use crate::pixels::ColorMap;
use crate::twodmap::TwoDimensionalMap;

/// A removed seam, as `(row, column)` pairs in the coordinates of the
/// image the carve started from.
pub type OriginalSeam = Vec<(u32, u32)>;

/// Every seam removed during a carve, in the order they were removed.
pub type SeamHistory = Vec<OriginalSeam>;

/// Remove one pixel per row, at `seam[y]` for row `y`, leaving the
/// image one column narrower.
pub fn remove_vertical_seam(image: &mut ColorMap, seam: &[u32]) {
    image.remove_seam(seam);
}

/// Per-row offsets from current to original column numbers.
///
/// For every surviving pixel, `original = current + shift[(current, row)]`.
/// The grid is sized to the original image; only the first `width`
/// entries of each row are live.
#[derive(Debug, Clone)]
pub struct ShiftMap {
    shifts: TwoDimensionalMap<u32>,
    width: u32,
}

impl ShiftMap {
    /// A map for an image that has not lost anything yet.
    pub fn new(width: u32, height: u32) -> Self {
        ShiftMap {
            shifts: TwoDimensionalMap::new(width, height),
            width,
        }
    }

    /// The current number of live columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The original column of the pixel currently at `(x, y)`.
    pub fn original(&self, x: u32, y: u32) -> u32 {
        debug_assert!(x < self.width);
        x + self.shifts[(x, y)]
    }

    /// Record a seam about to be removed.  Returns the original column
    /// of each seam pixel, read before the removal, and then shifts
    /// everything to the right of the seam one place left, each moved
    /// entry gaining one offset.
    ///
    /// # Panics
    ///
    /// If the seam does not have one entry per row, or names a column
    /// that is no longer live.
    pub fn remove_seam(&mut self, seam: &[u32]) -> Vec<u32> {
        assert_eq!(
            seam.len(),
            self.shifts.height as usize,
            "a seam must have one entry per row"
        );
        let mut originals = Vec::with_capacity(seam.len());
        for (y, &col) in seam.iter().enumerate() {
            let y = y as u32;
            assert!(col < self.width, "seam column {} outside width {}", col, self.width);
            originals.push(self.original(col, y));
            for x in col..self.width - 1 {
                self.shifts[(x, y)] = self.shifts[(x + 1, y)] + 1;
            }
        }
        self.width -= 1;
        originals
    }
}
