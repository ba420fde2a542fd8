// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional grid every stage of the carver works on.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field containing one of several
/// possible objects during processing: an RGB triple for the working
/// image, an `f64` for the energy and cumulative cost maps, or a
/// `u32` offset for the shift maps.
///
/// Addressing is always `(x, y)`, column first, as in image.rs.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the
    /// buffer does not hold exactly `width * height` entries.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// Build a map by evaluating `f(x, y)` at every address.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let data = iproduct!(0..height, 0..width).map(|(y, x)| f(x, y)).collect();
        TwoDimensionalMap {
            width,
            height,
            data,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// A single row, as a contiguous slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// The whole buffer, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Delete one entry from every row: the one at `seam[y]` for row
    /// `y`.  Entries to the right of the seam slide left, and the map
    /// becomes one column narrower.
    ///
    /// # Panics
    ///
    /// If the seam does not have one entry per row, or names a column
    /// outside the map.
    pub fn remove_seam(&mut self, seam: &[u32]) {
        assert_eq!(
            seam.len(),
            self.height as usize,
            "a seam must have one entry per row"
        );
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        let mut data = Vec::with_capacity((width - 1) * self.height as usize);
        for (row, &col) in self.data.chunks(width).zip(seam) {
            let col = col as usize;
            assert!(col < width, "seam column {} outside width {}", col, width);
            data.extend_from_slice(&row[..col]);
            data.extend_from_slice(&row[col + 1..]);
        }
        self.width -= 1;
        self.data = data;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
