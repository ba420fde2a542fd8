// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Turning the image a quarter turn makes every column a contiguous
//! row, so the vertical seam machinery removes horizontal seams
//! without knowing it.  Nothing downstream takes an orientation
//! parameter; it only ever sees whichever buffer it is handed.

use crate::twodmap::TwoDimensionalMap;

/// Rotate a map 90° counter-clockwise.  Row `i` of the result is
/// column `width - 1 - i` of the input, and column `j` of the result
/// is row `j` of the input.
pub fn rotate<P: Default + Copy>(map: &TwoDimensionalMap<P>) -> TwoDimensionalMap<P> {
    let (width, height) = map.dimensions();
    TwoDimensionalMap::from_fn(height, width, |x, y| map[(width - 1 - y, x)])
}

/// Exactly undo `rotate`: turn 90° clockwise.
pub fn unrotate<P: Default + Copy>(map: &TwoDimensionalMap<P>) -> TwoDimensionalMap<P> {
    let (width, height) = map.dimensions();
    TwoDimensionalMap::from_fn(height, width, |x, y| map[(y, height - 1 - x)])
}
