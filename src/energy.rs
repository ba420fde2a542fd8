// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The raw energy of a pixel is the Scharr approximation of the
//! gradient magnitude: for each colour channel the absolute x and y
//! responses are added, and the channels are summed.  Higher energy
//! means more visually important, so seams avoid it.

use crate::gradient::{gradient_magnitude, SCHARR_X, SCHARR_Y};
use crate::pixels::ColorMap;
use crate::twodmap::TwoDimensionalMap;

/// Compute the energy of every pixel in an image.  The map is always
/// the same shape as the image and never negative.
pub fn calculate_energy(image: &ColorMap) -> TwoDimensionalMap<f64> {
    let mut energy = gradient_magnitude(image, &SCHARR_X);
    let dy = gradient_magnitude(image, &SCHARR_Y);
    for (e, d) in energy.as_mut_slice().iter_mut().zip(dy.as_slice()) {
        *e += d;
    }
    energy
}
