// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pictures of the carver's intermediate products, for looking at.

use crate::seameditor::OriginalSeam;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, Rgb, RgbImage};

/// The colour removed seams are painted with.
pub const SEAM_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Render an energy (or cost) map as greyscale, scaled so the largest
/// value is white.  A map with no energy at all comes out black.
pub fn energy_to_image(energy: &TwoDimensionalMap<f64>) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    GrayImage::from_fn(energy.width, energy.height, |x, y| {
        let e = energy[(x, y)];
        let c = if factor > 0.0 { e * 255.0 / factor } else { 0.0 };
        Luma([c.round().max(0.0).min(255.0) as u8])
    })
}

/// Paint every seam pixel onto a copy of the original image.  Any
/// coordinate that falls outside the image is skipped.
pub fn seams_to_image(original: &RgbImage, seams: &[OriginalSeam]) -> RgbImage {
    let mut out = original.clone();
    let (width, height) = out.dimensions();
    for &(row, col) in seams.iter().flatten() {
        if row < height && col < width {
            out.put_pixel(col, row, SEAM_COLOR);
        }
    }
    out
}
