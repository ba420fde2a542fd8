// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixel conversion
//!
//! The carver works on a wide, floating point copy of the image so
//! that no gradient or cost computation ever clips.  Pixels come in
//! through any ImageRS `GenericImageView` and go back out as an 8-bit
//! RGB buffer.

use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Primitive, Rgb, RgbImage};
use num_traits::NumCast;

/// Three colour channels, in whatever order the source used.
pub type Rgb64 = [f64; 3];

/// The working image: one `Rgb64` per pixel.
pub type ColorMap = TwoDimensionalMap<Rgb64>;

// Luma and luma-alpha pixels carry their grey level in channel 0;
// anything wider is read as RGB with any trailing channels ignored.
#[inline]
fn widen<P, S>(p: &P) -> Rgb64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let channels = p.channels();
    let cast = |c: Option<&S>| -> f64 { c.and_then(|&c| NumCast::from(c)).unwrap_or_default() };
    if channels.len() < 3 {
        let grey = cast(channels.first());
        [grey, grey, grey]
    } else {
        [cast(channels.get(0)), cast(channels.get(1)), cast(channels.get(2))]
    }
}

#[inline]
fn narrow(c: f64) -> u8 {
    c.round().max(0.0).min(255.0) as u8
}

/// Copy any image into a `ColorMap`.  Greyscale sources are expanded
/// to three identical channels; alpha is dropped.
pub fn from_image<I, P, S>(image: &I) -> ColorMap
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    ColorMap::from_fn(width, height, |x, y| widen(&image.get_pixel(x, y)))
}

/// Cast a `ColorMap` back down to 8 bits per channel.
pub fn to_rgb_image(map: &ColorMap) -> RgbImage {
    RgbImage::from_fn(map.width, map.height, |x, y| {
        let [r, g, b] = map[(x, y)];
        Rgb([narrow(r), narrow(g), narrow(b)])
    })
}
