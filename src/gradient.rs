// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Directional gradients
//!
//! Every scalar field the carver needs is the response of some fixed
//! 3x3 kernel, taken independently on each colour channel, with the
//! absolute values summed across the channels.  The kernel is applied
//! as a correlation (it is not flipped), and the border is reflected
//! without repeating the edge pixel, so that column -1 reads column 1
//! and column `w` reads column `w - 2`.

use crate::pixels::ColorMap;
use crate::twodmap::TwoDimensionalMap;

/// A 3x3 kernel, indexed `[row][column]`.
pub type Kernel = [[f64; 3]; 3];

/// The horizontal difference across a pixel: the new neighbour pair
/// created when that pixel is removed from its row.
pub const KERNEL_X: Kernel = [[0.0, 0.0, 0.0], [-1.0, 0.0, 1.0], [0.0, 0.0, 0.0]];

/// Difference between a pixel's right neighbour and the pixel below it.
pub const KERNEL_Y_LEFT: Kernel = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, -1.0, 0.0]];

/// Difference between a pixel's left neighbour and the pixel below it.
pub const KERNEL_Y_RIGHT: Kernel = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]];

pub const SCHARR_X: Kernel = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];

pub const SCHARR_Y: Kernel = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

// Reflect-101 on a single step past either edge.  An axis one pixel
// long has nothing to reflect onto, so it reads itself.
#[inline]
fn reflect(i: i64, n: u32) -> u32 {
    let n = i64::from(n);
    let r = cq!(i < 0, -i, cq!(i >= n, 2 * n - 2 - i, i));
    cq!(r < 0 || r >= n, 0, r as u32)
}

// Fill one output row with the channel-summed absolute response.
fn fill_row(image: &ColorMap, kernel: &Kernel, y: u32, out: &mut [f64]) {
    let (width, height) = image.dimensions();
    let rows = [
        reflect(i64::from(y) - 1, height),
        y,
        reflect(i64::from(y) + 1, height),
    ];
    for (x, cell) in (0..width).zip(out.iter_mut()) {
        let cols = [
            reflect(i64::from(x) - 1, width),
            x,
            reflect(i64::from(x) + 1, width),
        ];
        let mut response = [0.0f64; 3];
        for (ky, &sy) in rows.iter().enumerate() {
            for (kx, &sx) in cols.iter().enumerate() {
                let weight = kernel[ky][kx];
                if weight == 0.0 {
                    continue;
                }
                let pixel = image[(sx, sy)];
                for (acc, channel) in response.iter_mut().zip(pixel.iter()) {
                    *acc += weight * channel;
                }
            }
        }
        *cell = response.iter().map(|r| r.abs()).sum();
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_rows(image: &ColorMap, kernel: &Kernel, out: &mut [f64]) {
    let width = image.width as usize;
    if width == 0 {
        return;
    }
    for (y, row) in out.chunks_mut(width).enumerate() {
        fill_row(image, kernel, y as u32, row);
    }
}

// The rows are independent of each other, so the output buffer is cut
// into one band of whole rows per CPU and each band is filled on its
// own scoped thread.
#[cfg(feature = "threaded")]
fn fill_rows(image: &ColorMap, kernel: &Kernel, out: &mut [f64]) {
    let width = image.width as usize;
    let height = image.height as usize;
    if width == 0 || height == 0 {
        return;
    }
    let workers = num_cpus::get().max(1);
    let band = (height + workers - 1) / workers;
    let result = crossbeam::scope(|scope| {
        for (b, chunk) in out.chunks_mut(band * width).enumerate() {
            scope.spawn(move |_| {
                for (i, row) in chunk.chunks_mut(width).enumerate() {
                    fill_row(image, kernel, (b * band + i) as u32, row);
                }
            });
        }
    });
    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

/// The absolute response of `kernel`, summed over the three channels,
/// at every pixel of `image`.
pub fn gradient_magnitude(image: &ColorMap, kernel: &Kernel) -> TwoDimensionalMap<f64> {
    let mut out = TwoDimensionalMap::new(image.width, image.height);
    fill_rows(image, kernel, out.as_mut_slice());
    out
}

/// The signed response of `kernel` on a single channel.
pub fn filter_channel(image: &ColorMap, channel: usize, kernel: &Kernel) -> TwoDimensionalMap<f64> {
    let (width, height) = image.dimensions();
    TwoDimensionalMap::from_fn(width, height, |x, y| {
        let mut acc = 0.0;
        for ky in 0..3u32 {
            for kx in 0..3u32 {
                let sx = reflect(i64::from(x) + i64::from(kx) - 1, width);
                let sy = reflect(i64::from(y) + i64::from(ky) - 1, height);
                acc += kernel[ky as usize][kx as usize] * image[(sx, sy)][channel];
            }
        }
        acc
    })
}
