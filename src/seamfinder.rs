// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam extraction
//!
//! Backtrack a cumulative cost map from the bottom row to the top,
//! producing one column index per row.

use crate::forward_energy::calculate_cost;
use crate::pixels::ColorMap;
use crate::twodmap::TwoDimensionalMap;
use itertools::Itertools;
use std::cmp::{min, Ordering};

/// A top-to-bottom seam: one column index per row.  Adjacent entries
/// never differ by more than one.
pub type Seam = Vec<u32>;

/// This trait defines how we will get seams out of an image.  It's a
/// primitive interface, just enough to make room for multiple cost
/// models.  Horizontal seams are found by handing the finder a
/// rotated image, so there is only one direction to ask for.
pub trait SeamFinder {
    /// Find the cheapest top-to-bottom seam in `image`.
    fn find_seam(&self, image: &ColorMap) -> Seam;
}

/// Seams under the forward energy cost model.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardEnergy;

impl SeamFinder for ForwardEnergy {
    fn find_seam(&self, image: &ColorMap) -> Seam {
        trace_seam(&calculate_cost(image))
    }
}

// Ties go to the lowest index, always.  `position_min_by` returns the
// first of several equal minima.
fn first_minimum(values: &[f64]) -> usize {
    values
        .iter()
        .position_min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(0)
}

/// Given a cumulative cost map, return the list of x-coordinates that,
/// when mapped with the range (0..height), give the XY coordinates for
/// each pixel in the seam to be removed.
pub fn trace_seam(cost: &TwoDimensionalMap<f64>) -> Seam {
    let (width, height) = cost.dimensions();
    if width == 0 || height == 0 {
        return Seam::new();
    }

    let mut seam = vec![0; height as usize];
    // Find the x coordinate of the bottommost seam with the least cost.
    let mut col = first_minimum(cost.row(height - 1)) as u32;
    seam[(height - 1) as usize] = col;

    // Working upwards, only the three pixels above the current one can
    // continue the seam.
    for y in (0..height - 1).rev() {
        let lo = cq!(col == 0, 0, col - 1);
        let hi = min(col + 2, width);
        col = lo + first_minimum(&cost.row(y)[lo as usize..hi as usize]) as u32;
        seam[y as usize] = col;
    }
    seam
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 1.0, 9.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn costs(width: u32, height: u32, values: &[f64]) -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_vec(width, height, values.to_vec()).unwrap()
    }

    fn assert_connected(seam: &[u32], width: u32) {
        assert!(seam.iter().all(|&c| c < width));
        for pair in seam.windows(2) {
            assert!((i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1);
        }
    }

    #[test]
    fn cost_grid_to_vertical_seam() {
        let seam = trace_seam(&costs(5, 4, &COST_DATA));
        assert_eq!(seam, vec![2, 3, 4, 3]);
    }

    #[test]
    fn ties_go_to_the_lowest_column() {
        let seam = trace_seam(&costs(4, 2, &[1.0, 1.0, 1.0, 1.0, 3.0, 2.0, 2.0, 2.0]));
        assert_eq!(seam, vec![0, 1]);
    }

    #[test]
    fn window_is_clipped_at_the_edges() {
        let seam = trace_seam(&costs(3, 3, &[5.0, 5.0, 0.0, 5.0, 5.0, 0.0, 0.0, 5.0, 5.0]));
        // Row 2 picks column 0; the column-2 zeros above are out of reach.
        assert_eq!(seam, vec![0, 0, 0]);
    }

    #[test]
    fn seams_are_connected_and_in_range() {
        let image = ColorMap::from_fn(11, 9, |x, y| {
            let v = f64::from((x * 131 + y * 71 + x * y * 7) % 256);
            [v, 255.0 - v, f64::from((x + y) % 3) * 60.0]
        });
        let seam = ForwardEnergy.find_seam(&image);
        assert_eq!(seam.len(), 9);
        assert_connected(&seam, 11);
    }

    #[test]
    fn single_column_seam() {
        let seam = trace_seam(&costs(1, 3, &[4.0, 2.0, 1.0]));
        assert_eq!(seam, vec![0, 0, 0]);
    }

    #[test]
    fn empty_map_gives_empty_seam() {
        assert!(trace_seam(&TwoDimensionalMap::new(0, 4)).is_empty());
        assert!(trace_seam(&TwoDimensionalMap::new(4, 0)).is_empty());
    }
}
