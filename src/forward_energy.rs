// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the cumulative cost map of an image using the Avidan &
//! Shamir "Forward Energy" algorithm.
//!
//! Removing a pixel joins its left and right neighbours, and
//! removing a diagonal step of a seam additionally joins a pixel with
//! the one below it.  Forward energy charges each path for the new
//! edges those joins create, rather than just for the energy of the
//! pixels it removes.

use crate::energy::calculate_energy;
use crate::gradient::{gradient_magnitude, KERNEL_X, KERNEL_Y_LEFT, KERNEL_Y_RIGHT};
use crate::pixels::ColorMap;
use crate::twodmap::TwoDimensionalMap;

/// The three neighbour-join costs, computed once over the whole
/// image before the dynamic programming pass.
#[derive(Debug)]
pub struct NeighborCosts {
    /// Cost of joining the left and right neighbours of a pixel.
    pub across: TwoDimensionalMap<f64>,
    /// Extra cost when the seam steps down and to the right.
    pub left: TwoDimensionalMap<f64>,
    /// Extra cost when the seam steps down and to the left.
    pub right: TwoDimensionalMap<f64>,
}

impl NeighborCosts {
    pub fn new(image: &ColorMap) -> Self {
        NeighborCosts {
            across: gradient_magnitude(image, &KERNEL_X),
            left: gradient_magnitude(image, &KERNEL_Y_LEFT),
            right: gradient_magnitude(image, &KERNEL_Y_RIGHT),
        }
    }
}

// 1. The first row costs exactly its own energy.
// 2. Any pixel below it can be reached from three parents above:
//
//                      ⎧ M(x−1,y−1) + CX(x−1,y−1) + CL(x−1,y−1)
// M(x,y) = E(x,y) + min⎨ M(x,y−1)   + CX(x,y−1)
//                      ⎩ M(x+1,y−1) + CX(x+1,y−1) + CR(x+1,y−1)
//
// 3. The left parent does not exist in the first column, nor the
//    right parent in the last.

/// Turn a raw energy map into the forward-energy cumulative cost map.
/// The two maps must be the same shape as the image the costs were
/// taken from.
pub fn cumulative_cost(energy: &TwoDimensionalMap<f64>, costs: &NeighborCosts) -> TwoDimensionalMap<f64> {
    let (width, height) = energy.dimensions();
    let mut output = energy.clone();
    if width == 0 {
        return output;
    }
    let max_width = width - 1;

    for y in 1..height {
        let up = y - 1;
        for x in 0..width {
            let mut best = output[(x, up)] + costs.across[(x, up)];
            if x > 0 {
                let from_left = output[(x - 1, up)] + costs.across[(x - 1, up)] + costs.left[(x - 1, up)];
                best = best.min(from_left);
            }
            if x < max_width {
                let from_right =
                    output[(x + 1, up)] + costs.across[(x + 1, up)] + costs.right[(x + 1, up)];
                best = best.min(from_right);
            }
            output[(x, y)] += best;
        }
    }
    output
}

/// A convenience wrapper: energy, neighbour costs, and the cumulative
/// pass, all from the same image.
pub fn calculate_cost(image: &ColorMap) -> TwoDimensionalMap<f64> {
    let energy = calculate_energy(image);
    let costs = NeighborCosts::new(image);
    cumulative_cost(&energy, &costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn map(width: u32, height: u32, values: &[f64]) -> TwoDimensionalMap<f64> {
        TwoDimensionalMap::from_vec(width, height, values.to_vec()).unwrap()
    }

    fn flat_costs(width: u32, height: u32) -> NeighborCosts {
        NeighborCosts {
            across: TwoDimensionalMap::new(width, height),
            left: TwoDimensionalMap::new(width, height),
            right: TwoDimensionalMap::new(width, height),
        }
    }

    #[test]
    fn first_row_is_raw_energy() {
        let energy = map(3, 2, &[5.0, 1.0, 7.0, 0.0, 0.0, 0.0]);
        let cost = cumulative_cost(&energy, &flat_costs(3, 2));
        assert_eq!(cost.row(0), energy.row(0));
    }

    #[test]
    fn without_join_costs_it_is_plain_accumulation() {
        let energy = map(3, 3, &[5.0, 1.0, 7.0, 2.0, 9.0, 3.0, 4.0, 4.0, 4.0]);
        let cost = cumulative_cost(&energy, &flat_costs(3, 3));
        assert_eq!(cost.row(1), &[3.0, 10.0, 4.0]);
        assert_eq!(cost.row(2), &[7.0, 7.0, 8.0]);
    }

    #[test]
    fn join_costs_are_charged_by_direction() {
        let energy = map(3, 2, &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let costs = NeighborCosts {
            across: map(3, 2, &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0]),
            left: map(3, 2, &[10.0, 20.0, 30.0, 0.0, 0.0, 0.0]),
            right: map(3, 2, &[100.0, 200.0, 300.0, 0.0, 0.0, 0.0]),
        };
        let cost = cumulative_cost(&energy, &costs);
        // Column 0: straight up (1) or up-right (2 + 200).
        assert_relative_eq!(cost[(0, 1)], 1.0);
        // Column 1: up-left (1 + 10), straight up (2), up-right (3 + 300).
        assert_relative_eq!(cost[(1, 1)], 2.0);
        // Column 2: up-left (2 + 20) or straight up (3).
        assert_relative_eq!(cost[(2, 1)], 3.0);
    }

    #[test]
    fn diagonal_parent_wins_when_cheaper() {
        let energy = map(2, 2, &[0.0, 50.0, 1.0, 1.0]);
        let costs = NeighborCosts {
            across: map(2, 2, &[0.0, 0.0, 0.0, 0.0]),
            left: map(2, 2, &[4.0, 0.0, 0.0, 0.0]),
            right: map(2, 2, &[0.0, 0.0, 0.0, 0.0]),
        };
        let cost = cumulative_cost(&energy, &costs);
        assert_relative_eq!(cost[(1, 1)], 1.0 + 4.0);
        assert_relative_eq!(cost[(0, 1)], 1.0);
    }

    #[test]
    fn single_column_only_goes_straight_down() {
        let image = ColorMap::from_fn(1, 4, |_, y| [f64::from(y) * 3.0; 3]);
        let cost = calculate_cost(&image);
        assert_eq!(cost.dimensions(), (1, 4));
        let energy = calculate_energy(&image);
        let mut running = 0.0;
        for y in 0..4 {
            running += energy[(0, y)];
            assert_relative_eq!(cost[(0, y)], running);
        }
    }

    #[test]
    fn costs_are_non_decreasing_down_any_column_minimum() {
        let image = ColorMap::from_fn(8, 6, |x, y| {
            let v = f64::from((x * 53 + y * 29) % 97);
            [v, v * 0.5, 97.0 - v]
        });
        let cost = calculate_cost(&image);
        let min_of = |y| cost.row(y).iter().cloned().fold(f64::INFINITY, f64::min);
        for y in 1..6 {
            assert!(min_of(y) >= min_of(y - 1));
        }
    }
}
