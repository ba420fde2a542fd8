// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by forward-energy seam carving.
//!
//! An image shrinks one seam at a time: the connected top-to-bottom
//! (or left-to-right) path of pixels whose removal introduces the
//! least new edge energy.  Every removed seam is kept, translated back
//! into the coordinates of the source image, so the carve can be
//! drawn over the original afterward.

/// My ternary expression handler.  Rust's ifs are already
/// expressions, but `cargo fmt` breaks them up line-by-line, and the
/// edge cases of the seam carving algorithm read much better on one.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod forward_energy;
pub mod gradient;
pub mod io;
pub mod pixels;
pub mod seamcarver;
pub mod seameditor;
pub mod seamfinder;
pub mod twodmap;

pub use energy::calculate_energy;
pub use error::CarveError;
pub use forward_energy::{calculate_cost, cumulative_cost, NeighborCosts};
pub use pixels::ColorMap;
pub use seamcarver::{parse_dimension, seamcarve, Carving, SeamCarver, TargetSize};
pub use seameditor::{OriginalSeam, SeamHistory, ShiftMap};
pub use seamfinder::{trace_seam, ForwardEnergy, Seam, SeamFinder};
pub use twodmap::TwoDimensionalMap;
