// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  Columns come off first, one seam at a
//! time, then rows.  The energy, costs and seam are rebuilt from the
//! already shrunken image before every removal.

use crate::error::{CarveError, Result};
use crate::flipper::{rotate, unrotate};
use crate::pixels::ColorMap;
use crate::seameditor::{remove_vertical_seam, OriginalSeam, SeamHistory, ShiftMap};
use crate::seamfinder::{ForwardEnergy, SeamFinder};
use log::{debug, info};
use std::convert::TryFrom;

/// The size to carve down to.  Axes where the target is not smaller
/// than the image are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    /// Validate a requested size.  Negative values are rejected;
    /// anything too large for a `u32` simply means "keep".
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Ok(TargetSize {
            width: dimension("width", width)?,
            height: dimension("height", height)?,
        })
    }
}

/// Read one target dimension from text.  A string of digits too long
/// for any integer type is still a non-negative size, so it means
/// "keep" like any other oversized value.
pub fn parse_dimension(axis: &'static str, text: &str) -> Result<u32> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(value) => dimension(axis, value),
        Err(_) => {
            let digits = text.strip_prefix('+').unwrap_or(text);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(u32::MAX)
            } else {
                Err(CarveError::InvalidDimensions {
                    axis,
                    value: text.to_string(),
                })
            }
        }
    }
}

fn dimension(axis: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(CarveError::InvalidDimensions {
            axis,
            value: value.to_string(),
        });
    }
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

/// The result of a carve: the resized image, and every removed seam in
/// the coordinates of the image the carve started from.
#[derive(Debug, Clone)]
pub struct Carving {
    pub image: ColorMap,
    pub seams: SeamHistory,
}

// Which dimension the next seam comes out of.  A `bool` would do, but
// this reads much more clearly in the log.
#[derive(Debug, PartialEq, Copy, Clone)]
enum Carve {
    Width,
    Height,
}

// Everything that changes while carving.  The column shift map is
// indexed by original row, which holds because no row is removed
// until every column is done.  The row shift map is indexed by
// rotated coordinates: rotated row `i` is working column
// `width - 1 - i`, and rotated column `j` is working row `j`.
struct CarveState {
    image: ColorMap,
    col_shift: ShiftMap,
    row_shift: ShiftMap,
    seams: SeamHistory,
}

impl CarveState {
    fn new(image: &ColorMap) -> Self {
        let (width, height) = image.dimensions();
        CarveState {
            image: image.clone(),
            col_shift: ShiftMap::new(width, height),
            row_shift: ShiftMap::new(height, width),
            seams: SeamHistory::new(),
        }
    }

    // Rows only start coming off once the width is final, so the row
    // shift map is sized to the image as it is now.
    fn start_rows(&mut self) {
        let (width, height) = self.image.dimensions();
        self.row_shift = ShiftMap::new(height, width);
    }

    fn carve_once<F: SeamFinder>(&mut self, finder: &F, direction: Carve) {
        let seam = match direction {
            Carve::Width => self.remove_column(finder),
            Carve::Height => self.remove_row(finder),
        };
        let (width, height) = self.image.dimensions();
        debug!("{:?} seam removed, now {}x{}", direction, width, height);
        self.seams.push(seam);
    }

    fn remove_column<F: SeamFinder>(&mut self, finder: &F) -> OriginalSeam {
        let seam = finder.find_seam(&self.image);
        let original = self
            .col_shift
            .remove_seam(&seam)
            .into_iter()
            .enumerate()
            .map(|(row, col)| (row as u32, col))
            .collect();
        remove_vertical_seam(&mut self.image, &seam);
        original
    }

    fn remove_row<F: SeamFinder>(&mut self, finder: &F) -> OriginalSeam {
        let width = self.image.width;
        let mut rotated = rotate(&self.image);
        let seam = finder.find_seam(&rotated);

        let original = self
            .row_shift
            .remove_seam(&seam)
            .into_iter()
            .enumerate()
            .map(|(rot_row, row)| {
                let col = width - 1 - rot_row as u32;
                (row, self.col_shift.original(col, row))
            })
            .collect();

        remove_vertical_seam(&mut rotated, &seam);
        self.image = unrotate(&rotated);
        original
    }
}

/// A struct for holding the image to be carved and the seam finder
/// to carve it with.
pub struct SeamCarver<'a, F: SeamFinder = ForwardEnergy> {
    image: &'a ColorMap,
    finder: F,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with an image to be carved, using
    /// forward energy.
    pub fn new(image: &'a ColorMap) -> Self {
        Self::with_finder(image, ForwardEnergy)
    }
}

impl<'a, F: SeamFinder> SeamCarver<'a, F> {
    pub fn with_finder(image: &'a ColorMap, finder: F) -> Self {
        SeamCarver { image, finder }
    }

    /// Given a target size, repeatedly carve seams out of a copy of the
    /// image until it fits.  The source image is never modified.
    pub fn carve(&self, target: TargetSize) -> Carving {
        let (width, height) = self.image.dimensions();
        let columns = width.saturating_sub(target.width);
        let rows = height.saturating_sub(target.height);
        info!(
            "carving {}x{} to {}x{}: {} columns, {} rows",
            width,
            height,
            width - columns,
            height - rows,
            columns,
            rows
        );

        let mut state = CarveState::new(self.image);
        for _ in 0..columns {
            state.carve_once(&self.finder, Carve::Width);
        }
        state.start_rows();
        for _ in 0..rows {
            state.carve_once(&self.finder, Carve::Height);
        }

        info!("removed {} seams", state.seams.len());
        Carving {
            image: state.image,
            seams: state.seams,
        }
    }
}

/// Carve `image` down to `target` with forward energy.
pub fn seamcarve(image: &ColorMap, target: TargetSize) -> Carving {
    SeamCarver::new(image).carve(target)
}
