// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use failure::Fail;

/// Everything that can stop a carve.  All of them are fatal; nothing
/// here is worth retrying.
#[derive(Debug, Fail)]
pub enum CarveError {
    /// The source image is missing, unreadable, or in a format we
    /// cannot decode.
    #[fail(display = "could not read image {}: {}", path, cause)]
    Decode {
        path: String,
        #[cause]
        cause: image::ImageError,
    },

    /// A target width or height that is negative or not a number.
    #[fail(display = "invalid target {}: {:?}", axis, value)]
    InvalidDimensions { axis: &'static str, value: String },

    /// The output could not be encoded or written.
    #[fail(display = "could not write image {}: {}", path, cause)]
    Encode {
        path: String,
        #[cause]
        cause: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, CarveError>;
