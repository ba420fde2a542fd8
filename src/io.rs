// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reading and writing image files
//!
//! Decoding and encoding are left entirely to ImageRS; the format is
//! chosen from the file extension.  Output goes through a temporary
//! file beside the destination, which is only moved into place once
//! the encoder has finished, so a failed write leaves nothing behind.

use crate::dump::{energy_to_image, seams_to_image};
use crate::error::{CarveError, Result};
use crate::pixels::{from_image, to_rgb_image, ColorMap};
use crate::seameditor::OriginalSeam;
use crate::twodmap::TwoDimensionalMap;
use image::{DynamicImage, ImageError, ImageFormat};
use log::debug;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

fn describe(path: &Path) -> String {
    path.display().to_string()
}

/// Read any supported image into a `ColorMap`.
pub fn decode<Q: AsRef<Path>>(path: Q) -> Result<ColorMap> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|cause| CarveError::Decode {
        path: describe(path),
        cause,
    })?;
    debug!("decoded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(from_image(&image.to_rgb8()))
}

fn write_atomically(image: &DynamicImage, path: &Path) -> std::result::Result<(), ImageError> {
    let format = ImageFormat::from_path(path)?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        image.write_to(&mut writer, format)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| ImageError::IoError(e.error))?;
    Ok(())
}

/// Write an image, choosing the format from the extension.
pub fn save<Q: AsRef<Path>>(image: &DynamicImage, path: Q) -> Result<()> {
    let path = path.as_ref();
    write_atomically(image, path).map_err(|cause| CarveError::Encode {
        path: describe(path),
        cause,
    })?;
    debug!("wrote {}", path.display());
    Ok(())
}

/// Cast a working image down to 8 bits per channel and write it.
pub fn encode<Q: AsRef<Path>>(image: &ColorMap, path: Q) -> Result<()> {
    save(&DynamicImage::ImageRgb8(to_rgb_image(image)), path)
}

/// Write the original image with every removed seam painted over.
pub fn save_seams<Q: AsRef<Path>>(original: &ColorMap, seams: &[OriginalSeam], path: Q) -> Result<()> {
    let painted = seams_to_image(&to_rgb_image(original), seams);
    save(&DynamicImage::ImageRgb8(painted), path)
}

/// Write an energy map as a greyscale picture.
pub fn save_energy<Q: AsRef<Path>>(energy: &TwoDimensionalMap<f64>, path: Q) -> Result<()> {
    save(&DynamicImage::ImageLuma8(energy_to_image(energy)), path)
}
