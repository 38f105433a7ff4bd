//! Aspect-corrected rescaling of the grayscale grid.

use image::{GrayImage, imageops};

use crate::error::{Error, Result};

/// Integer aspect correction factor: `ceil(width / height)`, never below 1.
///
/// This is deliberately not a true aspect ratio. Character cells are taller
/// than they are wide, and the crude integer correction is the compensation
/// the output format is built around; changing it changes every produced
/// file, so it is preserved exactly. (A geometrically faithful version would
/// scale height/width by a cell-aspect factor instead.)
///
/// # Errors
/// [`Error::InvalidImage`] when `height` is zero.
pub fn aspect_ratio(width: u32, height: u32) -> Result<u32> {
    if height == 0 {
        return Err(Error::InvalidImage {
            reason: "image height is zero".to_string(),
        });
    }
    Ok(width.div_ceil(height).max(1))
}

/// Rescale to `target_width` columns; the row count is derived, not settable.
///
/// `computed_height = target_width * aspect_ratio(w, h)`. Resampling uses
/// triangle (linear) filtering, which is deterministic and averages over the
/// source footprint when downscaling.
///
/// # Errors
/// [`Error::InvalidArgument`] when `target_width` is zero;
/// [`Error::InvalidImage`] when the input has a zero dimension or the
/// derived height overflows.
pub fn resize_to_width(img: &GrayImage, target_width: u32) -> Result<GrayImage> {
    if target_width == 0 {
        return Err(Error::InvalidArgument {
            reason: "target width must be at least 1".to_string(),
        });
    }

    let (width, height) = img.dimensions();
    let ratio = aspect_ratio(width, height)?;
    let computed_height = target_width
        .checked_mul(ratio)
        .ok_or_else(|| Error::InvalidImage {
            reason: format!("output height overflows: {target_width} * {ratio}"),
        })?;

    Ok(imageops::resize(
        img,
        target_width,
        computed_height,
        imageops::FilterType::Triangle,
    ))
}
