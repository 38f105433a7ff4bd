//! Image loading and normalization.

use std::path::Path;

use image::{ImageReader, RgbImage};
use log::debug;

use crate::error::{Error, Result};

/// Load the file at `path` and decode it as a three-channel RGB image.
///
/// Any encoding the `image` crate recognizes is accepted; alpha and palette
/// information is discarded during the RGB conversion, so downstream stages
/// always see exactly three channels per pixel.
///
/// # Errors
/// [`Error::FileNotFound`] when the path cannot be opened or read;
/// [`Error::UnsupportedFormat`] when the bytes do not decode as an image;
/// [`Error::InvalidImage`] when the decoded image has a zero dimension.
pub fn decode_image(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path).map_err(|source| Error::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = reader
        .with_guessed_format()
        .map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| Error::UnsupportedFormat {
            path: path.to_path_buf(),
            source,
        })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    debug!("decoded {} as {width}x{height} rgb", path.display());

    if width == 0 || height == 0 {
        return Err(Error::InvalidImage {
            reason: format!("degenerate dimensions {width}x{height}"),
        });
    }

    Ok(rgb)
}
