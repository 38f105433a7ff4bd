use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::debug;

use crate::config::RenderConfig;
use crate::decode::decode_image;
use crate::error::Result;
use crate::grayscale::to_grayscale;
use crate::render::to_text;
use crate::resize::resize_to_width;

/// Convert a decoded image to its ASCII rendering.
///
/// This runs the full pipeline:
/// 1. Collapse RGB to per-pixel luminance
/// 2. Rescale to the target character grid
/// 3. Map luminance to palette glyphs and assemble rows
///
/// # Arguments
/// * `input` - The decoded RGB image
/// * `config` - Width and palette for the conversion
///
/// # Returns
/// The rendering as a newline-separated string, no trailing newline
pub fn convert_image(input: &RgbImage, config: &RenderConfig) -> Result<String> {
    config.validate()?;

    // Step 1: luminance
    let gray = to_grayscale(input);

    // Step 2: rescale
    let resized = resize_to_width(&gray, config.target_width)?;
    let (width, height) = resized.dimensions();
    debug!(
        "rescaled {}x{} -> {width}x{height}",
        input.width(),
        input.height()
    );

    // Step 3: character mapping
    to_text(&resized, &config.palette)
}

/// Convert the image at `input` and write the text to `output`.
///
/// The rendering is fully materialized before the output path is touched, so
/// a failure in any stage leaves the filesystem unchanged; an existing file
/// at `output` is overwritten only on success.
pub fn convert_file(input: &Path, output: &Path, config: &RenderConfig) -> Result<()> {
    let image = decode_image(input)?;
    let text = convert_image(&image, config)?;
    fs::write(output, text)?;
    Ok(())
}

/// Default output path: the input's file stem with a `.txt` extension,
/// relative to the current working directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("output"));
    let mut name = stem.to_os_string();
    name.push(".txt");
    PathBuf::from(name)
}
