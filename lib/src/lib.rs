//! im2ascii - image to ASCII art text converter
//!
//! Converts a raster image into a text rendering: each pixel's luminance is
//! the mean of its RGB channels, the grid is rescaled to a target character
//! width with an integer aspect correction, and every cell is mapped through
//! a fixed threshold palette into one display character.
//!
//! # Example
//! ```no_run
//! use im2ascii::{RenderConfig, convert_image};
//!
//! let input = image::open("photo.png").unwrap().to_rgb8();
//! let text = convert_image(&input, &RenderConfig::default()).unwrap();
//! println!("{text}");
//! ```

pub mod config;
pub mod decode;
pub mod error;
pub mod grayscale;
pub mod palette;
pub mod processor;
pub mod render;
pub mod resize;

// Re-export main types for convenience
pub use config::{DEFAULT_WIDTH, RenderConfig};
pub use error::{Error, Result};
pub use palette::Palette;
pub use processor::{convert_file, convert_image, default_output_path};
