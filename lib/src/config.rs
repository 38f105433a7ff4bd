use crate::error::{Error, Result};
use crate::palette::Palette;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 256;

/// Configuration for a single conversion.
///
/// Built once per invocation and passed explicitly through the pipeline;
/// nothing here is process-wide state.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output width in characters; the row count is derived from it.
    pub target_width: u32,
    /// Luminance-to-glyph table.
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_WIDTH,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    /// Configuration with the given output width and the standard palette.
    pub fn with_width(target_width: u32) -> Self {
        Self {
            target_width,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.target_width == 0 {
            return Err(Error::InvalidArgument {
                reason: "target width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
