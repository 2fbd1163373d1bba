//! Main pipeline: load, threshold, save, preview.

use std::path::{Path, PathBuf};

use ::image::{DynamicImage, GrayImage, RgbImage};

use crate::error::{Error, Result};
use crate::image::{self, MAX_DISPLAY_HEIGHT, MAX_DISPLAY_WIDTH};
use crate::preview;

use super::threshold;

/// Configuration for the binarization pipeline.
///
/// The threshold itself is fixed at [`threshold::CUTOFF`] and is not part of
/// the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to show the original and binary images after saving.
    pub preview: bool,

    /// Maximum preview width in pixels.
    pub max_display_width: u32,

    /// Maximum preview height in pixels.
    pub max_display_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview: true,
            max_display_width: MAX_DISPLAY_WIDTH,
            max_display_height: MAX_DISPLAY_HEIGHT,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a display bound is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_display_width == 0 {
            return Err(Error::InvalidParameter {
                name: "max_display_width".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.max_display_height == 0 {
            return Err(Error::InvalidParameter {
                name: "max_display_height".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Images produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct Binarized {
    /// The decoded input image.
    pub original: RgbImage,

    /// The thresholded image, same dimensions as `original`.
    pub binary: GrayImage,

    /// Where `binary` was written.
    pub output_path: PathBuf,
}

/// Converts one color image into a saved black-and-white image.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing pipeline with config: {config:?}");

        Ok(Self { config })
    }

    /// Binarize the image at `input_path` and save it to `output_path`.
    ///
    /// When preview is enabled this blocks until a key is pressed in one of
    /// the preview windows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageLoad`] if the input is missing or unreadable, in
    /// which case nothing is written. Other errors come from saving or
    /// previewing.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<Binarized> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Input image path: {}", input_path.display());

        let original = image::load_color_image(input_path)?;
        tracing::info!("Image loaded successfully.");

        let binary = threshold::binarize_color(&original);
        tracing::info!("Thresholding applied.");

        image::save_binary_image(output_path, &binary)?;
        tracing::info!("Binary image saved at: {}", output_path.display());

        let result = Binarized {
            original,
            binary,
            output_path: output_path.to_path_buf(),
        };

        if self.config.preview {
            self.preview(&result)?;
        }

        Ok(result)
    }

    fn preview(&self, result: &Binarized) -> Result<()> {
        // The preview needs owned dynamic images; the saved grids stay untouched
        let original = DynamicImage::ImageRgb8(result.original.clone());
        let binary = DynamicImage::ImageLuma8(result.binary.clone());

        preview::show(
            &original,
            &binary,
            self.config.max_display_width,
            self.config.max_display_height,
        )
    }
}
