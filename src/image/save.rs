//! Image saving utilities.

use std::fs;
use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::error::{Error, Result};

/// Save a binary image as a PNG file.
///
/// Missing parent directories are created first. The file is always PNG
/// encoded, whatever extension the path carries.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image cannot
/// be written.
pub fn save_binary_image<P: AsRef<Path>>(path: P, image: &GrayImage) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::ImageSave {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Wrote {}x{} PNG", image.width(), image.height());

    Ok(())
}
