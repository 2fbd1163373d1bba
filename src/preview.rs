//! Blocking preview windows for the original and binary images.
//!
//! Windows are drawn with OpenCV `highgui` when the `preview` feature is
//! enabled. Without it, [`show`] only logs a warning, so headless builds never
//! touch a window system.

use image::DynamicImage;

use crate::error::Result;
use crate::image::resize_for_display;

/// Title of the window showing the input image.
pub const ORIGINAL_WINDOW: &str = "Original Image";

/// Title of the window showing the thresholded image.
pub const BINARY_WINDOW: &str = "Binary Image";

/// Show both images, scaled down to fit `max_width` x `max_height`, and
/// block until a key is pressed. All windows are closed afterwards.
///
/// # Errors
///
/// Returns an error if the window system fails.
pub fn show(
    original: &DynamicImage,
    binary: &DynamicImage,
    max_width: u32,
    max_height: u32,
) -> Result<()> {
    let original = resize_for_display(original, max_width, max_height);
    let binary = resize_for_display(binary, max_width, max_height);

    backend::show(&[(ORIGINAL_WINDOW, &*original), (BINARY_WINDOW, &*binary)])
}

#[cfg(feature = "preview")]
mod backend {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat};
    use opencv::core::{Mat, Vector};
    use opencv::{highgui, imgcodecs};

    use crate::error::{Error, Result};

    pub fn show(windows: &[(&str, &DynamicImage)]) -> Result<()> {
        for &(title, image) in windows {
            let mat = to_mat(image)?;
            highgui::named_window(title, highgui::WINDOW_AUTOSIZE).map_err(display_error)?;
            highgui::imshow(title, &mat).map_err(display_error)?;
        }

        tracing::info!("Press any key in a preview window to exit.");
        highgui::wait_key(0).map_err(display_error)?;
        highgui::destroy_all_windows().map_err(display_error)
    }

    /// Hand the pixels to OpenCV through an in-memory PNG so it decodes them
    /// into its own channel order.
    fn to_mat(image: &DynamicImage) -> Result<Mat> {
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|source| Error::ImageEncode { source })?;

        imgcodecs::imdecode(&Vector::<u8>::from_slice(&png), imgcodecs::IMREAD_UNCHANGED)
            .map_err(display_error)
    }

    #[allow(clippy::needless_pass_by_value)]
    fn display_error(source: opencv::Error) -> Error {
        Error::Display { source }
    }
}

#[cfg(not(feature = "preview"))]
mod backend {
    use image::DynamicImage;

    use crate::error::Result;

    #[allow(clippy::unnecessary_wraps)]
    pub fn show(windows: &[(&str, &DynamicImage)]) -> Result<()> {
        tracing::warn!(
            "Preview support not compiled in (build with --features preview); skipping {} window(s)",
            windows.len()
        );
        Ok(())
    }
}
