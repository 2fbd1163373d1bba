//! Downscaling for on-screen preview.

use std::borrow::Cow;

use image::{DynamicImage, GenericImageView};

/// Shrink an image so it fits within `max_width` x `max_height`.
///
/// Both axes are scaled by the same factor, the smaller of the two ratios
/// needed to fit, so the aspect ratio is kept. New sizes are truncated toward
/// zero. Images that already fit are returned borrowed and untouched.
///
/// The result is meant for display only; it is never written to disk.
#[must_use]
pub fn resize_for_display(
    image: &DynamicImage,
    max_width: u32,
    max_height: u32,
) -> Cow<'_, DynamicImage> {
    let (width, height) = image.dimensions();

    if width <= max_width && height <= max_height {
        return Cow::Borrowed(image);
    }

    let (new_width, new_height) = fit_within(width, height, max_width, max_height);
    tracing::debug!("Resizing {width}x{height} to {new_width}x{new_height} for display");

    // Area averaging: each output pixel is the mean of the source pixels it covers
    Cow::Owned(image.thumbnail_exact(new_width, new_height))
}

/// Target size for an image of `width` x `height` scaled to fit the bounds.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (f64::from(max_height) / f64::from(height))
        .min(f64::from(max_width) / f64::from(width));

    // Safe: scale < 1, so both products fit in u32
    let new_width = (f64::from(width) * scale) as u32;
    let new_height = (f64::from(height) * scale) as u32;

    (new_width.max(1), new_height.max(1))
}
