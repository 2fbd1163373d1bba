//! Grayscale conversion and fixed-cutoff binarization.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::map_colors;

/// Intensities at or above this value become [`HIGH`]; the rest become [`LOW`].
pub const CUTOFF: u8 = 128;

/// Output value for pixels below [`CUTOFF`].
pub const LOW: u8 = 0;

/// Output value for pixels at or above [`CUTOFF`].
pub const HIGH: u8 = 255;

// BT.601 luma weights in 14-bit fixed point; they sum to 1 << 14.
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);

/// Luma of a single color pixel: `0.299 R + 0.587 G + 0.114 B`, rounded.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let weighted =
        u32::from(r) * R_WEIGHT + u32::from(g) * G_WEIGHT + u32::from(b) * B_WEIGHT + ROUND;
    // Safe: weights sum to 1 << SHIFT, so the shifted value is at most 255
    (weighted >> SHIFT) as u8
}

/// Map a single intensity to [`LOW`] or [`HIGH`].
#[inline]
#[must_use]
pub const fn binarize_value(intensity: u8) -> u8 {
    if intensity >= CUTOFF {
        HIGH
    } else {
        LOW
    }
}

/// Collapse a color image to one luminance channel.
#[must_use]
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    map_colors(image, |p| Luma([luma(p)]))
}

/// Threshold a grayscale image at [`CUTOFF`].
#[must_use]
pub fn binarize(image: &GrayImage) -> GrayImage {
    map_colors(image, |Luma([v])| Luma([binarize_value(v)]))
}

/// Grayscale conversion followed by thresholding.
#[must_use]
pub fn binarize_color(image: &RgbImage) -> GrayImage {
    binarize(&to_grayscale(image))
}
