//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult, RgbImage};

use crate::error::{Error, Result};

/// Load an image from disk as an 8-bit, 3-channel color grid.
///
/// The EXIF orientation tag, if present, is applied so the grid is upright.
/// Grayscale inputs are expanded to three channels and any alpha channel is
/// dropped, so every decodable image comes back in the same layout.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file does not exist or cannot be
/// decoded as an image.
pub fn load_color_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = decode_upright(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Decoded {}x{} {:?} image",
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}

/// Decode `path` and rotate or flip it as its orientation metadata says.
fn decode_upright(path: &Path) -> ImageResult<DynamicImage> {
    let mut decoder = ImageReader::open(path)?.into_decoder()?;
    let orientation = decoder.orientation()?;

    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::jpeg::JpegEncoder;
    use image::{GrayImage, Luma, Rgb};

    /// A JPEG whose APP1 segment carries EXIF `Orientation` = `value`.
    fn jpeg_with_orientation(img: &RgbImage, value: u8) -> Vec<u8> {
        let mut jpeg = Vec::new();
        img.write_with_encoder(JpegEncoder::new_with_quality(&mut jpeg, 95))
            .unwrap();

        // Big-endian TIFF header, one IFD entry: tag 0x0112, SHORT, count 1
        let mut exif = b"Exif\0\0MM\0\x2a\0\0\0\x08\0\x01".to_vec();
        exif.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        exif.extend_from_slice(&[0x00, value, 0x00, 0x00]);
        exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let len = u16::try_from(exif.len() + 2).unwrap();
        let mut app1 = vec![0xFF, 0xE1];
        app1.extend_from_slice(&len.to_be_bytes());
        app1.extend_from_slice(&exif);

        // Right after SOI
        jpeg.splice(2..2, app1);
        jpeg
    }

    fn dark_left_bright_right() -> RgbImage {
        RgbImage::from_fn(40, 20, |x, _| {
            if x < 20 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    #[test]
    fn test_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_color_image(dir.path().join("pumpkins.jpg")).unwrap_err();

        assert!(err.is_file_error());
        assert!(err.to_string().contains("pumpkins.jpg"));
    }

    #[test]
    fn test_undecodable_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(load_color_image(&path).unwrap_err().is_file_error());
    }

    #[test]
    fn test_color_image_keeps_dimensions_and_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");
        let img = RgbImage::from_fn(7, 5, |x, y| Rgb([x as u8 * 30, y as u8 * 40, 200]));
        img.save(&path).unwrap();

        let loaded = load_color_image(&path).unwrap();

        assert_eq!(loaded.dimensions(), (7, 5));
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_gray_image_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(3, 2, Luma([90])).save(&path).unwrap();

        let loaded = load_color_image(&path).unwrap();

        assert!(loaded.pixels().all(|p| *p == Rgb([90, 90, 90])));
    }

    #[test]
    fn test_exif_rotation_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pumpkins.jpg");
        std::fs::write(&path, jpeg_with_orientation(&dark_left_bright_right(), 6)).unwrap();

        let loaded = load_color_image(&path).unwrap();

        // Rotated 90 degrees clockwise: the dark left half ends up on top
        assert_eq!(loaded.dimensions(), (20, 40));
        assert!(loaded.get_pixel(10, 5)[0] < 64);
        assert!(loaded.get_pixel(10, 35)[0] > 192);
    }

    #[test]
    fn test_untagged_jpeg_keeps_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.jpg");
        dark_left_bright_right().save(&path).unwrap();

        let loaded = load_color_image(&path).unwrap();

        assert_eq!(loaded.dimensions(), (40, 20));
        assert!(loaded.get_pixel(5, 10)[0] < 64);
        assert!(loaded.get_pixel(35, 10)[0] > 192);
    }
}
