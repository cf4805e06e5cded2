use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use std::path::Path;

use super::traits::ClassifierError;

/// Decodes an image file and normalizes it to 8-bit RGB.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, ClassifierError> {
    let image = image::open(path)?;
    Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
}

pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, ClassifierError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image.to_rgb8())
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}
