use image::DynamicImage;

use crate::error::Result;

/// Decode an encoded image (JPEG, PNG, ...) from memory, guessing the format
/// from its magic bytes.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}
