use image::DynamicImage;

/// Convert a decoded image to an egui ColorImage (RGBA, unmultiplied).
pub fn image_to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    #[test]
    fn test_rgb_image_becomes_opaque_rgba() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])));
        let color = image_to_color_image(&img);

        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels.len(), 6);
        assert_eq!(color.pixels[0], egui::Color32::from_rgb(10, 20, 30));
    }
}
