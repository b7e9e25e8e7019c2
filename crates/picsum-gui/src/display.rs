use tracing::warn;

use picsum_core::display::{DisplayState, ImageDisplay, OnClick};
use picsum_core::picture::Picture;

use crate::convert::image_to_color_image;

/// egui-backed display surface. Decodes the current picture once into a
/// texture and redraws from it every frame.
pub struct EguiImageDisplay {
    ctx: egui::Context,
    state: DisplayState,
    texture: Option<egui::TextureHandle>,
    texture_stale: bool,
}

impl EguiImageDisplay {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            state: DisplayState::new(),
            texture: None,
            texture_stale: false,
        }
    }

    pub fn current(&self) -> &Picture {
        self.state.current()
    }

    /// Texture for the current picture, or `None` when there is nothing to
    /// draw (empty picture or undecodable bytes).
    pub fn texture(&mut self) -> Option<&egui::TextureHandle> {
        if self.texture_stale {
            self.texture_stale = false;
            self.texture = self.load_texture();
        }
        self.texture.as_ref()
    }

    fn load_texture(&self) -> Option<egui::TextureHandle> {
        match self.state.current().content() {
            Ok(Some(image)) => Some(self.ctx.load_texture(
                "picture",
                image_to_color_image(&image),
                egui::TextureOptions::LINEAR,
            )),
            Ok(None) => None,
            Err(e) => {
                warn!(index = ?self.state.current().index(), "Cannot draw picture: {e}");
                None
            }
        }
    }
}

impl ImageDisplay for EguiImageDisplay {
    fn show(&mut self, picture: Picture) {
        if self.state.show(picture) {
            self.texture = None;
            self.texture_stale = true;
        }
        self.ctx.request_repaint();
    }

    fn reset(&mut self) {
        self.state.reset();
        self.texture = None;
        self.texture_stale = false;
        self.ctx.request_repaint();
    }

    fn set_forward_listener(&mut self, listener: OnClick) {
        self.state.set_forward_listener(listener);
    }

    fn set_backward_listener(&mut self, listener: OnClick) {
        self.state.set_backward_listener(listener);
    }

    fn forward_listener(&self) -> OnClick {
        self.state.forward_listener()
    }

    fn backward_listener(&self) -> OnClick {
        self.state.backward_listener()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};
    use picsum_core::picture::PictureSequence;

    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        RgbImage::from_pixel(width, height, Rgb([200, 100, 50]))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn display() -> EguiImageDisplay {
        EguiImageDisplay::new(egui::Context::default())
    }

    #[test]
    fn test_empty_picture_has_no_texture() {
        let mut display = display();
        assert!(display.texture().is_none());

        display.show(Picture::Empty);
        assert!(display.texture().is_none());
    }

    #[test]
    fn test_valid_picture_has_natural_size_texture() {
        let seq = PictureSequence::new(vec![png(7, 3)]);
        let mut display = display();
        display.show(seq.first());

        let texture = display.texture().expect("texture for decodable picture");
        assert_eq!(texture.size(), [7, 3]);
    }

    #[test]
    fn test_undecodable_picture_draws_nothing() {
        let seq = PictureSequence::new(vec![b"garbage".to_vec()]);
        let mut display = display();
        display.show(seq.first());

        assert!(display.texture().is_none());
        // Failure is not retried on the next frame.
        assert!(display.texture().is_none());
        assert_eq!(display.current(), &seq.first());
    }

    #[test]
    fn test_texture_cached_until_picture_changes() {
        let seq = PictureSequence::new(vec![png(4, 4), png(9, 2)]);
        let mut display = display();
        display.show(seq.first());
        let first_id = display.texture().map(|t| t.id());
        assert_eq!(display.texture().map(|t| t.id()), first_id);

        // Re-showing the same picture keeps the cached texture.
        display.show(seq.first());
        assert_eq!(display.texture().map(|t| t.id()), first_id);

        display.show(seq.first().next());
        let texture = display.texture().expect("texture for second picture");
        assert_eq!(texture.size(), [9, 2]);
        assert_ne!(Some(texture.id()), first_id);
    }

    #[test]
    fn test_reset_clears_texture_and_listeners() {
        let seq = PictureSequence::new(vec![png(2, 2)]);
        let mut display = display();
        display.show(seq.first());
        display.set_forward_listener(std::rc::Rc::new(|| panic!("listener survived reset")));
        assert!(display.texture().is_some());

        display.reset();
        assert!(display.texture().is_none());
        assert_eq!(display.current(), &Picture::Empty);
        (display.forward_listener())();
        (display.backward_listener())();
    }
}
