use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use picsum_core::display::{DisplayState, ImageDisplay, OnClick};
use picsum_core::picture::{Picture, PictureSequence};

/// Encode a solid-color PNG of the given size.
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// A sequence of `n` small PNGs; image `i` is `(i + 1)` pixels wide.
pub fn png_sequence(n: usize) -> PictureSequence {
    let images = (0..n)
        .map(|i| png_bytes(i as u32 + 1, 2, [(i * 40) as u8, 0, 0]))
        .collect();
    PictureSequence::new(images)
}

/// Headless display that records every picture it is asked to show.
#[derive(Default)]
pub struct RecordingDisplay {
    pub state: DisplayState,
    pub shown: Vec<Picture>,
    pub resets: usize,
}

impl RecordingDisplay {
    pub fn current_index(&self) -> Option<usize> {
        self.state.current().index()
    }
}

impl ImageDisplay for RecordingDisplay {
    fn show(&mut self, picture: Picture) {
        self.shown.push(picture.clone());
        self.state.show(picture);
    }

    fn reset(&mut self) {
        self.resets += 1;
        self.state.reset();
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
