use crate::error::Result;
use crate::picture::{Picture, PictureSequence};

/// Source of the first picture of a freshly loaded sequence.
pub trait ImageLoader {
    fn load(&self) -> Result<Picture>;
}

impl ImageLoader for PictureSequence {
    fn load(&self) -> Result<Picture> {
        Ok(self.first())
    }
}

impl<F> ImageLoader for F
where
    F: Fn() -> Result<Picture>,
{
    fn load(&self) -> Result<Picture> {
        self()
    }
}
