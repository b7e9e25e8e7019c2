use std::fmt;
use std::sync::Arc;

use image::DynamicImage;

use crate::error::Result;
use crate::io::decode::decode_image;

/// An immutable list of encoded images, shared by every [`Picture`] derived
/// from it.
#[derive(Clone)]
pub struct PictureSequence {
    sources: Arc<[Vec<u8>]>,
}

impl PictureSequence {
    pub fn new(sources: Vec<Vec<u8>>) -> Self {
        Self {
            sources: sources.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Picture at index 0, or [`Picture::Empty`] for an empty sequence.
    pub fn first(&self) -> Picture {
        self.picture_at(0)
    }

    /// Picture at `index`, wrapped into range.
    pub fn picture_at(&self, index: usize) -> Picture {
        if self.is_empty() {
            return Picture::Empty;
        }
        Picture::At(Slot {
            sequence: self.clone(),
            index: index % self.len(),
        })
    }

    fn bytes(&self, index: usize) -> Option<&[u8]> {
        self.sources.get(index).map(Vec::as_slice)
    }

    fn same_sources(&self, other: &PictureSequence) -> bool {
        Arc::ptr_eq(&self.sources, &other.sources)
    }
}

impl Default for PictureSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for PictureSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PictureSequence")
            .field("len", &self.len())
            .finish()
    }
}

/// One navigable element of a circular [`PictureSequence`].
///
/// `Empty` stands for "nothing to show": it has no content and navigating
/// from it always yields `Empty` again.
#[derive(Clone, Debug, Default)]
pub enum Picture {
    #[default]
    Empty,
    At(Slot),
}

/// Position inside a non-empty sequence. Only [`PictureSequence`] builds
/// these, so `index < len` and `len >= 1` always hold.
#[derive(Clone, Debug)]
pub struct Slot {
    sequence: PictureSequence,
    index: usize,
}

impl Slot {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn sequence(&self) -> &PictureSequence {
        &self.sequence
    }

    fn step(&self, forward: bool) -> Picture {
        let len = self.sequence.len();
        if len == 0 {
            return Picture::Empty;
        }
        let index = if forward {
            (self.index + 1) % len
        } else {
            (self.index % len + len - 1) % len
        };
        self.sequence.picture_at(index)
    }
}

impl Picture {
    /// Decode the image at this position. `Empty` yields `Ok(None)`.
    ///
    /// Nothing is cached; every call decodes the stored bytes again.
    pub fn content(&self) -> Result<Option<DynamicImage>> {
        match self {
            Picture::Empty => Ok(None),
            Picture::At(slot) => match slot.sequence.bytes(slot.index) {
                Some(bytes) => decode_image(bytes).map(Some),
                None => Ok(None),
            },
        }
    }

    pub fn next(&self) -> Picture {
        match self {
            Picture::Empty => Picture::Empty,
            Picture::At(slot) => slot.step(true),
        }
    }

    pub fn previous(&self) -> Picture {
        match self {
            Picture::Empty => Picture::Empty,
            Picture::At(slot) => slot.step(false),
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Picture::Empty => None,
            Picture::At(slot) => Some(slot.index),
        }
    }

    /// Size of the backing sequence.
    pub fn len(&self) -> usize {
        match self {
            Picture::Empty => 0,
            Picture::At(slot) => slot.sequence.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Picture::Empty)
    }
}

impl PartialEq for Picture {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Picture::Empty, Picture::Empty) => true,
            (Picture::At(a), Picture::At(b)) => {
                a.index == b.index && a.sequence.same_sources(&b.sequence)
            }
            _ => false,
        }
    }
}

impl Eq for Picture {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(sequence: PictureSequence, index: usize) -> Picture {
        Picture::At(Slot { sequence, index })
    }

    #[test]
    fn test_out_of_range_slot_has_no_content() {
        let picture = slot(PictureSequence::new(vec![vec![1]]), 5);
        assert!(picture.content().unwrap().is_none());
        assert_eq!(picture.next().index(), Some(0));
        assert_eq!(picture.previous().index(), Some(0));
    }

    #[test]
    fn test_slot_over_empty_sequence_navigates_to_empty() {
        let picture = slot(PictureSequence::empty(), 0);
        assert_eq!(picture.next(), Picture::Empty);
        assert_eq!(picture.previous(), Picture::Empty);
        assert!(picture.content().unwrap().is_none());
    }
}
