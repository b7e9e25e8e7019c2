use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use crate::display::{ImageDisplay, OnClick};
use crate::io::loader::ImageLoader;
use crate::picture::Picture;

/// Loads a sequence into an [`ImageDisplay`] and wires its navigation
/// controls to step through the sequence.
pub struct ImagePresenter<D: ImageDisplay + 'static> {
    display: Rc<RefCell<D>>,
    current: Rc<RefCell<Picture>>,
}

impl<D: ImageDisplay + 'static> ImagePresenter<D> {
    pub fn new(display: Rc<RefCell<D>>) -> Self {
        Self {
            display,
            current: Rc::new(RefCell::new(Picture::Empty)),
        }
    }

    /// The picture most recently handed to the display.
    pub fn current(&self) -> Picture {
        self.current.borrow().clone()
    }

    /// Reset the display, show the loader's first picture and bind
    /// forward/backward navigation.
    ///
    /// A failed load or an empty sequence leaves the display reset with no
    /// bindings.
    pub fn show_with(&self, loader: &dyn ImageLoader) {
        self.display.borrow_mut().reset();
        *self.current.borrow_mut() = Picture::Empty;

        let first = match loader.load() {
            Ok(picture) => picture,
            Err(e) => {
                warn!("No pictures to show: {e}");
                return;
            }
        };
        if first.is_empty() {
            info!("Loader returned an empty sequence");
            return;
        }

        info!(count = first.len(), "Showing picture sequence");
        show(&self.display, &self.current, first);

        let forward = self.navigation(Picture::next);
        let backward = self.navigation(Picture::previous);
        let mut display = self.display.borrow_mut();
        display.set_forward_listener(forward);
        display.set_backward_listener(backward);
    }

    /// Listener that replaces the current picture with `step(current)`.
    ///
    /// Holds the display weakly since the display owns the listener.
    fn navigation(&self, step: fn(&Picture) -> Picture) -> OnClick {
        let display: Weak<RefCell<D>> = Rc::downgrade(&self.display);
        let current = Rc::clone(&self.current);
        Rc::new(move || {
            let Some(display) = display.upgrade() else {
                return;
            };
            let target = step(&current.borrow());
            show(&display, &current, target);
        })
    }
}

fn show<D: ImageDisplay>(display: &RefCell<D>, current: &RefCell<Picture>, picture: Picture) {
    debug!(index = ?picture.index(), "show picture");
    *current.borrow_mut() = picture.clone();
    display.borrow_mut().show(picture);
}
