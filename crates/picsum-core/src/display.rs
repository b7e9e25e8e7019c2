use std::rc::Rc;

use crate::picture::Picture;

/// Action invoked when a navigation control is clicked.
pub type OnClick = Rc<dyn Fn()>;

pub mod on_click {
    use std::rc::Rc;

    use super::OnClick;

    /// The listener that does nothing.
    pub fn none() -> OnClick {
        Rc::new(|| {})
    }
}

/// A surface that renders one [`Picture`] at a time and exposes two
/// navigation controls.
pub trait ImageDisplay {
    /// Replace the rendered picture and request a redraw.
    fn show(&mut self, picture: Picture);
    /// Back to the unloaded state: no picture, no-op listeners.
    fn reset(&mut self);
    fn set_forward_listener(&mut self, listener: OnClick);
    fn set_backward_listener(&mut self, listener: OnClick);
    fn forward_listener(&self) -> OnClick;
    fn backward_listener(&self) -> OnClick;
}

/// Current picture and listener bindings shared by display implementations.
pub struct DisplayState {
    current: Picture,
    forward: OnClick,
    backward: OnClick,
    bound: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            current: Picture::Empty,
            forward: on_click::none(),
            backward: on_click::none(),
            bound: false,
        }
    }

    pub fn current(&self) -> &Picture {
        &self.current
    }

    /// Returns `false` when `picture` equals the one already shown.
    pub fn show(&mut self, picture: Picture) -> bool {
        if self.current == picture {
            return false;
        }
        self.current = picture;
        true
    }

    pub fn reset(&mut self) {
        self.forward = on_click::none();
        self.backward = on_click::none();
        self.bound = false;
        self.current = Picture::Empty;
    }

    pub fn set_forward_listener(&mut self, listener: OnClick) {
        self.forward = listener;
        self.bound = true;
    }

    pub fn set_backward_listener(&mut self, listener: OnClick) {
        self.backward = listener;
        self.bound = true;
    }

    pub fn forward_listener(&self) -> OnClick {
        Rc::clone(&self.forward)
    }

    pub fn backward_listener(&self) -> OnClick {
        Rc::clone(&self.backward)
    }

    /// Whether navigation listeners are bound (the loaded state).
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
