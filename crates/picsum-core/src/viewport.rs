/// A rectangle in surface pixel coordinates.
///
/// Fitting never mutates the receiver; every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewPort {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ViewPort {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Viewport of the given size anchored at the origin.
    pub fn of_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Place content of `width`x`height` inside this viewport.
    ///
    /// Content that fits is centered at its natural size. Larger content is
    /// scaled down, preserving aspect ratio, until it fills one axis and is
    /// centered along the other.
    pub fn fit(&self, width: i32, height: i32) -> ViewPort {
        if width <= 0 || height <= 0 {
            return self.centered(0, 0);
        }
        if self.can_fit(width, height) {
            return self.centered(width, height);
        }
        if self.should_fit_width(width, height) {
            self.fit_to_width(width, height)
        } else {
            self.fit_to_height(width, height)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn can_fit(&self, width: i32, height: i32) -> bool {
        width <= self.width && height <= self.height
    }

    fn should_fit_width(&self, width: i32, height: i32) -> bool {
        ratio(width, height) > ratio(self.width, self.height)
    }

    fn fit_to_width(&self, width: i32, height: i32) -> ViewPort {
        let new_height = scale(self.width, height, width);
        ViewPort::new(0, self.y_center_for(new_height), self.width, new_height)
    }

    fn fit_to_height(&self, width: i32, height: i32) -> ViewPort {
        let new_width = scale(self.height, width, height);
        ViewPort::new(self.x_center_for(new_width), 0, new_width, self.height)
    }

    fn centered(&self, width: i32, height: i32) -> ViewPort {
        ViewPort::new(self.x_center_for(width), self.y_center_for(height), width, height)
    }

    fn x_center_for(&self, width: i32) -> i32 {
        (self.width - width) / 2
    }

    fn y_center_for(&self, height: i32) -> i32 {
        (self.height - height) / 2
    }
}

fn ratio(width: i32, height: i32) -> f64 {
    width as f64 / height as f64
}

/// `a * b / c` with a 64-bit intermediate, truncated toward zero.
fn scale(a: i32, b: i32, c: i32) -> i32 {
    (a as i64 * b as i64 / c as i64) as i32
}
