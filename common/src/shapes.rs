use rand::Rng;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    // Finite coordinates and finite, non-negative dimensions
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    // Inclusive on every edge, so a rectangle contains itself
    pub fn contains_rectangle(&self, other: &Rectangle) -> bool {
        self.left() <= other.left()
            && self.right() >= other.right()
            && self.top() <= other.top()
            && self.bottom() >= other.bottom()
    }

    // Open interval test: touching edges do not count as overlap
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let left = f32::min(self.left(), other.left());
        let top = f32::min(self.top(), other.top());
        let right = f32::max(self.right(), other.right());
        let bottom = f32::max(self.bottom(), other.bottom());
        Rectangle {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Random rectangle lying fully inside `self`, with each dimension capped
    /// at the given maximum (and at the room left by the chosen corner).
    pub fn random_inside<R: Rng>(&self, rng: &mut R, max_width: f32, max_height: f32) -> Rectangle {
        let x = safe_randf32(rng, self.left(), self.right());
        let y = safe_randf32(rng, self.top(), self.bottom());
        let width = safe_randf32(rng, 0.0, f32::min(max_width, self.right() - x));
        let height = safe_randf32(rng, 0.0, f32::min(max_height, self.bottom() - y));
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }
}

fn safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
