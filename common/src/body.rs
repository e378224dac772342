use crate::shapes::Rectangle;
use bitflags::bitflags;

bitflags! {
    /// Directions from which a body accepts collisions.
    ///
    /// Bit values match the engine's save data, so they must not be renumbered.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionFlags: u32 {
        const LEFT = 0x0001;
        const RIGHT = 0x0010;
        const UP = 0x0100;
        const DOWN = 0x1000;
        const CEILING = Self::UP.bits();
        const FLOOR = Self::DOWN.bits();
        const WALL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ANY = Self::LEFT.bits() | Self::RIGHT.bits() | Self::UP.bits() | Self::DOWN.bits();
    }
}

impl CollisionFlags {
    pub const NONE: CollisionFlags = CollisionFlags::empty();

    /// Non-zero mask. An empty mask keeps the body out of the broad phase.
    pub fn allows_any(&self) -> bool {
        !self.is_empty()
    }
}

impl Default for CollisionFlags {
    fn default() -> Self {
        CollisionFlags::ANY
    }
}

/// Physical footprint of an entity for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub bounds: Rectangle,
    pub last_x: f32,
    pub last_y: f32,
    pub allow_collisions: CollisionFlags,
}

impl Body {
    /// A body that has not moved since the last frame.
    pub fn new(bounds: Rectangle, allow_collisions: CollisionFlags) -> Self {
        Self {
            bounds,
            last_x: bounds.x,
            last_y: bounds.y,
            allow_collisions,
        }
    }

    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Rectangle::new(x, y, width, height), CollisionFlags::ANY)
    }

    /// Moves the body, remembering the previous position for hull checks.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.last_x = self.bounds.x;
        self.last_y = self.bounds.y;
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn delta_x(&self) -> f32 {
        self.bounds.x - self.last_x
    }

    pub fn delta_y(&self) -> f32 {
        self.bounds.y - self.last_y
    }

    /// Area swept between the last position and the current one.
    pub fn hull(&self) -> Rectangle {
        Rectangle {
            x: f32::min(self.bounds.x, self.last_x),
            y: f32::min(self.bounds.y, self.last_y),
            width: self.bounds.width + self.delta_x().abs(),
            height: self.bounds.height + self.delta_y().abs(),
        }
    }
}

/// Anything the broad phase can bucket and pair up.
///
/// Both methods are re-read during `execute`, so implementers backed by
/// interior mutability see flag changes made by earlier notifications.
/// The address of the returned `Body` identifies the entity: two references
/// that resolve to the same body are the same entity.
pub trait Collidable {
    fn exists(&self) -> bool;
    fn body(&self) -> &Body;
}

impl<T: Collidable + ?Sized> Collidable for &T {
    fn exists(&self) -> bool {
        (**self).exists()
    }

    fn body(&self) -> &Body {
        (**self).body()
    }
}
