pub mod body;
pub mod group;
pub mod shapes;

pub use body::{Body, Collidable, CollisionFlags};
pub use group::{Group, Member, Target};
pub use shapes::Rectangle;
