pub mod collision_detection;
pub mod error;
pub mod linked_list;
pub mod overlap;
pub mod quadtree;

pub use common::{Body, Collidable, CollisionFlags, Group, Member, Rectangle, Target};
pub use error::{QuadtreeError, QuadtreeResult};
