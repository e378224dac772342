//! Dual-list quadtree for broad-phase overlap checks.
//!
//! Objects go into list A or list B. `execute` then compares A against B,
//! or A against itself when nothing was loaded into B, at every node of the
//! tree and reports each overlapping pair through the registered callbacks.

use crate::collision_detection;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::linked_list::{SlotArena, SlotId, SlotList};
use common::{Body, Collidable, Group, Member, Rectangle, Target};
use std::convert::Infallible;
use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

mod config;
mod execute;
mod insert;
mod node;
mod types;

pub use config::{Config, DEFAULT_DIVISIONS};
pub use types::{EntityId, ListTarget, NodeId, Quadrant};

use types::{InsertionContext, NodeEdges, ObjectEdges, QuadNode, ROOT};

/// Called with every pair that overlaps and passes the process callback.
pub type NotifyCallback<'a, T> = Box<dyn FnMut(&'a T, &'a T) + 'a>;

/// Decides whether an overlapping pair really collided.
pub type ProcessCallback<'a, T> = Box<dyn FnMut(&'a T, &'a T) -> bool + 'a>;

/// One broad-phase pass worth of spatial buckets.
///
/// The tree only borrows its entities; it is meant to be built, loaded,
/// executed and dropped (or destroyed) within a single frame.
pub struct QuadTree<'a, T> {
    config: Config,
    bounds: Rectangle,
    min_size: f32,
    nodes: Vec<QuadNode>,
    slots: SlotArena<EntityId>,
    entities: Vec<&'a T>,
    entity_lookup: FxHashMap<usize, EntityId>,
    use_both_lists: bool,
    notify: Option<NotifyCallback<'a, T>>,
    process: Option<ProcessCallback<'a, T>>,
}
