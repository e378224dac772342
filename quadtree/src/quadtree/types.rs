use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) const ROOT: NodeId = NodeId(0);

/// Which membership list an insertion goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListTarget {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    // Visiting order for list propagation, overlap insertion and execution
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthWest => 0,
            Quadrant::NorthEast => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }
}

/// Edges and midpoints of a node, fixed when the node is created.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeEdges {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
    pub(crate) half_width: f32,
    pub(crate) half_height: f32,
    pub(crate) mid_x: f32,
    pub(crate) mid_y: f32,
}

impl NodeEdges {
    pub(crate) fn from_rect(rect: &Rectangle) -> Self {
        let half_width = rect.width / 2.0;
        let half_height = rect.height / 2.0;
        Self {
            left: rect.x,
            right: rect.x + rect.width,
            top: rect.y,
            bottom: rect.y + rect.height,
            half_width,
            half_height,
            mid_x: rect.x + half_width,
            mid_y: rect.y + half_height,
        }
    }

    // (left, right, top, bottom) of a quadrant
    #[inline(always)]
    fn span(&self, quadrant: Quadrant) -> (f32, f32, f32, f32) {
        match quadrant {
            Quadrant::NorthWest => (self.left, self.mid_x, self.top, self.mid_y),
            Quadrant::NorthEast => (self.mid_x, self.right, self.top, self.mid_y),
            Quadrant::SouthEast => (self.mid_x, self.right, self.mid_y, self.bottom),
            Quadrant::SouthWest => (self.left, self.mid_x, self.mid_y, self.bottom),
        }
    }

    pub(crate) fn quadrant_rect(&self, quadrant: Quadrant) -> Rectangle {
        let (left, _, top, _) = self.span(quadrant);
        Rectangle::new(left, top, self.half_width, self.half_height)
    }

    /// Object lies strictly inside the quadrant. Touching a midpoint or an
    /// outer edge does not count.
    pub(crate) fn quadrant_holds(&self, quadrant: Quadrant, object: &ObjectEdges) -> bool {
        let (left, right, top, bottom) = self.span(quadrant);
        object.left > left && object.right < right && object.top > top && object.bottom < bottom
    }

    pub(crate) fn quadrant_overlaps(&self, quadrant: Quadrant, object: &ObjectEdges) -> bool {
        let (left, right, top, bottom) = self.span(quadrant);
        object.right > left && object.left < right && object.bottom > top && object.top < bottom
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ObjectEdges {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl ObjectEdges {
    pub(crate) fn from_rect(rect: &Rectangle) -> Self {
        Self {
            left: rect.x,
            right: rect.x + rect.width,
            top: rect.y,
            bottom: rect.y + rect.height,
        }
    }

    pub(crate) fn covers(&self, node: &NodeEdges) -> bool {
        node.left >= self.left
            && node.right <= self.right
            && node.top >= self.top
            && node.bottom <= self.bottom
    }
}

/// Everything one insertion carries down the tree.
#[derive(Clone, Copy, Debug)]
pub(crate) struct InsertionContext {
    pub(crate) object: EntityId,
    pub(crate) edges: ObjectEdges,
    pub(crate) list: ListTarget,
}

pub(crate) struct QuadNode {
    pub(crate) region: Rectangle,
    pub(crate) edges: NodeEdges,
    pub(crate) can_subdivide: bool,
    pub(crate) depth: u32,
    pub(crate) children: [Option<NodeId>; 4],
    pub(crate) list_a: SlotList,
    pub(crate) list_b: SlotList,
}

impl QuadNode {
    #[inline(always)]
    pub(crate) fn list(&self, target: ListTarget) -> SlotList {
        match target {
            ListTarget::A => self.list_a,
            ListTarget::B => self.list_b,
        }
    }

    #[inline(always)]
    pub(crate) fn list_mut(&mut self, target: ListTarget) -> &mut SlotList {
        match target {
            ListTarget::A => &mut self.list_a,
            ListTarget::B => &mut self.list_b,
        }
    }

    #[inline(always)]
    pub(crate) fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.children[quadrant.index()]
    }
}
