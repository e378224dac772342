use super::*;

fn validate_region(bounds: &Rectangle) -> QuadtreeResult<()> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(QuadtreeError::invalid_geometry(bounds))
    }
}

impl<'a, T: Collidable> QuadTree<'a, T> {
    pub fn new(bounds: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    /// Builds a root node. The minimum node size is derived from this root
    /// once and shared by every node below it.
    pub fn new_with_config(bounds: Rectangle, config: Config) -> QuadtreeResult<Self> {
        validate_region(&bounds)?;
        let min_size = config.min_size_for(&bounds);
        if !min_size.is_finite() || min_size <= 0.0 {
            return Err(QuadtreeError::DegenerateSubdivision { min_size });
        }
        let mut tree = Self::empty(config, bounds, min_size);
        tree.push_node(bounds, None, 0);
        Ok(tree)
    }

    /// Builds a root that starts out holding copies of `parent`'s root
    /// lists. The minimum node size and config are inherited, callbacks are not.
    pub fn with_parent(bounds: Rectangle, parent: &QuadTree<'a, T>) -> QuadtreeResult<Self> {
        validate_region(&bounds)?;
        let mut tree = Self::empty(parent.config.clone(), bounds, parent.min_size);
        tree.entities = parent.entities.clone();
        tree.entity_lookup = parent.entity_lookup.clone();
        tree.push_node(bounds, None, 0);
        if let Some(parent_root) = parent.nodes.get(ROOT.index()) {
            let root = &mut tree.nodes[ROOT.index()];
            for (_, object) in parent.slots.iter(parent_root.list_a) {
                tree.slots.append(&mut root.list_a, object);
            }
            for (_, object) in parent.slots.iter(parent_root.list_b) {
                tree.slots.append(&mut root.list_b, object);
            }
        }
        Ok(tree)
    }

    fn empty(config: Config, bounds: Rectangle, min_size: f32) -> Self {
        Self {
            config,
            bounds,
            min_size,
            nodes: Vec::new(),
            slots: SlotArena::new(),
            entities: Vec::new(),
            entity_lookup: FxHashMap::default(),
            use_both_lists: false,
            notify: None,
            process: None,
        }
    }

    // A child starts with a copy of everything its parent holds so far
    pub(crate) fn push_node(&mut self, region: Rectangle, parent: Option<NodeId>, depth: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut list_a = self.slots.create();
        let mut list_b = self.slots.create();
        if let Some(parent) = parent {
            let parent = &self.nodes[parent.index()];
            let (parent_a, parent_b) = (parent.list_a, parent.list_b);
            self.slots.copy_into(parent_a, &mut list_a);
            self.slots.copy_into(parent_b, &mut list_b);
        }
        let can_subdivide = region.width > self.min_size || region.height > self.min_size;
        trace!(
            node = id.0,
            depth,
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            can_subdivide,
            "quadtree node created"
        );
        self.nodes.push(QuadNode {
            region,
            edges: NodeEdges::from_rect(&region),
            can_subdivide,
            depth,
            children: [None; 4],
            list_a,
            list_b,
        });
        id
    }

    /// Drops every list, child node, entity reference and callback.
    ///
    /// The tree is left as an empty root over the same bounds, so calling
    /// this again, or calling `execute` afterwards, is harmless.
    pub fn destroy(&mut self) {
        if !self.nodes.is_empty() {
            self.destroy_node(ROOT);
        }
        debug!(
            nodes = self.nodes.len(),
            slots = self.slots.slot_count(),
            entities = self.entities.len(),
            "quadtree destroyed"
        );
        self.nodes.clear();
        self.slots.clear();
        self.entities.clear();
        self.entity_lookup.clear();
        self.notify = None;
        self.process = None;
        self.use_both_lists = false;
        self.push_node(self.bounds, None, 0);
    }

    fn destroy_node(&mut self, node_id: NodeId) {
        let node = &self.nodes[node_id.index()];
        let (list_a, list_b, children) = (node.list_a, node.list_b, node.children);
        self.slots.destroy(list_a);
        self.slots.destroy(list_b);
        for child in children.into_iter().flatten() {
            self.destroy_node(child);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    pub fn use_both_lists(&self) -> bool {
        self.use_both_lists
    }

    /// (nodes, list slots, distinct entities)
    pub fn storage_counts(&self) -> (usize, usize, usize) {
        (self.nodes.len(), self.slots.slot_count(), self.entities.len())
    }

    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|node| node.depth).max().unwrap_or(0)
    }

    /// Number of entries in a node's list, duplicates included.
    pub fn list_len(&self, node_id: NodeId, list: ListTarget) -> usize {
        self.nodes
            .get(node_id.index())
            .map_or(0, |node| self.slots.len(node.list(list)))
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn child(&self, node_id: NodeId, quadrant: Quadrant) -> Option<NodeId> {
        self.nodes
            .get(node_id.index())
            .and_then(|node| node.child(quadrant))
    }

    pub fn node_region(&self, node_id: NodeId) -> Option<Rectangle> {
        self.nodes.get(node_id.index()).map(|node| node.region)
    }

    // Retrieve all node bounding boxes, parents before children
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        if !self.nodes.is_empty() {
            self.node_bounding_boxes(ROOT, bounding_boxes);
        }
    }

    fn node_bounding_boxes(&self, node_id: NodeId, bounding_boxes: &mut Vec<Rectangle>) {
        let node = &self.nodes[node_id.index()];
        bounding_boxes.push(node.region);
        for child in node.children.iter().flatten() {
            self.node_bounding_boxes(*child, bounding_boxes);
        }
    }
}
