use super::*;

impl<'a, T: Collidable> QuadTree<'a, T> {
    /// Loads `a` into list A and, if given, `b` into list B, then registers
    /// the callbacks used by `execute`.
    ///
    /// Without `b` list A is compared against itself. The callbacks capture
    /// whatever context they need. Every entity is validated before anything
    /// is inserted, so on error the tree is left exactly as it was.
    pub fn load(
        &mut self,
        a: Target<'a, T>,
        b: Option<Target<'a, T>>,
        notify: Option<NotifyCallback<'a, T>>,
        process: Option<ProcessCallback<'a, T>>,
    ) -> QuadtreeResult<()> {
        walk_target(a, &mut validate_entity::<T>)?;
        if let Some(b) = b {
            walk_target(b, &mut validate_entity::<T>)?;
        }

        self.insert_target(a, ListTarget::A);
        match b {
            Some(b) => {
                self.insert_target(b, ListTarget::B);
                self.use_both_lists = true;
            }
            None => self.use_both_lists = false,
        }
        self.notify = notify;
        self.process = process;

        debug!(
            entities = self.entities.len(),
            nodes = self.nodes.len(),
            use_both_lists = self.use_both_lists,
            "quadtree loaded"
        );
        Ok(())
    }

    /// Adds an entity, or every applicable entity of a group, to one list.
    /// Groups themselves are never stored. Nothing is inserted if any entity
    /// fails validation.
    pub fn add(&mut self, target: Target<'a, T>, list: ListTarget) -> QuadtreeResult<()> {
        walk_target(target, &mut validate_entity::<T>)?;
        self.insert_target(target, list);
        Ok(())
    }

    fn insert_target(&mut self, target: Target<'a, T>, list: ListTarget) {
        let _: Result<(), Infallible> = walk_target(target, &mut |entity| {
            self.insert_entity(entity, list);
            Ok(())
        });
    }

    // Callers have already run `validate_entity` over this entity
    fn insert_entity(&mut self, entity: &'a T, list: ListTarget) {
        if !accepts_collisions(entity) {
            return;
        }
        let body = entity.body();
        let ctx = InsertionContext {
            object: self.intern(entity),
            edges: ObjectEdges::from_rect(&body.bounds),
            list,
        };
        self.add_object(ROOT, &ctx);
    }

    // Keyed by the address of the body the entity resolves to, so the same
    // entity reached through different references maps to one id
    fn intern(&mut self, entity: &'a T) -> EntityId {
        let key = entity.body() as *const Body as usize;
        if let Some(&id) = self.entity_lookup.get(&key) {
            return id;
        }
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        self.entity_lookup.insert(key, id);
        id
    }

    fn add_object(&mut self, node_id: NodeId, ctx: &InsertionContext) {
        let node = &self.nodes[node_id.index()];
        let edges = node.edges;

        // Leaf, or the object covers this whole node: store it here
        if !node.can_subdivide || ctx.edges.covers(&edges) {
            self.add_to_list(node_id, ctx);
            return;
        }

        if let Some(quadrant) = Quadrant::ALL
            .into_iter()
            .find(|quadrant| edges.quadrant_holds(*quadrant, &ctx.edges))
        {
            let child = self.child_or_create(node_id, quadrant);
            self.add_object(child, ctx);
            return;
        }

        // Straddles a midpoint: goes into every quadrant it touches
        let mut entered = false;
        for quadrant in Quadrant::ALL {
            if edges.quadrant_overlaps(quadrant, &ctx.edges) {
                let child = self.child_or_create(node_id, quadrant);
                self.add_object(child, ctx);
                entered = true;
            }
        }

        // A zero-width or zero-height object lying on a midpoint touches no
        // quadrant interior, so it stays here and reaches every descendant
        if !entered {
            self.add_to_list(node_id, ctx);
        }
    }

    fn child_or_create(&mut self, node_id: NodeId, quadrant: Quadrant) -> NodeId {
        let node = &self.nodes[node_id.index()];
        if let Some(child) = node.child(quadrant) {
            return child;
        }
        let region = node.edges.quadrant_rect(quadrant);
        let depth = node.depth + 1;
        let child = self.push_node(region, Some(node_id), depth);
        self.nodes[node_id.index()].children[quadrant.index()] = Some(child);
        child
    }

    // Existing children were seeded from this node's lists, so they receive
    // the object too. No new children are created here.
    fn add_to_list(&mut self, node_id: NodeId, ctx: &InsertionContext) {
        let node = &mut self.nodes[node_id.index()];
        self.slots.append(node.list_mut(ctx.list), ctx.object);
        if !node.can_subdivide {
            return;
        }
        let children = node.children;
        for child in children.into_iter().flatten() {
            self.add_to_list(child, ctx);
        }
    }
}

fn accepts_collisions<T: Collidable>(entity: &T) -> bool {
    entity.exists() && entity.body().allow_collisions.allows_any()
}

fn validate_entity<T: Collidable>(entity: &T) -> QuadtreeResult<()> {
    let bounds = &entity.body().bounds;
    if accepts_collisions(entity) && !bounds.is_valid() {
        return Err(QuadtreeError::invalid_geometry(bounds));
    }
    Ok(())
}

// Visits every entity of a target, descending into live nested groups
fn walk_target<'a, T, E, F>(target: Target<'a, T>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&'a T) -> Result<(), E>,
{
    match target {
        Target::Entity(entity) => visit(entity),
        Target::Group(group) => walk_group(group, visit),
    }
}

fn walk_group<'a, T, E, F>(group: &'a Group<T>, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&'a T) -> Result<(), E>,
{
    for member in group.members.iter().flatten() {
        match member {
            Member::Entity(entity) => visit(entity)?,
            Member::Group(nested) if nested.exists => walk_group(nested, visit)?,
            Member::Group(_) => {}
        }
    }
    Ok(())
}
