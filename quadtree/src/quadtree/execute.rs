use super::*;

struct OverlapPass<'a, T> {
    notify: Option<NotifyCallback<'a, T>>,
    process: Option<ProcessCallback<'a, T>>,
    seen_pairs: Option<FxHashSet<u64>>,
    pairs_tested: u64,
    pairs_notified: u64,
}

impl<'a, T> OverlapPass<'a, T> {
    fn process(&mut self, a: &'a T, b: &'a T) -> bool {
        match self.process.as_mut() {
            Some(process) => process(a, b),
            None => true,
        }
    }

    fn notify(&mut self, a: &'a T, b: &'a T) {
        self.pairs_notified += 1;
        if let Some(notify) = self.notify.as_mut() {
            notify(a, b);
        }
    }

    // False when the pair was already reported during this pass
    fn first_sighting(&mut self, a: EntityId, b: EntityId, ordered: bool) -> bool {
        let Some(seen) = self.seen_pairs.as_mut() else {
            return true;
        };
        let (first, second) = if ordered || a < b { (a, b) } else { (b, a) };
        let key = (u64::from(first.0) << 32) | u64::from(second.0);
        seen.insert(key)
    }
}

impl<'a, T: Collidable> QuadTree<'a, T> {
    /// Compares the loaded lists at every node and reports overlapping pairs.
    ///
    /// A pair is reported when both entities still exist, both accept
    /// collisions, their swept hulls intersect and the process callback (if
    /// any) returns true. Returns whether any pair was reported.
    pub fn execute(&mut self) -> bool {
        let mut pass = OverlapPass {
            notify: self.notify.take(),
            process: self.process.take(),
            seen_pairs: self.config.dedupe_pairs.then(FxHashSet::default),
            pairs_tested: 0,
            pairs_notified: 0,
        };

        let overlap_processed = !self.nodes.is_empty() && self.execute_node(ROOT, &mut pass);

        debug!(
            nodes = self.nodes.len(),
            pairs_tested = pass.pairs_tested,
            pairs_notified = pass.pairs_notified,
            overlap_processed,
            "quadtree executed"
        );
        self.notify = pass.notify;
        self.process = pass.process;
        overlap_processed
    }

    fn execute_node(&self, node_id: NodeId, pass: &mut OverlapPass<'a, T>) -> bool {
        let node = &self.nodes[node_id.index()];
        let mut overlap_processed = false;

        if !self.slots.is_empty(node.list_a) {
            for (slot, object) in self.slots.iter(node.list_a) {
                // Self-list mode only looks forward, so no pair is seen twice
                let others = if self.use_both_lists {
                    Some(node.list_b.head())
                } else {
                    self.slots.next(slot)
                };
                if self.overlap_node(object, others, pass) {
                    overlap_processed = true;
                }
            }
        }

        for child in node.children.iter().flatten() {
            if self.execute_node(*child, pass) {
                overlap_processed = true;
            }
        }

        overlap_processed
    }

    fn overlap_node(
        &self,
        object: EntityId,
        others: Option<SlotId>,
        pass: &mut OverlapPass<'a, T>,
    ) -> bool {
        let entity = self.entities[object.index()];
        let mut overlap_processed = false;

        for (_, other) in self.slots.iter_from(others) {
            if !entity.exists() || !entity.body().allow_collisions.allows_any() {
                break;
            }
            if other == object {
                continue;
            }
            let check = self.entities[other.index()];
            if !check.exists() || !check.body().allow_collisions.allows_any() {
                continue;
            }

            pass.pairs_tested += 1;
            if !collision_detection::hull_intersection(entity.body(), check.body()) {
                continue;
            }
            if !pass.first_sighting(object, other, self.use_both_lists) {
                continue;
            }
            if pass.process(entity, check) {
                overlap_processed = true;
                pass.notify(entity, check);
            }
        }

        overlap_processed
    }
}
