//! Append-only singly linked lists living in a shared slot arena.
//!
//! Every list starts with one empty head slot. Appending fills the tail if it
//! is still empty, otherwise links a fresh slot after it, so a slot never
//! holds more than one object.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(u32);

impl SlotId {
    #[inline(always)]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot<T> {
    object: Option<T>,
    next: Option<SlotId>,
}

impl<T> Slot<T> {
    fn empty() -> Self {
        Self {
            object: None,
            next: None,
        }
    }
}

/// Head and tail of one list. Only meaningful for the arena that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotList {
    head: SlotId,
    tail: SlotId,
}

impl SlotList {
    pub fn head(&self) -> SlotId {
        self.head
    }

    pub fn tail(&self) -> SlotId {
        self.tail
    }
}

#[derive(Clone, Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
}

impl<T: Copy> SlotArena<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    fn alloc(&mut self) -> SlotId {
        let id = SlotId(self.slots.len() as u32);
        self.slots.push(Slot::empty());
        id
    }

    /// A list made of a single empty slot.
    pub fn create(&mut self) -> SlotList {
        let slot = self.alloc();
        SlotList {
            head: slot,
            tail: slot,
        }
    }

    pub fn append(&mut self, list: &mut SlotList, object: T) {
        if self.slots[list.tail.index()].object.is_some() {
            let fresh = self.alloc();
            self.slots[list.tail.index()].next = Some(fresh);
            list.tail = fresh;
        }
        self.slots[list.tail.index()].object = Some(object);
    }

    /// Re-appends every object of `source` onto `target`, in order.
    pub fn copy_into(&mut self, source: SlotList, target: &mut SlotList) {
        let mut cursor = Some(source.head);
        while let Some(slot) = cursor {
            let Slot { object, next } = self.slots[slot.index()];
            if let Some(object) = object {
                self.append(target, object);
            }
            cursor = next;
        }
    }

    pub fn object(&self, slot: SlotId) -> Option<T> {
        self.slots.get(slot.index()).and_then(|s| s.object)
    }

    pub fn next(&self, slot: SlotId) -> Option<SlotId> {
        self.slots.get(slot.index()).and_then(|s| s.next)
    }

    pub fn is_empty(&self, list: SlotList) -> bool {
        self.object(list.head).is_none()
    }

    pub fn len(&self, list: SlotList) -> usize {
        self.iter(list).count()
    }

    pub fn iter(&self, list: SlotList) -> SlotIter<'_, T> {
        self.iter_from(Some(list.head))
    }

    /// Walks forward from `start`, yielding each slot with its object.
    pub fn iter_from(&self, start: Option<SlotId>) -> SlotIter<'_, T> {
        SlotIter {
            arena: self,
            cursor: start,
        }
    }

    /// Nulls the object and next link of every slot down the chain.
    /// Running it again on the same list is a no-op.
    pub fn destroy(&mut self, list: SlotList) {
        let mut cursor = Some(list.head);
        while let Some(slot) = cursor {
            match self.slots.get_mut(slot.index()) {
                Some(s) => {
                    s.object = None;
                    cursor = s.next.take();
                }
                None => break,
            }
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    // Invalidates every SlotList handed out so far
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl<T: Copy> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SlotIter<'a, T> {
    arena: &'a SlotArena<T>,
    cursor: Option<SlotId>,
}

impl<'a, T: Copy> Iterator for SlotIter<'a, T> {
    type Item = (SlotId, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.cursor {
            let s = self.arena.slots.get(slot.index())?;
            self.cursor = s.next;
            if let Some(object) = s.object {
                return Some((slot, object));
            }
        }
        None
    }
}
