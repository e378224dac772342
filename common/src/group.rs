/// A container of entities and nested groups.
///
/// Slots are `Option` so a recycled member can be left in place as `None`
/// without shifting the others.
#[derive(Debug, Clone)]
pub struct Group<T> {
    pub exists: bool,
    pub members: Vec<Option<Member<T>>>,
}

#[derive(Debug, Clone)]
pub enum Member<T> {
    Entity(T),
    Group(Group<T>),
}

impl<T> Group<T> {
    pub fn new() -> Self {
        Self {
            exists: true,
            members: Vec::new(),
        }
    }

    pub fn with_members(members: Vec<Option<Member<T>>>) -> Self {
        Self {
            exists: true,
            members,
        }
    }

    pub fn push(&mut self, entity: T) {
        self.members.push(Some(Member::Entity(entity)));
    }

    pub fn push_group(&mut self, group: Group<T>) {
        self.members.push(Some(Member::Group(group)));
    }

    // Slot count, including empty slots
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Clears a slot without shifting later members.
    pub fn remove(&mut self, index: usize) -> Option<Member<T>> {
        self.members.get_mut(index).and_then(Option::take)
    }

    /// Visits every entity reachable through live slots and live nested groups.
    pub fn for_each_entity<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a T),
    {
        for member in self.members.iter().flatten() {
            match member {
                Member::Entity(entity) => f(entity),
                Member::Group(group) if group.exists => group.for_each_entity(f),
                Member::Group(_) => {}
            }
        }
    }
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of whatever is being fed into the tree.
#[derive(Debug)]
pub enum Target<'a, T> {
    Entity(&'a T),
    Group(&'a Group<T>),
}

impl<'a, T> Target<'a, T> {
    /// Same underlying entity or group, compared by address.
    pub fn same_as(&self, other: &Target<'a, T>) -> bool {
        match (self, other) {
            (Target::Entity(a), Target::Entity(b)) => std::ptr::eq(*a, *b),
            (Target::Group(a), Target::Group(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl<'a, T> Clone for Target<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Target<'a, T> {}

impl<'a, T> From<&'a Group<T>> for Target<'a, T> {
    fn from(group: &'a Group<T>) -> Self {
        Target::Group(group)
    }
}

impl<'a, T> From<&'a Member<T>> for Target<'a, T> {
    fn from(member: &'a Member<T>) -> Self {
        match member {
            Member::Entity(entity) => Target::Entity(entity),
            Member::Group(group) => Target::Group(group),
        }
    }
}
