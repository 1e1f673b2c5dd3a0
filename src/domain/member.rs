//! A single individual in the family tree.

use std::fmt;

use generational_arena::Index;

/// Tree node in the arena-based family hierarchy.
///
/// Parent and children are arena handles owned by [`FamilyTree`](super::FamilyTree);
/// a member never owns its relatives. Handles compare by identity, so two
/// members with the same name are still distinct.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    /// Index of parent member in the arena, None for the founder
    parent: Option<Index>,
    /// Indices of child members, in the order they were registered
    children: Vec<Index>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    /// Assigns the parent handle. Only called once, when the member is created
    /// as somebody's child.
    pub fn set_parent(&mut self, parent: Index) {
        debug_assert!(self.parent.is_none(), "parent of {} already set", self.name);
        self.parent = Some(parent);
    }

    pub fn is_parent_of(&self, candidate: Index) -> bool {
        self.parent == Some(candidate)
    }

    /// Appends a child handle. No duplicate check: the tree creates each child once.
    pub fn add_child(&mut self, child: Index) {
        self.children.push(child);
    }

    pub fn has_child(&self, candidate: Index) -> bool {
        self.children.contains(&candidate)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
