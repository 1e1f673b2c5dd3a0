//! Arena-backed family tree and kinship queries.

use std::collections::{HashMap, HashSet};

use generational_arena::{Arena, Index};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::kinship::Kinship;
use crate::domain::member::Member;

/// What `register_children` does with a name that is already in the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`DomainError::DuplicateMember`], registering nothing from the call.
    #[default]
    Reject,
    /// Last write wins: the name is re-pointed at the new member. The earlier
    /// member stays in the tree but can no longer be looked up by name.
    Replace,
}

/// Family tree owning every member, indexed by unique name.
///
/// Members live in a generational arena and reference each other by
/// [`Index`], so relationship checks compare identity rather than names.
/// The tree only grows: there is no API to remove or re-parent a member.
#[derive(Debug, Clone)]
pub struct FamilyTree {
    arena: Arena<Member>,
    root: Index,
    index: HashMap<String, Index>,
    duplicates: DuplicatePolicy,
}

impl FamilyTree {
    pub fn new(founder: impl Into<String>) -> Self {
        Self::with_policy(founder, DuplicatePolicy::default())
    }

    pub fn with_policy(founder: impl Into<String>, duplicates: DuplicatePolicy) -> Self {
        let founder = founder.into();
        let mut arena = Arena::new();
        let root = arena.insert(Member::new(founder.clone()));
        let mut index = HashMap::new();
        index.insert(founder, root);
        Self {
            arena,
            root,
            index,
            duplicates,
        }
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Attaches `children` to the member called `parent`, in the given order.
    ///
    /// Under [`DuplicatePolicy::Reject`] all names are validated before any
    /// member is created, so a failing call leaves the tree unchanged.
    #[instrument(level = "debug", skip(self, children))]
    pub fn register_children<S: AsRef<str>>(
        &mut self,
        parent: &str,
        children: &[S],
    ) -> DomainResult<()> {
        let parent_idx = self.resolve(parent)?;

        if self.duplicates == DuplicatePolicy::Reject {
            let mut seen = HashSet::new();
            for child in children {
                let child = child.as_ref();
                if self.index.contains_key(child) || !seen.insert(child) {
                    return Err(DomainError::DuplicateMember(child.to_string()));
                }
            }
        }

        for child in children {
            let child = child.as_ref();
            let mut member = Member::new(child);
            member.set_parent(parent_idx);
            let child_idx = self.arena.insert(member);
            if self.index.insert(child.to_string(), child_idx).is_some() {
                debug!("{} re-registered, earlier member shadowed", child);
            }
            self.arena[parent_idx].add_child(child_idx);
            trace!("registered {} under {}", child, parent);
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_parent(&self, parent: &str, child: &str) -> DomainResult<bool> {
        let parent_idx = self.resolve(parent)?;
        let child_idx = self.resolve(child)?;
        Ok(self.arena[child_idx].is_parent_of(parent_idx))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn is_child(&self, child: &str, parent: &str) -> DomainResult<bool> {
        let parent_idx = self.resolve(parent)?;
        let child_idx = self.resolve(child)?;
        Ok(self.arena[parent_idx].has_child(child_idx))
    }

    /// True if `ancestor` appears anywhere above `descendant`. A member is
    /// never its own descendant, and the founder descends from nobody.
    #[instrument(level = "trace", skip(self))]
    pub fn is_descendant(&self, descendant: &str, ancestor: &str) -> DomainResult<bool> {
        let descendant_idx = self.resolve(descendant)?;
        let ancestor_idx = self.resolve(ancestor)?;
        Ok(self.descends_from(descendant_idx, ancestor_idx))
    }

    /// Generations below the founder's children: founder is -1, its children 0.
    #[instrument(level = "trace", skip(self))]
    pub fn distance_to_root(&self, name: &str) -> DomainResult<i32> {
        let idx = self.resolve(name)?;
        Ok(self.distance(idx))
    }

    /// Nearest member that is an ancestor-or-self of both `a` and `b`.
    #[instrument(level = "trace", skip(self))]
    pub fn common_ancestor(&self, a: &str, b: &str) -> DomainResult<&str> {
        let a_idx = self.resolve(a)?;
        let b_idx = self.resolve(b)?;
        let ancestor = self.nearest_common(a_idx, b_idx);
        Ok(self.arena[ancestor].name())
    }

    /// Classifies the kinship between `a` and `b`.
    ///
    /// Same member or direct line: cousin type -1, removal is the difference
    /// in distance to the founder. Otherwise the cousin type counts the
    /// generations between the shallower member and the common ancestor's
    /// children, and removal is the generation gap between the two.
    #[instrument(level = "debug", skip(self))]
    pub fn cousin_classification(&self, a: &str, b: &str) -> DomainResult<Kinship> {
        let a_idx = self.resolve(a)?;
        let b_idx = self.resolve(b)?;
        let a_distance = self.distance(a_idx);
        let b_distance = self.distance(b_idx);

        if a_idx == b_idx || self.descends_from(a_idx, b_idx) || self.descends_from(b_idx, a_idx) {
            let kinship = Kinship::new(Kinship::DIRECT_LINE, a_distance.abs_diff(b_distance));
            debug!(%kinship, "direct line");
            return Ok(kinship);
        }

        let (shallow, deep) = if a_distance < b_distance {
            (a_distance, b_distance)
        } else {
            (b_distance, a_distance)
        };
        let ancestor = self.nearest_common(a_idx, b_idx);
        let cousin_type = shallow - (1 + self.distance(ancestor));
        let kinship = Kinship::new(cousin_type, deep.abs_diff(shallow));
        debug!(%kinship, ancestor = self.arena[ancestor].name(), "collateral");
        Ok(kinship)
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_name(&self) -> &str {
        self.arena[self.root].name()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of members in the tree, including shadowed ones.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Looks up the handle registered under `name`.
    pub fn resolve(&self, name: &str) -> DomainResult<Index> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| DomainError::UnknownMember(name.to_string()))
    }

    pub fn get_member(&self, idx: Index) -> Option<&Member> {
        self.arena.get(idx)
    }

    pub fn parent_of(&self, name: &str) -> DomainResult<Option<&str>> {
        let idx = self.resolve(name)?;
        Ok(self.arena[idx]
            .parent()
            .map(|parent| self.arena[parent].name()))
    }

    pub fn children_of(&self, name: &str) -> DomainResult<Vec<&str>> {
        let idx = self.resolve(name)?;
        Ok(self.arena[idx]
            .children()
            .iter()
            .map(|&child| self.arena[child].name())
            .collect())
    }

    /// `name` followed by each of its ancestors, ending with the founder.
    #[instrument(level = "trace", skip(self))]
    pub fn lineage(&self, name: &str) -> DomainResult<Vec<&str>> {
        let idx = self.resolve(name)?;
        Ok(self.ancestry(idx).map(|i| self.arena[i].name()).collect())
    }

    /// Member names in preorder, children in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(_, member)| member.name()).collect()
    }

    /// Number of generations in the tree; a lone founder has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter()
            .map(|(idx, _)| self.ancestry(idx).count())
            .max()
            .unwrap_or(0)
    }

    /// Names of members without children, in preorder.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, member)| member.children().is_empty())
            .map(|(_, member)| member.name())
            .collect()
    }

    pub fn iter(&self) -> FamilyIter<'_> {
        FamilyIter::new(self)
    }

    fn distance(&self, idx: Index) -> i32 {
        // ancestry includes the member itself, so the founder counts 1
        self.ancestry(idx).count() as i32 - 2
    }

    fn descends_from(&self, descendant: Index, ancestor: Index) -> bool {
        self.ancestry(descendant).skip(1).any(|idx| idx == ancestor)
    }

    fn nearest_common(&self, a: Index, b: Index) -> Index {
        let (mut a, mut b) = (a, b);
        let (mut a_distance, mut b_distance) = (self.distance(a), self.distance(b));
        loop {
            if a == b {
                return a;
            }
            let a_parent = self.arena[a].parent();
            let b_parent = self.arena[b].parent();
            if let (Some(pa), Some(pb)) = (a_parent, b_parent) {
                if pa == pb {
                    return pa;
                }
            }
            let moved = if a_distance < b_distance {
                match b_parent {
                    Some(parent) => {
                        b = parent;
                        b_distance -= 1;
                        true
                    }
                    None => false,
                }
            } else {
                match a_parent {
                    Some(parent) => {
                        a = parent;
                        a_distance -= 1;
                        true
                    }
                    None => false,
                }
            };
            if !moved {
                // only the founder lacks a parent, and it is everyone's ancestor
                return self.root;
            }
        }
    }

    fn ancestry(&self, idx: Index) -> Ancestry<'_> {
        Ancestry {
            tree: self,
            next: Some(idx),
        }
    }
}

/// Walks from a member up through its parents to the founder.
struct Ancestry<'a> {
    tree: &'a FamilyTree,
    next: Option<Index>,
}

impl Iterator for Ancestry<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.arena.get(current).and_then(Member::parent);
        Some(current)
    }
}

/// Preorder traversal over the family, children in registration order.
pub struct FamilyIter<'a> {
    tree: &'a FamilyTree,
    stack: Vec<Index>,
}

impl<'a> FamilyIter<'a> {
    fn new(tree: &'a FamilyTree) -> Self {
        Self {
            tree,
            stack: vec![tree.root],
        }
    }
}

impl<'a> Iterator for FamilyIter<'a> {
    type Item = (Index, &'a Member);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(member) = self.tree.arena.get(current) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(member.children().iter().rev());
                return Some((current, member));
            }
        }
        None
    }
}
