/*
termtree::Tree is a foreign type, so rendering lives behind a local trait
implemented for FamilyTree rather than as an inherent method on Tree.
 */
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::family::FamilyTree;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for FamilyTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(family: &FamilyTree, member_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(member) = family.get_member(member_idx) {
                for &child_idx in member.children() {
                    if let Some(child) = family.get_member(child_idx) {
                        let mut child_tree = Tree::new(child.name().to_string());
                        build_tree(family, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        let mut tree = Tree::new(self.root_name().to_string());
        build_tree(self, self.root(), &mut tree);
        tree
    }
}
