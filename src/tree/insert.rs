use core::cmp::Ordering;

use log::trace;

use super::RbMultiset;
use crate::node::{Color, NIL, Node, Side};

impl<T: Ord> RbMultiset<T> {
    /// Adds one occurrence of `value`, returning its new multiplicity.
    ///
    /// Inserting a value already present only bumps its count; the tree shape
    /// is left untouched.
    pub fn insert(&mut self, value: T) -> usize {
        if self.root == NIL {
            self.root = self.allocate_node(Node::new(value, NIL, Color::Black));
            self.len = 1;
            self.size = 1;
            return 1;
        }

        let mut current = self.root;
        let (parent, side) = loop {
            let node = self.node_at(current);
            let side = match value.cmp(&node.value) {
                Ordering::Equal => {
                    let node = self.node_at_mut(current);
                    node.count += 1;
                    let count = node.count;
                    self.size += 1;
                    return count;
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };

            let next = node.child(side);
            if next == NIL {
                break (current, side);
            }
            current = next;
        };

        let new_idx = self.allocate_node(Node::new(value, parent, Color::Red));
        *self.node_at_mut(parent).child_mut(side) = new_idx;
        self.len += 1;
        self.size += 1;

        self.restore_after_insert(new_idx);

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify_rb_invariants(),
            "RB tree invariants violated after insertion"
        );

        1
    }

    /// Restores the red-black properties after linking the red node `child`.
    fn restore_after_insert(&mut self, mut child: usize) {
        debug_assert_ne!(child, NIL);

        loop {
            // The root may have been painted red by a recolor one generation
            // below it.
            if self.is_red(self.root) {
                self.set_color(self.root, Color::Black);
                return;
            }

            let parent = self.get_parent(child);
            if self.is_black(parent) {
                return;
            }

            // Red child under a red parent. The parent is red so it is not
            // the root, and the grandparent is present.
            let grandparent = self.get_parent(parent);
            debug_assert_ne!(grandparent, NIL);

            let parent_side = self.side_of(parent);
            let uncle = self.get_child(grandparent, parent_side.opposite());

            if self.is_red(uncle) {
                trace!("insert fix-up: red uncle {uncle}, recoloring from {grandparent}");
                self.set_color(grandparent, Color::Red);
                self.set_color(uncle, Color::Black);
                self.set_color(parent, Color::Black);
                child = grandparent;
                continue;
            }

            if self.side_of(child) != parent_side {
                // Zig-zag: straighten the chain so parent and child lean the
                // same way, then handle the original parent as the child.
                trace!("insert fix-up: inner child {child}, rotating through {parent}");
                self.rotate(child, parent_side);
                child = parent;
                continue;
            }

            trace!("insert fix-up: outer child {child}, rotating {parent} over {grandparent}");
            self.swap_colors(parent, grandparent);
            self.rotate(parent, parent_side.opposite());
            return;
        }
    }
}
