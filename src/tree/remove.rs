use core::borrow::Borrow;

use log::trace;

use super::RbMultiset;
use crate::{
    error::{Error, Result},
    node::{Color, NIL, Side},
};

impl<T: Ord> RbMultiset<T> {
    /// Removes one occurrence of `value`, returning its remaining
    /// multiplicity.
    ///
    /// The node holding `value` is only unlinked from the tree once its count
    /// reaches zero. Returns [`Error::NotFound`] and leaves the tree untouched
    /// when `value` is absent.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.find_node(value).ok_or(Error::NotFound)?;

        let node = self.node_at_mut(idx);
        let remaining = if node.count > 1 {
            node.count -= 1;
            node.count
        } else {
            self.delete_node(idx);
            0
        };
        self.size -= 1;

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify_rb_invariants(),
            "RB tree invariants violated after removal"
        );

        Ok(remaining)
    }

    /// Removes every occurrence of `value`, returning how many were removed.
    pub fn remove_all<Q>(&mut self, value: &Q) -> Result<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.find_node(value).ok_or(Error::NotFound)?;

        let removed = self.node_at(idx).count;
        self.delete_node(idx);
        self.size -= removed;

        #[cfg(debug_assertions)]
        debug_assert!(
            self.verify_rb_invariants(),
            "RB tree invariants violated after removal"
        );

        Ok(removed)
    }
}

impl<T> RbMultiset<T> {
    /// Physically unlinks and frees the node at `target`, restoring the
    /// red-black properties. Does not touch `size`.
    fn delete_node(&mut self, mut target: usize) {
        let node = self.node_at(target);

        if node.left != NIL && node.right != NIL {
            // Two children: trade places with the in-order predecessor, which
            // has no right child, and delete that slot instead.
            let predecessor = self.find_extreme(node.left, Side::Right);
            trace!("structural delete: {target} has two children, swapping with {predecessor}");
            self.swap_payload(target, predecessor);
            target = predecessor;
        }

        let node = self.node_at(target);
        let child = if node.left != NIL { node.left } else { node.right };

        if child != NIL {
            // A lone child must be red under a black node, otherwise the
            // black-heights of the two sides would differ.
            debug_assert!(self.is_black(target) && self.is_red(child));
            trace!("structural delete: splicing child {child} into {target}");

            self.replace_in_parent(target, child);
            self.set_color(child, Color::Black);
        } else if target == self.root {
            trace!("structural delete: removing leaf root {target}");
            self.root = NIL;
        } else {
            let parent = node.parent;
            let side = self.side_of(target);
            let color = node.color;

            *self.node_at_mut(parent).child_mut(side) = NIL;
            if color == Color::Black {
                trace!("structural delete: black leaf {target}, rebalancing at {parent}");
                self.restore_after_delete(parent, side);
            }
        }

        self.deallocate_node(target);
        self.len -= 1;
    }

    /// Repairs a black-height deficit of one on the `side` subtree of
    /// `parent`.
    fn restore_after_delete(&mut self, mut parent: usize, mut side: Side) {
        while parent != NIL {
            let far = side.opposite();
            let sibling = self.get_child(parent, far);

            // The deficient side is one black short, so the other side holds
            // at least one black node and the sibling is present.
            debug_assert_ne!(sibling, NIL);

            if self.is_red(sibling) {
                trace!("delete fix-up: red sibling {sibling}, rotating over {parent}");
                self.swap_colors(sibling, parent);
                self.rotate(sibling, side);
                continue;
            }

            let inside = self.get_child(sibling, side);
            let outside = self.get_child(sibling, far);

            if self.is_black(inside) && self.is_black(outside) {
                if self.is_black(parent) {
                    trace!("delete fix-up: black family at {parent}, moving deficit up");
                    self.set_color(sibling, Color::Red);

                    let grandparent = self.get_parent(parent);
                    if grandparent != NIL {
                        side = self.side_of(parent);
                    }
                    parent = grandparent;
                    continue;
                }

                trace!("delete fix-up: red parent {parent}, swapping with sibling {sibling}");
                self.swap_colors(sibling, parent);
                return;
            }

            if self.is_black(outside) {
                trace!("delete fix-up: red inner nephew {inside}, rotating over {sibling}");
                self.swap_colors(sibling, inside);
                self.rotate(inside, far);
                continue;
            }

            trace!("delete fix-up: red outer nephew {outside}, rotating {sibling} over {parent}");
            self.swap_colors(sibling, parent);
            self.set_color(outside, Color::Black);
            self.rotate(sibling, side);
            return;
        }
    }
}
