use core::mem;

use super::RbMultiset;
use crate::node::{NIL, Side};

impl<T> RbMultiset<T> {
    /// Pivots `child` up through its parent.
    ///
    /// `dir` is the direction of the rotation: the original parent descends
    /// to the `dir` side of `child`, so `child` must currently be the parent's
    /// `dir.opposite()` child. The grandchild on `child`'s `dir` side moves
    /// across to the original parent, and the tree root is updated when the
    /// original parent had no parent of its own.
    ///
    /// ```text
    ///        P                 C
    ///       / \     left      / \
    ///      a   C    ---->    P   c
    ///         / \           / \
    ///        b   c         a   b
    /// ```
    pub(super) fn rotate(&mut self, child: usize, dir: Side) {
        let parent = self.node_at(child).parent;
        debug_assert_ne!(parent, NIL, "rotating the root");
        debug_assert_eq!(self.node_at(parent).child(dir.opposite()), child);

        let grandparent = self.node_at(parent).parent;
        let grandchild = self.node_at(child).child(dir);

        *self.node_at_mut(child).child_mut(dir) = parent;
        *self.node_at_mut(parent).child_mut(dir.opposite()) = grandchild;
        if grandchild != NIL {
            self.node_at_mut(grandchild).parent = parent;
        }

        self.node_at_mut(child).parent = grandparent;
        self.node_at_mut(parent).parent = child;

        if grandparent == NIL {
            self.root = child;
        } else {
            let side = if self.node_at(grandparent).left == parent {
                Side::Left
            } else {
                Side::Right
            };
            *self.node_at_mut(grandparent).child_mut(side) = child;
        }
    }

    /// Which child slot of its parent `idx` occupies. `idx` must not be the
    /// root.
    pub(super) fn side_of(&self, idx: usize) -> Side {
        let parent = self.node_at(idx).parent;
        debug_assert_ne!(parent, NIL);
        if self.node_at(parent).left == idx {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` (possibly NIL) into the slot `old` occupies under
    /// its parent, or at the root.
    pub(super) fn replace_in_parent(&mut self, old: usize, replacement: usize) {
        let parent = self.node_at(old).parent;

        if parent == NIL {
            self.root = replacement;
        } else {
            let side = self.side_of(old);
            *self.node_at_mut(parent).child_mut(side) = replacement;
        }

        if replacement != NIL {
            self.node_at_mut(replacement).parent = parent;
        }
    }

    /// Exchanges the value and count of two distinct present nodes, leaving
    /// links and colors in place.
    pub(super) fn swap_payload(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.nodes.split_at_mut(hi);

        match (head[lo].as_mut(), tail[0].as_mut()) {
            (Some(x), Some(y)) => {
                mem::swap(&mut x.value, &mut y.value);
                mem::swap(&mut x.count, &mut y.count);
            }
            _ => unreachable!("swapping payload of vacant slot {lo} or {hi}"),
        }
    }
}
