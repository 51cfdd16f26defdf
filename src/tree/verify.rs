//! Structural checks recomputed from the live node graph.
//!
//! Every check walks the arena with an explicit stack, so none of them recurse
//! over the tree shape.

use alloc::vec::Vec;

use super::RbMultiset;
use crate::node::{Color, NIL};

impl<T> RbMultiset<T> {
    /// Returns true if every red node has only black (or absent) children.
    pub fn verify_red_child(&self) -> bool {
        self.preorder().all(|idx| {
            let node = self.node_at(idx);
            node.color == Color::Black || (self.is_black(node.left) && self.is_black(node.right))
        })
    }

    /// Returns true if, for every node, the left and right subtrees have the
    /// same black-height.
    ///
    /// An absent child has a black-height of 1, a black child adds one to its
    /// own subtree's height, and a red child contributes its height unchanged.
    pub fn verify_black_height(&self) -> bool {
        self.black_height().is_some()
    }

    /// Returns true if the tree is empty or its root is black.
    pub fn verify_black_root(&self) -> bool {
        self.is_black(self.root)
    }

    /// Returns true if every child's parent link points back at the node
    /// that holds it, and the root has no parent.
    pub fn verify_parent_links(&self) -> bool {
        if self.root != NIL && self.node_at(self.root).parent != NIL {
            return false;
        }

        self.preorder().all(|idx| {
            let node = self.node_at(idx);
            [node.left, node.right]
                .into_iter()
                .all(|child| child == NIL || self.node_at(child).parent == idx)
        })
    }

    /// Returns true if the node counts sum to [`size`](Self::size) and the
    /// number of reachable nodes matches
    /// [`distinct_len`](Self::distinct_len).
    pub fn verify_count_sum(&self) -> bool {
        let mut nodes = 0;
        let mut total = 0;
        for idx in self.preorder() {
            let count = self.node_at(idx).count;
            if count == 0 {
                return false;
            }
            nodes += 1;
            total += count;
        }
        nodes == self.len && total == self.size
    }

    /// Runs every structural check.
    pub fn verify_properties(&self) -> bool
    where
        T: Ord,
    {
        self.verify_red_child()
            && self.verify_parent_links()
            && self.verify_black_height()
            && self.verify_black_root()
            && self.verify_count_sum()
            && self.verify_order()
    }

    /// Returns true if an in-order walk yields strictly increasing values.
    pub fn verify_order(&self) -> bool
    where
        T: Ord,
    {
        let mut values = self.iter().map(|(v, _)| v);
        let Some(mut prev) = values.next() else {
            return true;
        };
        for v in values {
            if *prev >= *v {
                return false;
            }
            prev = v;
        }
        true
    }

    /// Root color plus the red and black-height rules in a single pass.
    #[cfg(debug_assertions)]
    pub(crate) fn verify_rb_invariants(&self) -> bool {
        self.verify_black_root() && self.verify_red_child() && self.black_height().is_some()
    }

    /// Black-height of the whole tree (1 when empty), or `None` if any node
    /// has sides of different black-heights.
    fn black_height(&self) -> Option<usize> {
        if self.root == NIL {
            return Some(1);
        }

        // Post-order: a node is finished once both children have reported.
        let mut heights = Vec::with_capacity(self.len);
        let mut stack = vec![(self.root, false)];

        while let Some((idx, children_done)) = stack.pop() {
            let node = self.node_at(idx);

            if !children_done {
                stack.push((idx, true));
                for child in [node.right, node.left] {
                    if child != NIL {
                        stack.push((child, false));
                    }
                }
                continue;
            }

            // Children were pushed right then left, so the right height is on
            // top of the height stack.
            let right = if node.right == NIL { 1 } else { heights.pop()? };
            let left = if node.left == NIL { 1 } else { heights.pop()? };
            if left != right {
                return None;
            }

            heights.push(match node.color {
                Color::Black => left + 1,
                Color::Red => left,
            });
        }

        debug_assert_eq!(heights.len(), 1);
        // The root's own color is not part of its black-height.
        match self.node_at(self.root).color {
            Color::Black => heights.pop().map(|h| h - 1),
            Color::Red => heights.pop(),
        }
    }

    /// Pre-order walk over the indices of all reachable nodes.
    fn preorder(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push(self.root);
        }

        core::iter::from_fn(move || {
            let idx = stack.pop()?;
            let node = self.node_at(idx);
            stack.extend([node.right, node.left].into_iter().filter(|&c| c != NIL));
            Some(idx)
        })
    }
}
