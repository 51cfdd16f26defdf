use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{RbMultiset, node::NIL};

/// In-order iterator over the `(value, count)` pairs of an [`RbMultiset`],
/// created by [`RbMultiset::iter`].
///
/// Values are yielded in ascending order, each once with its multiplicity.
#[derive(Debug)]
pub struct Iter<'a, T> {
    tree: &'a RbMultiset<T>,

    /// Nodes whose left subtree has been fully descended but which have not
    /// been yielded yet.
    stack: Vec<usize>,

    /// Distinct values not yet yielded.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a RbMultiset<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.distinct_len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut idx: usize) {
        while idx != NIL {
            self.stack.push(idx);
            idx = self.tree.node_at(idx).left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node_at(idx);
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some((&node.value, node.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
