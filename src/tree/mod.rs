use alloc::vec::Vec;
use core::{borrow::Borrow, cmp::Ordering, fmt};

use log::debug;

use crate::{
    iter::Iter,
    node::{Color, NIL, Node, Side},
};

mod dump;
mod insert;
mod remove;
mod rotate;
mod verify;

pub use dump::Dump;

/// An ordered multiset backed by a Red-Black tree.
///
/// Repeated insertions of an equal value collapse onto a single node carrying
/// an occurrence count. Nodes are stored in an index arena: children and
/// parents are referenced by slot index, and vacated slots are recycled via a
/// free list so the tree never holds owning cycles.
///
/// | Operation            | Complexity |
/// |:-------------------- | ----------:|
/// | `insert()`           |  O(log n)  |
/// | `remove()`           |  O(log n)  |
/// | `count()`            |  O(log n)  |
/// | `size()`             |  O(1)      |
/// | `clone()`, `clear()` |  O(n)      |
pub struct RbMultiset<T> {
    /// Node slots; `None` marks a vacated slot listed in `free_list`
    nodes: Vec<Option<Node<T>>>,

    /// Stack of vacated slot indices, reused before the arena grows
    free_list: Vec<usize>,

    /// Index of the root node, NIL when the tree is empty
    root: usize,

    /// Number of physical nodes (distinct values)
    len: usize,

    /// Sum of every node's count
    size: usize,
}

impl<T> Default for RbMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RbMultiset<T> {
    /// Creates an empty multiset without allocating.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: NIL,
            len: 0,
            size: 0,
        }
    }

    /// Creates an empty multiset with room for `capacity` distinct values
    /// before the arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Total number of elements, counting every occurrence.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct values (physical nodes).
    #[inline]
    pub const fn distinct_len(&self) -> usize {
        self.len
    }

    /// Returns true if the multiset holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of distinct values the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves arena space for at least `additional` more distinct values.
    pub fn reserve(&mut self, additional: usize) {
        let spare = self.free_list.len() + (self.nodes.capacity() - self.nodes.len());
        if additional > spare {
            self.nodes.reserve(additional - self.free_list.len());
        }
    }

    /// Releases unused arena memory.
    ///
    /// Slot indices are stable while nodes are live, so vacated slots in the
    /// middle of the arena are only reclaimed once they trail the last live
    /// node or the tree is empty.
    pub fn shrink_to_fit(&mut self) {
        while let Some(None) = self.nodes.last() {
            self.nodes.pop();
        }
        let live = self.nodes.len();
        self.free_list.retain(|&idx| idx < live);
        self.nodes.shrink_to_fit();
        self.free_list.shrink_to_fit();
    }

    /// Removes every element, dropping all nodes.
    pub fn clear(&mut self) {
        debug!("clearing multiset of {} nodes", self.len);
        // Dropping the arena frees every node without recursing over the
        // tree shape.
        self.nodes.clear();
        self.free_list.clear();
        self.root = NIL;
        self.len = 0;
        self.size = 0;
    }

    /// Returns the multiplicity of `value`, 0 if absent.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value).map_or(0, |idx| self.node_at(idx).count)
    }

    /// Returns true if `value` occurs at least once.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.count(value) != 0
    }

    /// Returns the stored value equal to `value`, if any.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(value).map(|idx| &self.node_at(idx).value)
    }

    /// Smallest stored value.
    pub fn min(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.node_at(self.find_extreme(self.root, Side::Left)).value)
    }

    /// Largest stored value.
    pub fn max(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.node_at(self.find_extreme(self.root, Side::Right)).value)
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when empty.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack = Vec::new();
        if self.root != NIL {
            stack.push((self.root, 1));
        }
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = self.node_at(idx);
            for child in [node.left, node.right] {
                if child != NIL {
                    stack.push((child, depth + 1));
                }
            }
        }
        max
    }

    /// In-order iterator over `(value, count)` pairs in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Binary-search descent from the root.
    pub(crate) fn find_node<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;

        while current != NIL {
            let node = self.node_at(current);
            match value.cmp(node.value.borrow()) {
                Ordering::Equal => return Some(current),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }
        None
    }

    /// Follows `side` links from `node` until the last present node.
    pub(crate) fn find_extreme(&self, mut node: usize, side: Side) -> usize {
        loop {
            let next = self.node_at(node).child(side);
            if next == NIL {
                return node;
            }
            node = next;
        }
    }

    #[inline]
    pub(crate) const fn root(&self) -> usize {
        self.root
    }

    fn allocate_node(&mut self, node: Node<T>) -> usize {
        match self.free_list.pop() {
            Some(idx) => {
                debug_assert!(self.nodes[idx].is_none());
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn deallocate_node(&mut self, idx: usize) -> Node<T> {
        match self.nodes.get_mut(idx).and_then(Option::take) {
            Some(node) => {
                self.free_list.push(idx);
                node
            }
            None => unreachable!("freeing vacant node slot {idx}"),
        }
    }

    #[inline]
    pub(crate) fn node_at(&self, idx: usize) -> &Node<T> {
        match self.nodes.get(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling node index {idx}"),
        }
    }

    #[inline]
    fn node_at_mut(&mut self, idx: usize) -> &mut Node<T> {
        match self.nodes.get_mut(idx) {
            Some(Some(node)) => node,
            _ => unreachable!("dangling node index {idx}"),
        }
    }

    #[inline]
    pub(crate) fn get_color(&self, idx: usize) -> Color {
        if idx == NIL {
            Color::Black
        } else {
            self.node_at(idx).color
        }
    }

    #[inline]
    fn set_color(&mut self, idx: usize, color: Color) {
        if idx != NIL {
            self.node_at_mut(idx).color = color;
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, idx: usize) -> bool {
        self.get_color(idx) == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, idx: usize) -> bool {
        self.get_color(idx) == Color::Black
    }

    /// Exchanges the colors of two present nodes.
    fn swap_colors(&mut self, a: usize, b: usize) {
        let color_a = self.get_color(a);
        let color_b = self.get_color(b);
        self.set_color(a, color_b);
        self.set_color(b, color_a);
    }

    #[inline]
    fn get_parent(&self, idx: usize) -> usize {
        if idx == NIL {
            NIL
        } else {
            self.node_at(idx).parent
        }
    }

    #[inline]
    pub(crate) fn get_child(&self, idx: usize, side: Side) -> usize {
        if idx == NIL {
            NIL
        } else {
            self.node_at(idx).child(side)
        }
    }

    /// Deep-copies `other`'s node graph into this (empty) tree, preserving
    /// values, counts, colors and shape.
    fn copy_from(&mut self, other: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.root == NIL);
        debug!("copying multiset of {} nodes", other.len);

        self.nodes.reserve(other.len);

        // Explicit work-list of (source node, new parent, slot in new parent).
        let mut stack = Vec::new();
        if other.root != NIL {
            stack.push((other.root, NIL, Side::Left));
        }

        while let Some((src, parent, side)) = stack.pop() {
            let from = other.node_at(src);
            let idx = self.allocate_node(Node {
                value: from.value.clone(),
                count: from.count,
                parent,
                left: NIL,
                right: NIL,
                color: from.color,
            });

            if parent == NIL {
                self.root = idx;
            } else {
                *self.node_at_mut(parent).child_mut(side) = idx;
            }

            for side in [Side::Left, Side::Right] {
                let child = from.child(side);
                if child != NIL {
                    stack.push((child, idx, side));
                }
            }
        }

        self.len = other.len;
        self.size = other.size;
    }
}

impl<T: Clone> Clone for RbMultiset<T> {
    fn clone(&self) -> Self {
        let mut tree = Self::with_capacity(self.len);
        tree.copy_from(self);
        tree
    }

    /// Replaces this tree's contents with a deep copy of `source`, freeing
    /// the previous node graph first.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for RbMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RbMultiset<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RbMultiset<T> {}

impl<T: Ord> FromIterator<T> for RbMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RbMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RbMultiset<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
