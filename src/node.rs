/// Index used in place of an absent child or parent.
///
/// An absent child is an implicit black leaf with a black-height of 1; no
/// sentinel node is ever allocated for it.
pub(crate) const NIL: usize = usize::MAX;

/// Red-Black tree node colors used to maintain tree balance properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    /// Must have black (or absent) children
    Red,
    /// Contributes to the black-height of every path through it
    Black,
}

impl Color {
    pub(crate) const fn symbol(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Black => 'b',
        }
    }
}

/// Which child slot of a parent a node occupies, or the direction of a
/// rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A node in the arena, holding one distinct value and its multiplicity.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The stored value, unique across the tree
    pub(crate) value: T,

    /// Number of occurrences of `value`, always at least 1
    pub(crate) count: usize,

    /// Index of the parent node (NIL for the root). Never owns the parent.
    pub(crate) parent: usize,

    /// Index of the left child (NIL if absent)
    pub(crate) left: usize,

    /// Index of the right child (NIL if absent)
    pub(crate) right: usize,

    /// Node color for balancing
    pub(crate) color: Color,
}

impl<T> Node<T> {
    pub(crate) const fn new(value: T, parent: usize, color: Color) -> Self {
        Self {
            value,
            count: 1,
            parent,
            left: NIL,
            right: NIL,
            color,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut usize {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
