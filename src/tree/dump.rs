use alloc::collections::VecDeque;
use core::fmt;

use super::RbMultiset;
use crate::node::NIL;

/// Level-order rendering of a tree, created by [`RbMultiset::dump`].
///
/// Each level is printed on its own line. A node renders as
/// `value (color,count)` with the color as `r` or `b`, and an absent child as
/// `NULL (b,0)`. Absent slots keep their place in the next level as two absent
/// children, and rendering stops after the first level made up only of absent
/// slots.
///
/// ```
/// use rb_multiset::RbMultiset;
///
/// let tree: RbMultiset<_> = [2, 1, 3, 3].into_iter().collect();
/// assert_eq!(
///     tree.dump().to_string(),
///     "2 (b,1) \n1 (r,1) 3 (r,2) \nNULL (b,0) NULL (b,0) NULL (b,0) NULL (b,0) \n",
/// );
/// ```
pub struct Dump<'a, T> {
    tree: &'a RbMultiset<T>,
}

impl<T> RbMultiset<T> {
    /// Returns a [`Display`](fmt::Display)able level-order debug rendering.
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { tree: self }
    }
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        let mut level = VecDeque::from([tree.root()]);
        let mut next = VecDeque::new();

        loop {
            let mut all_absent = true;

            while let Some(idx) = level.pop_front() {
                if idx == NIL {
                    next.extend([NIL, NIL]);
                    f.write_str("NULL (b,0) ")?;
                } else {
                    let node = tree.node_at(idx);
                    next.extend([node.left, node.right]);
                    write!(f, "{} ({},{}) ", node.value, node.color.symbol(), node.count)?;
                    all_absent = false;
                }
            }
            f.write_str("\n")?;

            if all_absent {
                return Ok(());
            }
            core::mem::swap(&mut level, &mut next);
        }
    }
}
