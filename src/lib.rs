#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

#[macro_use]
extern crate alloc;

mod error;
pub use error::{Error, Result};

mod node;

mod tree;
pub use tree::{Dump, RbMultiset};

mod iter;
pub use iter::Iter;

pub use ordered_float::OrderedFloat;

/// A multiset of floating point values.
///
/// [`OrderedFloat`] gives floats the total order the tree requires; `NaN`
/// compares equal to itself and greater than every other value.
pub type FloatMultiset<F> = RbMultiset<OrderedFloat<F>>;
