use core::fmt;

/// Errors reported by [`RbMultiset`](crate::RbMultiset) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The value has no occurrences in the multiset.
    NotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("value is not in the multiset"),
        }
    }
}

impl core::error::Error for Error {}

/// Result alias defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
