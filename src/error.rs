//! Error types for the containers in this crate.
//!
//! Absence of a key is never an error: `contains`, `insert` and `remove` report it
//! through their `bool` return values. The variants here are all caller contract
//! violations.

use thiserror::Error;

/// Result type alias for fallible container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way an operation in this crate can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Tree errors
    // =========================================================================
    /// An operation that needs a root (its key or one of its subtrees) was
    /// called on an empty tree.
    #[error("accessing empty tree")]
    EmptyTree,

    /// A cursor was advanced after it had already produced every key.
    /// Check [`Cursor::has_next`](crate::iter::Cursor::has_next) first.
    #[error("cursor is exhausted")]
    IteratorExhausted,

    // =========================================================================
    // Collaborator errors
    // =========================================================================
    /// `pop` or `peek` was called on an empty [`Stack`](crate::stack::Stack).
    #[error("stack is empty")]
    EmptyStack,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::EmptyTree.to_string(), "accessing empty tree");
        assert_eq!(Error::IteratorExhausted.to_string(), "cursor is exhausted");
        assert_eq!(Error::EmptyStack.to_string(), "stack is empty");
    }
}
