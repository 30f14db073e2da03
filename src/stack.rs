//! A LIFO stack. The tree iterators keep their pending left spines in one of
//! these instead of recursing so that a traversal can stop between calls.
//!
//! # Examples
//!
//! ```
//! use searchtree::stack::Stack;
//! use searchtree::Error;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(Error::EmptyStack));
//! ```

use crate::error::{Error, Result};

/// A last-in, first-out stack backed by a growable buffer. All operations are
/// amortized `O(1)`.
#[derive(Clone, Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStack`] if there is nothing on the stack.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyStack`] if there is nothing on the stack.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyStack)
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_errors() {
        let mut stack = Stack::<u8>::new();

        assert!(stack.is_empty());
        assert_eq!(stack.peek(), Err(Error::EmptyStack));
        assert_eq!(stack.pop(), Err(Error::EmptyStack));
    }

    #[test]
    fn last_in_first_out() {
        let mut stack = Stack::default();
        for x in 0..5 {
            stack.push(x);
        }
        assert_eq!(stack.len(), 5);

        for x in (0..5).rev() {
            assert_eq!(stack.peek(), Ok(&x));
            assert_eq!(stack.pop(), Ok(x));
        }
        assert!(stack.is_empty());
    }
}
