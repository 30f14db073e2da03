//! This crate provides an unbalanced Binary Search Tree (BST), the structural
//! binary tree it is built on, and the small stack and queue it uses internally.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path
//! from the root `Node` to a leaf `Node`). [`SearchTree`] does nothing to limit
//! its height, so inserting keys in sorted order produces a tree shaped like a
//! list. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree. [`SearchTree::cursor`]
//! does this lazily and can remove keys as it goes.
//!
//! # Examples
//!
//! ```
//! use searchtree::SearchTree;
//!
//! let mut tree: SearchTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.render(), "5\n3 8\n1 4 7 9\nnull null null null null null null null\n");
//! assert!(tree.contains(&4));
//! assert!(!tree.contains(&6));
//!
//! assert!(tree.remove(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 4, 5, 7, 8, 9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
mod node;
pub mod queue;
pub mod search;
pub mod stack;
pub mod tree;

pub use error::{Error, Result};
pub use search::SearchTree;
pub use tree::{BinaryTree, Subtree};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
