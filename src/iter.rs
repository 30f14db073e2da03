//! In-order traversal of a [`SearchTree`].
//!
//! Both iterators keep the left spine of the unvisited part of the tree on an
//! explicit [`Stack`]: the top of the stack is always the node with the smallest
//! key not yet produced. Advancing pops that node and pushes the left spine of its
//! right child. Every node is pushed and popped once, so a full traversal is
//! `O(n)` and a single step is amortized `O(1)` (worst case `O(height)`).

use std::iter::FusedIterator;
use std::ptr::NonNull;

use crate::error::{Error, Result};
use crate::node::{Link, Node, Side};
use crate::search::SearchTree;
use crate::stack::Stack;

/// An iterator over the keys of a [`SearchTree`] in ascending order. Created by
/// [`SearchTree::iter`].
pub struct Iter<'a, K> {
    stack: Stack<&'a Node<K>>,
    remaining: usize,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop().ok()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// A single pass, in-order cursor over a [`SearchTree`] that can remove the keys
/// it visits. Created by [`SearchTree::cursor`].
///
/// The cursor holds the tree's mutable borrow, so the tree can only change through
/// [`Cursor::remove_next`] while a traversal is open.
///
/// # Examples
///
/// ```
/// use searchtree::{Error, SearchTree};
///
/// let mut tree: SearchTree<_> = [2, 1, 3].into_iter().collect();
/// let mut cursor = tree.cursor();
///
/// assert_eq!(cursor.next_key(), Ok(&1));
/// assert_eq!(cursor.remove_next(), Ok(2));
/// assert_eq!(cursor.next_key(), Ok(&3));
/// assert!(!cursor.has_next());
/// assert_eq!(cursor.next_key(), Err(Error::IteratorExhausted));
///
/// assert_eq!(tree.len(), 2);
/// assert!(!tree.contains(&2));
/// ```
pub struct Cursor<'a, K> {
    tree: &'a mut SearchTree<K>,
    // Handles to nodes still linked into `tree`. Removing a node elsewhere in the
    // tree relinks it but never moves it, so these stay valid.
    stack: Stack<NonNull<Node<K>>>,
}

impl<'a, K> Cursor<'a, K> {
    pub(crate) fn new(tree: &'a mut SearchTree<K>) -> Self {
        let root = tree.root_link();
        let mut cursor = Self {
            tree,
            stack: Stack::new(),
        };
        cursor.push_left_spine(root);
        cursor
    }

    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(node) = link.0 {
            self.stack.push(node);
            // SAFETY: `node` came from a link of the tree we borrow mutably, so it is
            // live.
            link = unsafe { Node::child(node, Side::Left) };
        }
    }

    /// Pops the next node and queues up its right subtree.
    fn advance(&mut self) -> Result<NonNull<Node<K>>> {
        if !self.has_next() {
            return Err(Error::IteratorExhausted);
        }
        let node = self.stack.pop()?;
        // SAFETY: Every node on the stack is still linked into the tree.
        let right = unsafe { Node::child(node, Side::Right) };
        self.push_left_spine(right);
        Ok(node)
    }

    /// Whether there are keys left to visit.
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// The key the next call to [`next_key`](Self::next_key) or
    /// [`remove_next`](Self::remove_next) would produce, without advancing.
    pub fn peek_next(&self) -> Option<&K> {
        let node = *self.stack.peek().ok()?;
        // SAFETY: The node is still linked into the tree, and the tree can't change
        // while the returned borrow of `self` is alive.
        Some(unsafe { Node::key(node) })
    }

    /// Advances past the smallest unvisited key and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IteratorExhausted`] if [`has_next`](Self::has_next) is `false`.
    pub fn next_key(&mut self) -> Result<&K> {
        let node = self.advance()?;
        // SAFETY: Popping a node off the stack doesn't unlink it, and the tree can't
        // change while the returned borrow of `self` is alive.
        Ok(unsafe { Node::key(node) })
    }

    /// Advances past the smallest unvisited key, removes it from the tree and
    /// returns it.
    ///
    /// # Errors
    ///
    /// [`Error::IteratorExhausted`] if [`has_next`](Self::has_next) is `false`.
    pub fn remove_next(&mut self) -> Result<K>
    where
        K: Ord,
    {
        let node = self.advance()?;
        // SAFETY: `node` is off the stack, so once it's detached nothing in the
        // cursor refers to it. `detach` doesn't write to any key, so borrowing the
        // key of the node being detached is fine for the duration of the call.
        let detached = unsafe { self.tree.detach(Node::key(node)) };
        match detached {
            // SAFETY: `detach` unlinked the node and cleared its children.
            Some(detached) => Ok(unsafe { Node::into_key(detached) }),
            None => unreachable!("Cursor node was not in its tree"),
        }
    }
}
