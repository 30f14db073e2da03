//! The structural shell shared by every tree in this crate. Nothing here looks at
//! the order of keys: a [`BinaryTree`] can hold any shape.
//!
//! # Examples
//!
//! ```
//! use searchtree::{BinaryTree, Error};
//!
//! let tree = BinaryTree::with_children(
//!     'b',
//!     BinaryTree::leaf('a'),
//!     BinaryTree::with_children('d', BinaryTree::new(), BinaryTree::leaf('c')),
//! );
//!
//! assert_eq!(tree.root_key(), Ok(&'b'));
//! assert!(tree.left()?.is_leaf());
//! assert_eq!(tree.right()?.right()?.root_key(), Ok(&'c'));
//! assert_eq!(tree.left()?.left()?.root_key(), Err(Error::EmptyTree));
//!
//! assert_eq!(
//!     tree.to_string(),
//!     "b\na d\nnull null null c\nnull null\n",
//! );
//! # Ok::<(), Error>(())
//! ```

use std::fmt::{self, Write};
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::queue::Queue;

/// An owning binary tree with no ordering invariant.
pub struct BinaryTree<K> {
    pub(crate) root: Link<K>,
    _owns: PhantomData<Box<Node<K>>>,
}

impl<K> Default for BinaryTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for BinaryTree<K> {
    fn drop(&mut self) {
        // SAFETY: The tree owns its root and nothing can borrow it past `drop`.
        unsafe { self.root.take().free() };
    }
}

impl<K> Clone for BinaryTree<K>
where
    K: Clone,
{
    /// Deep copies every node. The copy shares nothing with `self`.
    fn clone(&self) -> Self {
        Self::from_root(self.root.deep_copy())
    }
}

impl<K> fmt::Debug for BinaryTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("root", &self.root.node())
            .finish()
    }
}

impl<K> fmt::Display for BinaryTree<K>
where
    K: fmt::Display,
{
    /// Writes the level order rendering described on [`Subtree::render`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_levels(self.root.node(), f)
    }
}

impl<K> BinaryTree<K> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self::from_root(Link::none())
    }

    /// A tree with a single node holding `key`.
    pub fn leaf(key: K) -> Self {
        Self::from_root(Link::leaf(key))
    }

    /// A tree whose root holds `key` and adopts the nodes of `left` and `right` as
    /// its subtrees. No nodes are copied.
    pub fn with_children(key: K, mut left: Self, mut right: Self) -> Self {
        Self::from_root(Link::with_children(
            key,
            left.root.take(),
            right.root.take(),
        ))
    }

    pub(crate) fn from_root(root: Link<K>) -> Self {
        Self {
            root,
            _owns: PhantomData,
        }
    }

    /// Borrows the whole tree as a [`Subtree`].
    pub fn view(&self) -> Subtree<'_, K> {
        Subtree {
            root: self.root.node(),
        }
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Whether the tree is empty or its root has no children.
    pub fn is_leaf(&self) -> bool {
        self.view().is_leaf()
    }

    /// The key stored in the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty.
    pub fn root_key(&self) -> Result<&K> {
        self.view().root_key()
    }

    /// A view of the root's left subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty.
    pub fn left(&self) -> Result<Subtree<'_, K>> {
        self.view().left()
    }

    /// A view of the root's right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree is empty.
    pub fn right(&self) -> Result<Subtree<'_, K>> {
        self.view().right()
    }

    /// See [`Subtree::render`].
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.to_string()
    }
}

/// A borrowed view of a subtree of some [`BinaryTree`]. It owns no nodes and can't
/// outlive the tree it was taken from.
pub struct Subtree<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<K> Clone for Subtree<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Subtree<'_, K> {}

impl<K> fmt::Debug for Subtree<'_, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subtree").field("root", &self.root).finish()
    }
}

impl<K> fmt::Display for Subtree<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_levels(self.root, f)
    }
}

impl<'a, K> Subtree<'a, K> {
    /// Whether the subtree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Whether the subtree is empty or its root has no children.
    pub fn is_leaf(&self) -> bool {
        self.root.map_or(true, Node::is_leaf)
    }

    /// The key stored in the subtree's root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the subtree is empty.
    pub fn root_key(&self) -> Result<&'a K> {
        self.root.map(|node| &node.key).ok_or(Error::EmptyTree)
    }

    /// A view of the root's left subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the subtree is empty.
    pub fn left(&self) -> Result<Subtree<'a, K>> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(Subtree { root: root.left() })
    }

    /// A view of the root's right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the subtree is empty.
    pub fn right(&self) -> Result<Subtree<'a, K>> {
        let root = self.root.ok_or(Error::EmptyTree)?;
        Ok(Subtree { root: root.right() })
    }

    /// Deep copies the viewed nodes into a new, independently owned tree.
    pub fn to_tree(&self) -> BinaryTree<K>
    where
        K: Clone,
    {
        match self.root {
            None => BinaryTree::new(),
            Some(node) => BinaryTree::from_root(Link::with_children(
                node.key.clone(),
                node.left.deep_copy(),
                node.right.deep_copy(),
            )),
        }
    }

    /// Renders the subtree breadth first, one line per depth. Keys on a line are
    /// separated by single spaces and every line ends with `\n`. A missing child is
    /// written as `null` and has no children of its own, so the last line is
    /// always made of `null`s.
    ///
    /// ```
    /// use searchtree::SearchTree;
    ///
    /// let tree: SearchTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.render(), "2\n1 3\nnull null null null\n");
    ///
    /// let empty = SearchTree::<i32>::new();
    /// assert_eq!(empty.render(), "null\n");
    /// ```
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.to_string()
    }
}

fn render_levels<K>(root: Option<&Node<K>>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: fmt::Display,
{
    let mut queue = Queue::new();
    queue.offer(root);
    while !queue.is_empty() {
        let level_size = queue.size();
        for i in 0..level_size {
            let Some(slot) = queue.poll() else {
                break;
            };
            if i > 0 {
                f.write_char(' ')?;
            }
            match slot {
                None => f.write_str("null")?,
                Some(node) => {
                    write!(f, "{}", node.key)?;
                    queue.offer(node.left());
                    queue.offer(node.right());
                }
            }
        }
        f.write_char('\n')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    ///      4
    ///     / \
    ///    9   1
    ///   /
    ///  7
    /// ```
    fn unordered() -> BinaryTree<i32> {
        BinaryTree::with_children(
            4,
            BinaryTree::with_children(9, BinaryTree::leaf(7), BinaryTree::new()),
            BinaryTree::leaf(1),
        )
    }

    #[test]
    fn empty_tree() {
        let tree = BinaryTree::<i32>::new();

        assert!(tree.is_empty());
        assert!(tree.is_leaf());
        assert_eq!(tree.root_key(), Err(Error::EmptyTree));
        assert!(tree.left().is_err());
        assert!(tree.right().is_err());
        assert_eq!(tree.render(), "null\n");
    }

    #[test]
    fn single_node_is_leaf() {
        let tree = BinaryTree::leaf("only");

        assert!(!tree.is_empty());
        assert!(tree.is_leaf());
        assert_eq!(tree.root_key(), Ok(&"only"));
        assert!(tree.left().unwrap().is_empty());
        assert!(tree.right().unwrap().is_empty());
        assert_eq!(tree.render(), "only\nnull null\n");
    }

    #[test]
    fn views_follow_the_shape() {
        let tree = unordered();
        assert!(!tree.is_leaf());

        let left = tree.left().unwrap();
        assert_eq!(left.root_key(), Ok(&9));
        assert!(!left.is_leaf());
        assert_eq!(left.left().unwrap().root_key(), Ok(&7));
        assert!(left.right().unwrap().is_empty());
        assert_eq!(
            left.right().unwrap().left().unwrap_err(),
            Error::EmptyTree
        );

        let right = tree.right().unwrap();
        assert_eq!(right.root_key(), Ok(&1));
        assert!(right.is_leaf());
    }

    #[test]
    fn render_does_not_expand_null() {
        let tree = unordered();

        assert_eq!(tree.render(), "4\n9 1\n7 null null null\nnull null\n");
        assert_eq!(tree.left().unwrap().render(), "9\n7 null\nnull null\n");
    }

    #[test]
    fn clone_is_deep() {
        let tree = unordered();
        let copy = tree.clone();
        drop(tree);

        assert_eq!(copy.render(), "4\n9 1\n7 null null null\nnull null\n");
    }

    #[test]
    fn subtree_to_tree_copies() {
        let tree = unordered();
        let copy = tree.left().unwrap().to_tree();
        drop(tree);

        assert_eq!(copy.root_key(), Ok(&9));
        assert_eq!(copy.render(), "9\n7 null\nnull null\n");

        let empty = BinaryTree::<i32>::new();
        assert!(empty.view().to_tree().is_empty());
    }

    #[test]
    fn debug_shows_structure() {
        let tree = BinaryTree::with_children(2, BinaryTree::leaf(1), BinaryTree::new());

        assert_eq!(
            format!("{:?}", tree),
            "BinaryTree { root: Some(Node { key: 2, left: Some(Node { key: 1, left: None, \
             right: None }), right: None }) }"
        );
    }

    #[test]
    fn dropping_a_long_spine() {
        // Deep enough that a recursive drop would be at risk.
        let mut tree = BinaryTree::new();
        for key in 0..200_000 {
            tree = BinaryTree::with_children(key, tree, BinaryTree::new());
        }
        drop(tree);
    }
}
