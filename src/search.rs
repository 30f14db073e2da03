//! An unbalanced Binary Search Tree over unique keys.
//!
//! Insertion and deletion recurse from the root, passing each step the parent
//! node and the [`Side`] of the parent the current node hangs from. Nodes never
//! point back at their parents. A node with two children is deleted by splicing its
//! in-order predecessor node into its place, so no surviving key is ever moved
//! to a different node.
//!
//! # Examples
//!
//! ```
//! use searchtree::SearchTree;
//!
//! let mut tree = SearchTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Keys are unique.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ptr::NonNull;

use crate::error::Result;
use crate::iter::{Cursor, Iter};
use crate::node::{Link, Node, Side};
use crate::tree::{BinaryTree, Subtree};

/// A Binary Search Tree holding unique, totally ordered keys. It never rebalances,
/// so its height depends on insertion order.
pub struct SearchTree<K> {
    tree: BinaryTree<K>,
    len: usize,
}

impl<K> Default for SearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for SearchTree<K>
where
    K: Clone,
{
    /// Deep copies every node. The copy shares nothing with `self`.
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
            len: self.len,
        }
    }
}

impl<K> fmt::Debug for SearchTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> fmt::Display for SearchTree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tree, f)
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for SearchTree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for SearchTree<K> where K: Eq {}

impl<K> FromIterator<K> for SearchTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for SearchTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a SearchTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> SearchTree<K> {
    /// Generates a new, empty `SearchTree`.
    pub fn new() -> Self {
        Self {
            tree: BinaryTree::new(),
            len: 0,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Whether the tree is empty or its root has no children.
    pub fn is_leaf(&self) -> bool {
        self.tree.is_leaf()
    }

    /// The key stored in the root.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`](crate::Error::EmptyTree) if the tree is empty.
    pub fn root_key(&self) -> Result<&K> {
        self.tree.root_key()
    }

    /// A view of the root's left subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`](crate::Error::EmptyTree) if the tree is empty.
    pub fn left(&self) -> Result<Subtree<'_, K>> {
        self.tree.left()
    }

    /// A view of the root's right subtree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`](crate::Error::EmptyTree) if the tree is empty.
    pub fn right(&self) -> Result<Subtree<'_, K>> {
        self.tree.right()
    }

    /// The level order rendering described on [`Subtree::render`].
    pub fn render(&self) -> String
    where
        K: fmt::Display,
    {
        self.tree.render()
    }

    /// The structural shell underneath this tree.
    pub fn as_tree(&self) -> &BinaryTree<K> {
        &self.tree
    }

    /// Gives up the ordering guarantees and returns the underlying nodes.
    pub fn into_tree(self) -> BinaryTree<K> {
        self.tree
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The smallest key, found by walking the root's left spine.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.tree.root.node()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key, found by walking the root's right spine.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.tree.root.node()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }

    /// Iterates over the keys in ascending order.
    ///
    /// ```
    /// use searchtree::SearchTree;
    ///
    /// let tree: SearchTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(keys, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.tree.root.node(), self.len)
    }

    /// A cursor over the keys in ascending order that can also remove the keys it
    /// visits. The cursor borrows the tree mutably for as long as it lives.
    ///
    /// ```
    /// use searchtree::SearchTree;
    ///
    /// let mut tree: SearchTree<_> = (1..=6).collect();
    ///
    /// // Drop every even key.
    /// let mut cursor = tree.cursor();
    /// while let Some(&key) = cursor.peek_next() {
    ///     if key % 2 == 0 {
    ///         cursor.remove_next()?;
    ///     } else {
    ///         cursor.next_key()?;
    ///     }
    /// }
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
    /// # Ok::<(), searchtree::Error>(())
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, K> {
        Cursor::new(self)
    }

    pub(crate) fn root_link(&self) -> Link<K> {
        self.tree.root
    }

    /// Whether the tree holds `target`.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::SearchTree;
    ///
    /// let mut tree = SearchTree::new();
    /// tree.insert(String::from("kiwi"));
    ///
    /// assert!(tree.contains("kiwi"));
    /// assert!(!tree.contains("lime"));
    /// ```
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .root
            .node()
            .is_some_and(|root| root.contains(target))
    }

    /// Inserts `value` unless an equal key is already present. Returns whether the
    /// tree changed.
    pub fn insert(&mut self, value: K) -> bool
    where
        K: Ord,
    {
        let inserted = match self.tree.root.0 {
            None => {
                self.tree.root = Link::leaf(value);
                true
            }
            // SAFETY: `root` is owned by `self.tree`, which we borrow mutably, so no
            // other reference into the tree exists.
            Some(root) => unsafe {
                match value.cmp(Node::key(root)) {
                    Ordering::Less => Node::insert_below(root, Side::Left, value),
                    Ordering::Equal => false,
                    Ordering::Greater => Node::insert_below(root, Side::Right, value),
                }
            },
        };
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes the key equal to `value`. Returns whether the tree held it.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::SearchTree;
    ///
    /// let mut tree: SearchTree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// // 5 has two children, so its predecessor 4 takes its place.
    /// assert!(tree.remove(&5));
    /// assert_eq!(tree.root_key(), Ok(&4));
    /// assert!(!tree.remove(&5));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes the key equal to `value` and returns it.
    pub fn take<Q>(&mut self, value: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let detached = self.detach(value)?;
        // SAFETY: `detach` unlinked the node and cleared its children, and nothing
        // else points at it.
        Some(unsafe { Node::into_key(detached) })
    }

    /// Unlinks the node holding `value` without freeing it. The returned node's
    /// child links are cleared.
    ///
    /// `value` may borrow from the very node being unlinked: only the child links of
    /// nodes are written here, never a key.
    pub(crate) fn detach<Q>(&mut self, value: &Q) -> Option<NonNull<Node<K>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.tree.root.0?;
        // SAFETY: Every pointer reached from the root is live and owned by this tree,
        // which we borrow mutably.
        let detached = unsafe {
            match value.cmp(Node::key(root).borrow()) {
                Ordering::Less => Node::detach_below(root, Side::Left, value),
                Ordering::Greater => Node::detach_below(root, Side::Right, value),
                Ordering::Equal => {
                    // No parent to repoint: the root handle itself takes the
                    // replacement.
                    self.tree.root = Node::unlink::<Q>(root);
                    Some(root)
                }
            }
        };
        if detached.is_some() {
            self.len -= 1;
        }
        detached
    }
}

impl<K> Node<K> {
    fn contains<Q>(&self, target: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match target.cmp(self.key.borrow()) {
            Ordering::Less => self.left().is_some_and(|n| n.contains(target)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().is_some_and(|n| n.contains(target)),
        }
    }

    /// Inserts `value` into the subtree hanging from the `side` slot of `parent`.
    ///
    /// # Safety
    ///
    /// `parent` must be a live node of a tree the caller borrows mutably.
    unsafe fn insert_below(parent: NonNull<Self>, side: Side, value: K) -> bool
    where
        K: Ord,
    {
        // SAFETY: Guaranteed by the caller, and every child link of a live node is
        // either empty or live.
        unsafe {
            let Some(local_root) = Node::child(parent, side).0 else {
                Node::set_child(parent, side, Link::leaf(value));
                if cfg!(debug_assertions) {
                    Node::assert_ordered_children::<K>(parent);
                }
                return true;
            };
            match value.cmp(Node::key(local_root)) {
                Ordering::Less => Node::insert_below(local_root, Side::Left, value),
                Ordering::Equal => false,
                Ordering::Greater => Node::insert_below(local_root, Side::Right, value),
            }
        }
    }

    /// Searches the subtree hanging from the `side` slot of `parent` for `value`
    /// and unlinks the node holding it.
    ///
    /// # Safety
    ///
    /// `parent` must be a live node of a tree the caller borrows mutably.
    unsafe fn detach_below<Q>(
        parent: NonNull<Self>,
        side: Side,
        value: &Q,
    ) -> Option<NonNull<Self>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // SAFETY: Guaranteed by the caller, and every child link of a live node is
        // either empty or live.
        unsafe {
            let local_root = Node::child(parent, side).0?;
            match value.cmp(Node::key(local_root).borrow()) {
                Ordering::Less => Node::detach_below(local_root, Side::Left, value),
                Ordering::Greater => Node::detach_below(local_root, Side::Right, value),
                Ordering::Equal => {
                    Node::set_child(parent, side, Node::unlink::<Q>(local_root));
                    Some(local_root)
                }
            }
        }
    }

    /// Disconnects `node` from its children and returns the link that should take
    /// its place under its parent:
    ///
    /// - no left child: the right child (which may be empty)
    /// - no right child: the left child
    /// - two children: the in-order predecessor, spliced out of the left subtree
    ///   and given both of `node`'s subtrees
    ///
    /// # Safety
    ///
    /// `node` must be a live node of a tree the caller borrows mutably. The caller
    /// must install the returned link in the slot that held `node`.
    unsafe fn unlink<Q>(node: NonNull<Self>) -> Link<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // SAFETY: Guaranteed by the caller.
        unsafe {
            let left = Node::child(node, Side::Left);
            let right = Node::child(node, Side::Right);
            Node::set_child(node, Side::Left, Link::none());
            Node::set_child(node, Side::Right, Link::none());

            match (left.0, right.0) {
                (None, _) => right,
                (_, None) => left,
                (Some(left_root), Some(_)) => {
                    let predecessor = Node::splice_predecessor::<Q>(left_root, right);
                    Link(Some(predecessor))
                }
            }
        }
    }

    /// Finds the rightmost node below `left_root`, detaches it and rebuilds it as
    /// the root of a subtree holding everything left of it plus `right`.
    ///
    /// ```text
    ///        (deleted)                 pred
    ///        /      \                 /    \
    ///   left_root   right   ->   left_root  right
    ///      /  \                    /  \
    ///     a   parent              a   parent
    ///          /  \                    /
    ///         b   pred                b
    ///             /                     \
    ///            c                       c  (now parent's right child)
    /// ```
    ///
    /// # Safety
    ///
    /// `left_root` must be a live node already detached from its former parent and
    /// `right` must be a live subtree.
    unsafe fn splice_predecessor<Q>(left_root: NonNull<Self>, right: Link<K>) -> NonNull<Self>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // SAFETY: Guaranteed by the caller.
        unsafe {
            let mut parent = None;
            let mut predecessor = left_root;
            while let Some(next) = Node::child(predecessor, Side::Right).0 {
                parent = Some(predecessor);
                predecessor = next;
            }

            // When the predecessor is `left_root` itself it keeps its own left
            // subtree. Otherwise its left subtree moves up to its parent and it adopts
            // `left_root`.
            if let Some(parent) = parent {
                Node::set_child(parent, Side::Right, Node::child(predecessor, Side::Left));
                Node::set_child(predecessor, Side::Left, Link(Some(left_root)));
            }
            Node::set_child(predecessor, Side::Right, right);

            if cfg!(debug_assertions) {
                if let Some(parent) = parent {
                    Node::assert_ordered_children::<Q>(parent);
                }
                Node::assert_ordered_children::<Q>(predecessor);
            }
            predecessor
        }
    }

    /// # Safety
    ///
    /// `node` must be live.
    unsafe fn assert_ordered_children<Q>(node: NonNull<Self>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        // SAFETY: Guaranteed by the caller. Only shared, statement long borrows of
        // keys are created.
        unsafe {
            let key: &Q = Node::key(node).borrow();
            if let Some(left) = Node::child(node, Side::Left).0 {
                let left_key: &Q = Node::key(left).borrow();
                assert!(left_key < key);
            }
            if let Some(right) = Node::child(node, Side::Right).0 {
                let right_key: &Q = Node::key(right).borrow();
                assert!(key < right_key);
            }
        }
    }
}
