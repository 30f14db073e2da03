//! The owned cell every tree in this crate is built from.
//!
//! Children are held through [`Link`]s, which are `NonNull` pointers to boxed
//! nodes. A linked node is owned by exactly one parent link (or by the tree's root
//! link) and is never moved in memory while it is linked, so a `NonNull` taken
//! from a link stays valid until that node is detached and freed. The iterators
//! rely on this to keep node handles across removals elsewhere in the tree.

use std::fmt;
use std::ptr::NonNull;

use crate::stack::Stack;

/// Which child slot of a parent a node occupies. Threaded through recursion in
/// place of a parent pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// An optional pointer to a heap allocated [`Node`]. Ownership is by convention:
/// whoever holds the link that reached a node is responsible for freeing it (see
/// [`Link::free`] and [`Node::into_key`]).
pub(crate) struct Link<K>(pub(crate) Option<NonNull<Node<K>>>);

impl<K> Clone for Link<K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Link<K> {}

impl<K> Link<K> {
    pub(crate) fn none() -> Self {
        Self(None)
    }

    /// Allocates a childless node holding `key`.
    pub(crate) fn leaf(key: K) -> Self {
        Self::with_children(key, Self::none(), Self::none())
    }

    pub(crate) fn with_children(key: K, left: Self, right: Self) -> Self {
        let node = Box::new(Node { key, left, right });
        Self(Some(NonNull::from(Box::leak(node))))
    }

    pub(crate) fn node(&self) -> Option<&Node<K>> {
        // SAFETY: A non-empty link always points at a live node allocated by
        // `Link::with_children`. Nodes are only freed after being unlinked, so the
        // node outlives any borrow of the link that reached it.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Recursively copies every node reachable from this link into a fresh
    /// allocation.
    pub(crate) fn deep_copy(&self) -> Self
    where
        K: Clone,
    {
        match self.node() {
            None => Self::none(),
            Some(node) => Self::with_children(
                node.key.clone(),
                node.left.deep_copy(),
                node.right.deep_copy(),
            ),
        }
    }

    /// Frees every node reachable from this link. Uses an explicit stack so that
    /// degenerate, list shaped trees can't overflow the call stack.
    ///
    /// # Safety
    ///
    /// The caller must own this link and must not dereference it, or any pointer
    /// to a node below it, afterwards.
    pub(crate) unsafe fn free(self) {
        let mut pending = Stack::new();
        if let Some(root) = self.0 {
            pending.push(root);
        }
        while let Ok(ptr) = pending.pop() {
            // SAFETY: Every pointer on `pending` was reached through exactly one
            // owning link and is freed exactly once, here. The caller guarantees
            // nothing else uses these nodes.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            if let Some(left) = node.left.0 {
                pending.push(left);
            }
            if let Some(right) = node.right.0 {
                pending.push(right);
            }
        }
    }
}

/// One key and two (possibly empty) child subtrees.
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    // The helpers below work on raw node pointers and touch a single field at a
    // time, so no reference to a whole node is ever created while the tree is
    // being relinked. That keeps handles held by a live `Cursor` valid.

    /// Reads the link in the `side` slot of `node`.
    ///
    /// # Safety
    ///
    /// `node` must point at a live node.
    pub(crate) unsafe fn child(node: NonNull<Self>, side: Side) -> Link<K> {
        // SAFETY: Guaranteed by the caller.
        unsafe {
            match side {
                Side::Left => (*node.as_ptr()).left,
                Side::Right => (*node.as_ptr()).right,
            }
        }
    }

    /// Overwrites the link in the `side` slot of `node`. The previous link is
    /// forgotten, not freed.
    ///
    /// # Safety
    ///
    /// `node` must point at a live node and nothing may hold a reference to that
    /// slot.
    pub(crate) unsafe fn set_child(node: NonNull<Self>, side: Side, child: Link<K>) {
        // SAFETY: Guaranteed by the caller.
        unsafe {
            match side {
                Side::Left => (*node.as_ptr()).left = child,
                Side::Right => (*node.as_ptr()).right = child,
            }
        }
    }

    /// Borrows the key of `node` for a caller chosen lifetime.
    ///
    /// # Safety
    ///
    /// `node` must stay live, and its key must not be moved out, for all of `'a`.
    pub(crate) unsafe fn key<'a>(node: NonNull<Self>) -> &'a K {
        // SAFETY: Guaranteed by the caller.
        unsafe { &(*node.as_ptr()).key }
    }

    /// Frees a detached node and hands back its key.
    ///
    /// # Safety
    ///
    /// `node` must already be unlinked from its tree, must not be referenced again,
    /// and its child links must no longer own anything (the children have been
    /// relinked elsewhere).
    pub(crate) unsafe fn into_key(node: NonNull<Self>) -> K {
        // SAFETY: Guaranteed by the caller. The node was allocated by
        // `Link::with_children` through `Box`.
        let node = unsafe { Box::from_raw(node.as_ptr()) };
        node.key
    }
}
