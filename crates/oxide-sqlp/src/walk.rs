//! Tree traversal and copying.
//!
//! The functions here are generic over [`Walk`], which is implemented by
//! [`Node`] and [`Nodes`]. Composites (sequences, parens, brackets and braces)
//! expose their children; every other node, including caller-defined
//! [`Fragment`](crate::Fragment) leaves, is a leaf.
//!
//! Walks come in two depths. Shallow walks visit the direct children of a
//! composite. Deep walks descend through every composite and visit leaves
//! only, in document order. The `_mut` variants hand out `&mut Node` slots so
//! the callback can replace a node in place, and the `try_` variants stop at
//! the first error returned by the callback.
//!
//! Deep walks and leaf lookups recurse once per nesting level. Trees built
//! by the parser nest at most [`MAX_DEPTH`](crate::MAX_DEPTH) levels deep.

use std::convert::Infallible;

use crate::ast::{Node, Nodes};

/// Access to the children of a tree node.
pub trait Walk {
    /// Returns the direct children, or `None` for a leaf.
    fn children(&self) -> Option<&[Node]>;

    /// Returns the direct children for editing, or `None` for a leaf.
    fn children_mut(&mut self) -> Option<&mut [Node]>;

    /// Returns `self` as a node, if it is one.
    ///
    /// Walks started on a leaf visit the leaf itself.
    fn as_node(&self) -> Option<&Node> {
        None
    }

    /// Mutable counterpart of [`Walk::as_node`].
    fn as_node_mut(&mut self) -> Option<&mut Node> {
        None
    }
}

impl Walk for Node {
    fn children(&self) -> Option<&[Node]> {
        self.nodes().map(|nodes| nodes.0.as_slice())
    }

    fn children_mut(&mut self) -> Option<&mut [Node]> {
        self.nodes_mut().map(|nodes| nodes.0.as_mut_slice())
    }

    fn as_node(&self) -> Option<&Node> {
        Some(self)
    }

    fn as_node_mut(&mut self) -> Option<&mut Node> {
        Some(self)
    }
}

impl Walk for Nodes {
    fn children(&self) -> Option<&[Node]> {
        Some(self.0.as_slice())
    }

    fn children_mut(&mut self) -> Option<&mut [Node]> {
        Some(self.0.as_mut_slice())
    }
}

/// Produces a copy that shares no mutable storage with the original.
pub trait CopyDeep {
    /// Returns a structurally identical, independent copy.
    #[must_use]
    fn copy_deep(&self) -> Self;
}

impl CopyDeep for Node {
    fn copy_deep(&self) -> Self {
        // Nodes own their payloads; `Fragment`s are cloned through
        // `clone_fragment`.
        self.clone()
    }
}

impl CopyDeep for Nodes {
    fn copy_deep(&self) -> Self {
        self.iter().map(CopyDeep::copy_deep).collect()
    }
}

/// Calls `f` for each direct child of a composite, or for the root itself
/// when it is a leaf.
pub fn walk_shallow<W, F>(root: &W, mut f: F)
where
    W: Walk + ?Sized,
    F: FnMut(&Node),
{
    if let Some(children) = root.children() {
        children.iter().for_each(f);
    } else if let Some(node) = root.as_node() {
        f(node);
    }
}

/// Like [`walk_shallow`], handing out mutable slots.
pub fn walk_shallow_mut<W, F>(root: &mut W, mut f: F)
where
    W: Walk + ?Sized,
    F: FnMut(&mut Node),
{
    unwrap_infallible(try_walk_shallow_mut(root, |node| {
        f(node);
        Ok(())
    }));
}

/// Like [`walk_shallow_mut`], stopping at the first error returned by `f`.
///
/// # Errors
///
/// Returns the first error returned by `f`.
pub fn try_walk_shallow_mut<W, F, E>(root: &mut W, mut f: F) -> Result<(), E>
where
    W: Walk + ?Sized,
    F: FnMut(&mut Node) -> Result<(), E>,
{
    if root.children().is_none() {
        return root.as_node_mut().map_or(Ok(()), f);
    }
    root.children_mut()
        .into_iter()
        .flatten()
        .try_for_each(&mut f)
}

/// Calls `f` for every leaf under `root`, in document order. Composites are
/// transparent: only their leaves are visited.
pub fn walk_deep<W, F>(root: &W, mut f: F)
where
    W: Walk + ?Sized,
    F: FnMut(&Node),
{
    fn visit<F: FnMut(&Node)>(node: &Node, f: &mut F) {
        match node.children() {
            Some(children) => children.iter().for_each(|child| visit(child, f)),
            None => f(node),
        }
    }

    if let Some(children) = root.children() {
        children.iter().for_each(|child| visit(child, &mut f));
    } else if let Some(node) = root.as_node() {
        f(node);
    }
}

/// Like [`walk_deep`], handing out mutable slots.
pub fn walk_deep_mut<W, F>(root: &mut W, mut f: F)
where
    W: Walk + ?Sized,
    F: FnMut(&mut Node),
{
    unwrap_infallible(try_walk_deep_mut(root, |node| {
        f(node);
        Ok(())
    }));
}

/// Like [`walk_deep_mut`], stopping at the first error returned by `f`.
///
/// # Errors
///
/// Returns the first error returned by `f`.
pub fn try_walk_deep_mut<W, F, E>(root: &mut W, mut f: F) -> Result<(), E>
where
    W: Walk + ?Sized,
    F: FnMut(&mut Node) -> Result<(), E>,
{
    fn visit<F, E>(node: &mut Node, f: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut Node) -> Result<(), E>,
    {
        if node.children().is_none() {
            return f(node);
        }
        node.children_mut()
            .into_iter()
            .flatten()
            .try_for_each(|child| visit(child, f))
    }

    if root.children().is_none() {
        return root.as_node_mut().map_or(Ok(()), f);
    }
    root.children_mut()
        .into_iter()
        .flatten()
        .try_for_each(|child| visit(child, &mut f))
}

/// Returns an independent copy of `root`.
///
/// Mutating either tree afterwards, including through the `_mut` walks,
/// never affects the other.
#[must_use]
pub fn copy_deep<T: CopyDeep>(root: &T) -> T {
    root.copy_deep()
}

/// Returns the first leaf in document order, descending through composites.
///
/// Empty composites contain no leaves and are skipped. Returns `None` when
/// the tree has no leaves at all.
#[must_use]
pub fn first_leaf<W: Walk + ?Sized>(root: &W) -> Option<&Node> {
    match root.children() {
        Some(children) => children.iter().find_map(first_leaf),
        None => root.as_node(),
    }
}

/// Returns the last leaf in document order, descending through composites.
///
/// See [`first_leaf`].
#[must_use]
pub fn last_leaf<W: Walk + ?Sized>(root: &W) -> Option<&Node> {
    match root.children() {
        Some(children) => children.iter().rev().find_map(last_leaf),
        None => root.as_node(),
    }
}

/// Mutable counterpart of [`first_leaf`].
#[must_use]
pub fn first_leaf_mut<W: Walk + ?Sized>(root: &mut W) -> Option<&mut Node> {
    if root.children().is_none() {
        return root.as_node_mut();
    }
    root.children_mut()?
        .iter_mut()
        .find_map(first_leaf_mut)
}

/// Mutable counterpart of [`last_leaf`].
#[must_use]
pub fn last_leaf_mut<W: Walk + ?Sized>(root: &mut W) -> Option<&mut Node> {
    if root.children().is_none() {
        return root.as_node_mut();
    }
    root.children_mut()?
        .iter_mut()
        .rev()
        .find_map(last_leaf_mut)
}

fn unwrap_infallible(result: Result<(), Infallible>) {
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
