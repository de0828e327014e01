//! Lazy walks over a `SiblingTree`.
//!
//! All iterators borrow the tree, yield `(NodeId, &D)`, and stay exhausted
//! once they return `None` until `reset` is called.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::{NodeId, SiblingTree};

/// Pending `(node, depth)` pairs. Sibling chains are pushed one link at a
/// time, so the stack grows with tree height, not width.
type Stack = SmallVec<[(NodeId, usize); 16]>;

// ============================================================================
// Children
// ============================================================================

/// Walks one sibling chain.
pub struct Children<'a, D> {
    tree: &'a SiblingTree<D>,
    next: Option<NodeId>,
}

impl<'a, D> Children<'a, D> {
    pub(crate) fn new(tree: &'a SiblingTree<D>, first: Option<NodeId>) -> Self {
        Self { tree, next: first }
    }
}

impl<'a, D> Iterator for Children<'a, D> {
    type Item = (NodeId, &'a D);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let node = self.tree.node(id)?;
        self.next = node.sibling;
        Some((id, &node.data))
    }
}

impl<D> FusedIterator for Children<'_, D> {}

// ============================================================================
// Depth-first (pre-order)
// ============================================================================

/// Pre-order: a node, then its whole first-child subtree, then the rest of
/// its children.
pub struct DepthFirst<'a, D> {
    tree: &'a SiblingTree<D>,
    start: Option<NodeId>,
    stack: Stack,
}

impl<'a, D> DepthFirst<'a, D> {
    pub(crate) fn new(tree: &'a SiblingTree<D>, start: Option<NodeId>) -> Self {
        let mut walk = Self { tree, start, stack: Stack::new() };
        walk.reset();
        walk
    }

    /// Rewind to the starting node.
    pub fn reset(&mut self) {
        self.stack.clear();
        if let Some(start) = self.start {
            self.stack.push((start, 0));
        }
    }

    /// Like `next`, also reporting depth relative to the start node.
    pub fn next_with_depth(&mut self) -> Option<(usize, NodeId, &'a D)> {
        loop {
            let (id, depth) = self.stack.pop()?;
            // Dangling links only come from hand-edited serialized trees.
            let Some(node) = self.tree.node(id) else { continue };

            // The start node's siblings are outside the walked subtree.
            if Some(id) != self.start {
                if let Some(sibling) = node.sibling {
                    self.stack.push((sibling, depth));
                }
            }
            if let Some(child) = node.child {
                self.stack.push((child, depth + 1));
            }
            return Some((depth, id, &node.data));
        }
    }
}

impl<'a, D> Iterator for DepthFirst<'a, D> {
    type Item = (NodeId, &'a D);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(_, id, data)| (id, data))
    }
}

impl<D> FusedIterator for DepthFirst<'_, D> {}

// ============================================================================
// Breadth-first (level order)
// ============================================================================

/// Level order: every node at depth `n` before any node at depth `n + 1`,
/// each level in sibling-chain order.
pub struct BreadthFirst<'a, D> {
    tree: &'a SiblingTree<D>,
    start: Option<NodeId>,
    queue: VecDeque<(NodeId, usize)>,
}

impl<'a, D> BreadthFirst<'a, D> {
    pub(crate) fn new(tree: &'a SiblingTree<D>, start: Option<NodeId>) -> Self {
        let mut walk = Self { tree, start, queue: VecDeque::new() };
        walk.reset();
        walk
    }

    pub fn reset(&mut self) {
        self.queue.clear();
        if let Some(start) = self.start {
            self.queue.push_back((start, 0));
        }
    }

    pub fn next_with_depth(&mut self) -> Option<(usize, NodeId, &'a D)> {
        loop {
            let (id, depth) = self.queue.pop_front()?;
            let Some(node) = self.tree.node(id) else { continue };
            for (child, _) in Children::new(self.tree, node.child) {
                self.queue.push_back((child, depth + 1));
            }
            return Some((depth, id, &node.data));
        }
    }
}

impl<'a, D> Iterator for BreadthFirst<'a, D> {
    type Item = (NodeId, &'a D);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_depth().map(|(_, id, data)| (id, data))
    }
}

impl<D> FusedIterator for BreadthFirst<'_, D> {}
