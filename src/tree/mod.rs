//! # Sibling/Child Tree
//!
//! An arbitrary-arity tree stored as per-depth linked lists: every node
//! knows its first child and its next sibling, nothing else.
//!
//! ```text
//!   root
//!    │ child
//!    ▼
//!    a ──sibling──▶ b ──sibling──▶ c
//!    │ child                       │ child
//!    ▼                             ▼
//!    d ──sibling──▶ e              f
//! ```
//!
//! Nodes live in an arena owned by [`SiblingTree`] and are addressed by
//! [`NodeId`]. Ids are only meaningful for the tree that issued them.
//! Nodes are never removed individually; `clear` / `set_root` drop the
//! whole arena.

pub mod traversal;
pub mod export;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

pub use traversal::{BreadthFirst, Children, DepthFirst};
pub use export::{export_json, export_outline, JSON_DEPTH_LIMIT};

/// Opaque node identifier (arena index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node: its payload plus the two links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<D> {
    pub data: D,
    child: Option<NodeId>,
    sibling: Option<NodeId>,
}

impl<D> TreeNode<D> {
    fn leaf(data: D) -> Self {
        Self { data, child: None, sibling: None }
    }

    /// First node one depth deeper.
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }

    /// Next node at the same depth.
    pub fn sibling(&self) -> Option<NodeId> {
        self.sibling
    }
}

/// Arena-backed sibling/child tree with a single root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiblingTree<D> {
    nodes: Vec<TreeNode<D>>,
    root: Option<NodeId>,
}

impl<D> Default for SiblingTree<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SiblingTree<D> {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    pub fn with_root(data: D) -> Self {
        let mut tree = Self::new();
        tree.set_root(data);
        tree
    }

    /// Drop every node and start over with a single root.
    pub fn set_root(&mut self, data: D) -> NodeId {
        self.clear();
        let id = self.push(data);
        self.root = Some(id);
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: NodeId) -> Result<&TreeNode<D>> {
        self.nodes.get(id.index()).ok_or_else(|| reject(id))
    }

    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut TreeNode<D>> {
        self.nodes.get_mut(id.index()).ok_or_else(|| reject(id))
    }

    pub fn data(&self, id: NodeId) -> Result<&D> {
        Ok(&self.get(id)?.data)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Result<&mut D> {
        Ok(&mut self.get_mut(id)?.data)
    }

    pub fn first_child(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.child)
    }

    pub fn next_sibling(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(id)?.sibling)
    }

    /// Iterate the child chain of `id`, first child first.
    pub fn children(&self, id: NodeId) -> Result<Children<'_, D>> {
        let first = self.get(id)?.child;
        Ok(Children::new(self, first))
    }

    /// Number of child links between the root and `id`. The root is at 0.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        self.get(id)?;
        let mut nodes = self.depth_first();
        while let Some((depth, node, _)) = nodes.next_with_depth() {
            if node == id {
                return Ok(depth);
            }
        }
        // Allocated but unreachable from the root.
        Err(reject(id))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add `data` as the last child of `parent`.
    ///
    /// Walks the existing child chain, so filling a level of `n` children
    /// this way costs O(n²). [`prepend_child`](Self::prepend_child) is O(1).
    pub fn append_child(&mut self, parent: NodeId, data: D) -> Result<NodeId> {
        let first = self.get(parent)?.child;
        let id = self.push(data);
        match first {
            None => self.nodes[parent.index()].child = Some(id),
            Some(first) => {
                let mut last = first;
                while let Some(next) = self.nodes[last.index()].sibling {
                    last = next;
                }
                self.nodes[last.index()].sibling = Some(id);
            }
        }
        Ok(id)
    }

    /// Add `data` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, data: D) -> Result<NodeId> {
        let first = self.get(parent)?.child;
        let id = self.push(data);
        self.nodes[id.index()].sibling = first;
        self.nodes[parent.index()].child = Some(id);
        Ok(id)
    }

    /// Link `data` directly after `node` in its sibling chain.
    pub fn insert_sibling(&mut self, node: NodeId, data: D) -> Result<NodeId> {
        if self.root == Some(node) {
            debug!(%node, "rejected sibling of root");
            return Err(Error::RootSibling);
        }
        let next = self.get(node)?.sibling;
        let id = self.push(data);
        self.nodes[id.index()].sibling = next;
        self.nodes[node.index()].sibling = Some(id);
        Ok(id)
    }

    fn push(&mut self, data: D) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode::leaf(data));
        id
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Pre-order walk from the root.
    pub fn depth_first(&self) -> DepthFirst<'_, D> {
        DepthFirst::new(self, self.root)
    }

    /// Pre-order walk of the subtree under `start` (its siblings excluded).
    pub fn depth_first_from(&self, start: NodeId) -> Result<DepthFirst<'_, D>> {
        self.get(start)?;
        Ok(DepthFirst::new(self, Some(start)))
    }

    /// Level-order walk from the root.
    pub fn breadth_first(&self) -> BreadthFirst<'_, D> {
        BreadthFirst::new(self, self.root)
    }

    pub fn breadth_first_from(&self, start: NodeId) -> Result<BreadthFirst<'_, D>> {
        self.get(start)?;
        Ok(BreadthFirst::new(self, Some(start)))
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&TreeNode<D>> {
        self.nodes.get(id.index())
    }
}

fn reject(id: NodeId) -> Error {
    debug!(%id, "rejected unknown node id");
    Error::InvalidNode(id)
}
