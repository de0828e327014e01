//! Tree export: dump a `SiblingTree` as an indented outline or nested JSON.
//!
//! ```text
//! // evo-primitives tree outline
//! // Nodes: 4
//!
//! genome
//!   input
//!   output
//!     bias
//! ```
//!
//! The outline is for humans (diffs, logs); JSON is for tooling.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::{Error, Result};
use super::{NodeId, SiblingTree};

/// Write a header plus one line per node, two spaces of indent per level,
/// in depth-first order.
pub fn export_outline<D: Display>(tree: &SiblingTree<D>, writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "// evo-primitives tree outline")?;
    writeln!(writer, "// Nodes: {}", tree.len())?;
    writeln!(writer)?;

    let mut nodes = tree.depth_first();
    while let Some((depth, _, data)) = nodes.next_with_depth() {
        writeln!(writer, "{:indent$}{}", "", data, indent = depth * 2)?;
    }
    Ok(())
}

/// Deepest nesting `export_json` will build. `serde_json::Value` drops and
/// serializes recursively, so deeper documents would exhaust the stack
/// outside this crate.
pub const JSON_DEPTH_LIMIT: usize = 1024;

/// Nest the tree as `{"data": .., "children": [..]}` objects.
/// An empty tree exports as `null`; a tree deeper than
/// [`JSON_DEPTH_LIMIT`] levels is [`Error::TooDeep`].
pub fn export_json<D: Serialize>(tree: &SiblingTree<D>) -> Result<Value> {
    let Some(root) = tree.root() else {
        return Ok(Value::Null);
    };

    // Post-order assembly on an explicit stack: a frame is finished once its
    // child cursor runs off the end of the sibling chain.
    let mut stack = vec![Frame::open(tree, root)?];
    while let Some(mut top) = stack.pop() {
        match top.next_child {
            Some(child) => {
                top.next_child = tree.next_sibling(child)?;
                stack.push(top);
                if stack.len() >= JSON_DEPTH_LIMIT {
                    return Err(Error::TooDeep { limit: JSON_DEPTH_LIMIT });
                }
                stack.push(Frame::open(tree, child)?);
            }
            None => {
                let value = json!({ "data": top.data, "children": top.children });
                match stack.last_mut() {
                    Some(parent) => parent.children.push(value),
                    None => return Ok(value),
                }
            }
        }
    }
    Ok(Value::Null)
}

struct Frame {
    data: Value,
    children: Vec<Value>,
    next_child: Option<NodeId>,
}

impl Frame {
    fn open<D: Serialize>(tree: &SiblingTree<D>, id: NodeId) -> Result<Self> {
        Ok(Self {
            data: serde_json::to_value(tree.data(id)?)?,
            children: Vec::new(),
            next_child: tree.first_child(id)?,
        })
    }
}
