//! # evo-primitives: Generic Value Primitives
//!
//! The leaf utility layer of an evolutionary-computation stack: small,
//! generic value types that genomes, substrates and checkpoints are built
//! from.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: `Vector4`, `BoundedValue` are `Copy` DTOs
//! 2. **Explicit casts**: cross-type arithmetic states its conversion rule
//! 3. **One wire format**: whitespace-separated tokens, fixed field order
//! 4. **Arena trees**: `SiblingTree` addresses nodes by `NodeId`, never by pointer
//!
//! ## Quick Start
//!
//! ```rust
//! use evo_primitives::{Vector4, BoundedValue, SiblingTree};
//!
//! # fn example() -> evo_primitives::Result<()> {
//! let mut v = Vector4::new(1.0, 2.0, 2.0, 0.0);
//! assert_eq!(v.magnitude(), 3.0);
//! v.normalize();
//!
//! let progress: BoundedValue<u32> = "3 10".parse()?;
//! assert_eq!(progress.to_string(), "3 10");
//!
//! let mut tree = SiblingTree::with_root("genome");
//! let root = tree.root().unwrap();
//! tree.append_child(root, "neuron")?;
//! let order: Vec<_> = tree.depth_first().map(|(_, d)| *d).collect();
//! assert_eq!(order, ["genome", "neuron"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Text Formats
//!
//! | Type | Form |
//! |------|------|
//! | `Vector4<T>` | `"<x> <y> <z> <w>"` |
//! | `BoundedValue<T>` | `"<current> <maximum>"` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod text;
pub mod tree;

// ============================================================================
// Re-exports: Model (the value types)
// ============================================================================

pub use model::{
    BoundedValue, Vector4, Scalar, HasXyzw,
    convert_vector4, NORMALIZE_EPSILON,
};

// ============================================================================
// Re-exports: Text
// ============================================================================

pub use text::{
    TokenStream, TextConfig, ParseMode,
    string_to, try_string_to, to_string, to_string_padded,
    index_from_name, index_from_name_strict,
};

// ============================================================================
// Re-exports: Tree
// ============================================================================

pub use tree::{
    SiblingTree, TreeNode, NodeId,
    DepthFirst, BreadthFirst, Children,
    export_outline, export_json, JSON_DEPTH_LIMIT,
};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Parse error: cannot read {token:?} as {target}")]
    Parse { token: String, target: &'static str },

    #[error("Missing token at position {position}: expected {expected}")]
    MissingToken { position: usize, expected: &'static str },

    #[error("Trailing input after value: {0:?}")]
    TrailingInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid node id: {0}")]
    InvalidNode(NodeId),

    #[error("The root node cannot have siblings")]
    RootSibling,

    #[error("Tree deeper than {limit} levels cannot be exported as JSON")]
    TooDeep { limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
