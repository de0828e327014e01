//! # Value Model
//!
//! Generic value types that cross every boundary of the host system:
//! genome ↔ substrate ↔ checkpoint file.
//!
//! Design rule: pure data. No I/O, no shared state, no locks.
//! Text I/O goes through `crate::text::TokenStream` only.

pub mod scalar;
pub mod vector4;
pub mod bounded;

pub use scalar::Scalar;
pub use vector4::{Vector4, HasXyzw, convert_vector4, NORMALIZE_EPSILON};
pub use bounded::BoundedValue;
