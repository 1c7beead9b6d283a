//! Unmatrix Core: rewrites CSS `matrix3d(...)` transforms into readable
//! `translate3d` / `rotate3d` / `scale3d` functions.
//!
//! The whole pipeline is a pure function of its input text:
//!
//! ```text
//! stylesheet ─→ scan ─→ parse ─→ decompose ─→ compose ─→ stylesheet
//! ```
//!
//! No I/O, no state kept between calls. Malformed matrices are left as they
//! were.

pub mod compose;
pub mod error;
pub mod format;
pub mod matrix;
pub mod options;
pub mod rewrite;

// Re-exports for convenience.
pub use compose::compose;
pub use error::{OptionsError, ParseError};
pub use format::{DEFAULT_PRECISION, format_number};
pub use glam::DVec3;
pub use matrix::{AxisAngle, DecomposedTransform, Matrix16};
pub use options::TransformOptions;
pub use rewrite::{Rewrite, matrix3d_to_transform, rewrite, transform};
