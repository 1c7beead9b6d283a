//! 4×4 homogeneous matrices as written in CSS `matrix3d(...)`.

pub mod decompose;
pub mod parse;

pub use decompose::{AxisAngle, DecomposedTransform};

/// The 16 components of a `matrix3d(...)` value, column-major.
///
/// Columns 0–2 hold the linear part, column 3 the translation
/// (`[12]`, `[13]`, `[14]`). Nothing is assumed about the algebraic validity
/// of the matrix. The bottom row is kept but never inspected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix16([f64; 16]);

impl Matrix16 {
    /// The identity transform.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Wrap 16 column-major components.
    pub const fn from_cols_array(components: [f64; 16]) -> Self {
        Self(components)
    }

    /// The components in column-major order.
    pub const fn as_array(&self) -> &[f64; 16] {
        &self.0
    }
}

impl From<[f64; 16]> for Matrix16 {
    fn from(components: [f64; 16]) -> Self {
        Self(components)
    }
}
