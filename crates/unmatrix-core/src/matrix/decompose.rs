//! Decomposition of an affine 4×4 matrix into translation, axis-angle
//! rotation and per-axis scale.
//!
//! # Algorithm
//! 1. Translation is the last column: components 12, 13, 14.
//! 2. Scale per axis is the length of each of the first three columns.
//! 3. Each column is divided by its scale (skipped when the scale is zero),
//!    leaving the rotation block `R`.
//! 4. The axis is read from `R` with a trace-based branch table:
//!
//! ```text
//! angle = acos((trace − 1) / 2)
//!
//! trace > 0          → s = 2√(trace + 1)
//!                      axis = (R21 − R12, R02 − R20, R10 − R01) / s
//! R00 largest        → s = 2√(1 + R00 − R11 − R22)
//!                      axis = (s/4, (R01 + R10)/s, (R02 + R20)/s)
//! R11 largest        → s = 2√(1 + R11 − R00 − R22)
//!                      axis = ((R01 + R10)/s, s/4, (R12 + R21)/s)
//! otherwise          → s = 2√(1 + R22 − R00 − R11)
//!                      axis = ((R02 + R20)/s, (R12 + R21)/s, s/4)
//! ```
//!
//! Each branch divides by the largest available quantity, which keeps the
//! extraction stable near 180° and near the coordinate axes.
//!
//! # Limitations
//! - Shear is not detected. Non-orthogonal columns are normalized and read
//!   as if they were a rotation.
//! - The bottom row (perspective) is never inspected.
//! - Reflections (negative determinant) are not detected.
//! - In the `trace <= 0` branches the dominant axis component is always
//!   positive. A rotation past 120° whose dominant axis component is negative
//!   therefore comes back with the axis flipped.

use glam::{DMat3, DVec3};

use crate::format::{EPSILON, snap};
use crate::matrix::Matrix16;

/// A rotation of `angle` radians about a unit `axis`.
///
/// The zero rotation carries a zero axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAngle {
    pub axis: DVec3,
    pub angle: f64,
}

impl AxisAngle {
    pub const IDENTITY: Self = Self {
        axis: DVec3::ZERO,
        angle: 0.0,
    };
}

/// Translation, rotation and scale recovered from one matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecomposedTransform {
    pub translate: DVec3,
    pub rotate: AxisAngle,
    pub scale: DVec3,
}

impl DecomposedTransform {
    pub const IDENTITY: Self = Self {
        translate: DVec3::ZERO,
        rotate: AxisAngle::IDENTITY,
        scale: DVec3::ONE,
    };

    /// `false` when a component overflowed (e.g. scale of a huge column).
    pub fn is_finite(&self) -> bool {
        self.translate.is_finite()
            && self.rotate.axis.is_finite()
            && self.rotate.angle.is_finite()
            && self.scale.is_finite()
    }
}

impl Matrix16 {
    /// Split this matrix into translation, rotation and scale.
    pub fn decompose(&self) -> DecomposedTransform {
        let m = self.as_array();

        let translate = snap_vec(DVec3::new(m[12], m[13], m[14]));

        let columns = [
            DVec3::new(m[0], m[1], m[2]),
            DVec3::new(m[4], m[5], m[6]),
            DVec3::new(m[8], m[9], m[10]),
        ];
        let scale = snap_vec(DVec3::new(
            columns[0].length(),
            columns[1].length(),
            columns[2].length(),
        ));

        let unscaled = [
            unscale_column(columns[0], scale.x),
            unscale_column(columns[1], scale.y),
            unscale_column(columns[2], scale.z),
        ];
        let rotation = DMat3::from_cols(unscaled[0], unscaled[1], unscaled[2]);

        DecomposedTransform {
            translate,
            rotate: axis_angle(&rotation),
            scale,
        }
    }
}

fn unscale_column(column: DVec3, scale: f64) -> DVec3 {
    if scale == 0.0 { column } else { column / scale }
}

/// Axis-angle of a (nominally orthonormal) rotation block.
fn axis_angle(r: &DMat3) -> AxisAngle {
    // Row/column access into the column-major block.
    let at = |row: usize, col: usize| r.col(col)[row];

    let (r00, r11, r22) = (at(0, 0), at(1, 1), at(2, 2));
    let trace = r00 + r11 + r22;
    let angle = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0).acos();

    let axis = if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        DVec3::new(
            (at(2, 1) - at(1, 2)) / s,
            (at(0, 2) - at(2, 0)) / s,
            (at(1, 0) - at(0, 1)) / s,
        )
    } else if r00 > r11 && r00 > r22 {
        let s = (1.0 + r00 - r11 - r22).sqrt() * 2.0;
        DVec3::new(
            0.25 * s,
            (at(0, 1) + at(1, 0)) / s,
            (at(0, 2) + at(2, 0)) / s,
        )
    } else if r11 > r22 {
        let s = (1.0 + r11 - r00 - r22).sqrt() * 2.0;
        DVec3::new(
            (at(0, 1) + at(1, 0)) / s,
            0.25 * s,
            (at(1, 2) + at(2, 1)) / s,
        )
    } else {
        let s = (1.0 + r22 - r00 - r11).sqrt() * 2.0;
        DVec3::new(
            (at(0, 2) + at(2, 0)) / s,
            (at(1, 2) + at(2, 1)) / s,
            0.25 * s,
        )
    };

    let length = axis.length();
    if length.is_nan() || length < EPSILON || snap(angle) == 0.0 {
        return AxisAngle::IDENTITY;
    }

    AxisAngle {
        axis: snap_vec(axis / length),
        angle,
    }
}

fn snap_vec(v: DVec3) -> DVec3 {
    DVec3::new(snap(v.x), snap(v.y), snap(v.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f64 = 1e-9;

    fn assert_vec_close(actual: DVec3, expected: DVec3, what: &str) {
        for i in 0..3 {
            assert!(
                (actual[i] - expected[i]).abs() < TOLERANCE,
                "{what}[{i}]: got {:.12}, expected {:.12}",
                actual[i],
                expected[i]
            );
        }
    }

    fn cols(m: [f64; 16]) -> Matrix16 {
        Matrix16::from_cols_array(m)
    }

    #[test]
    fn test_identity_decomposes_to_identity() {
        let d = Matrix16::IDENTITY.decompose();
        assert_eq!(d, DecomposedTransform::IDENTITY);
    }

    #[test]
    fn test_pure_translation() {
        let d = cols([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            100.0, 50.0, 20.0, 1.0,
        ])
        .decompose();
        assert_eq!(d.translate, DVec3::new(100.0, 50.0, 20.0));
        assert_eq!(d.rotate, AxisAngle::IDENTITY);
        assert_eq!(d.scale, DVec3::ONE);
    }

    #[test]
    fn test_non_uniform_scale() {
        let d = cols([
            2.0, 0.0, 0.0, 0.0, //
            0.0, 1.5, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_eq!(d.scale, DVec3::new(2.0, 1.5, 1.0));
        assert_eq!(d.rotate, AxisAngle::IDENTITY);
        assert_eq!(d.translate, DVec3::ZERO);
    }

    #[test]
    fn test_quarter_turn_about_z() {
        // Column 0 is +Y, column 1 is -X.
        let d = cols([
            0.0, 1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_vec_close(d.rotate.axis, DVec3::Z, "axis");
        assert!((d.rotate.angle - FRAC_PI_2).abs() < TOLERANCE);
        assert_vec_close(d.scale, DVec3::ONE, "scale");
    }

    #[test]
    fn test_half_turn_about_x_uses_x_branch() {
        let d = cols([
            1.0, 0.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_vec_close(d.rotate.axis, DVec3::X, "axis");
        assert!((d.rotate.angle - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_half_turn_about_y_uses_y_branch() {
        let d = cols([
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_vec_close(d.rotate.axis, DVec3::Y, "axis");
        assert!((d.rotate.angle - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_half_turn_about_z_uses_z_branch() {
        let d = cols([
            -1.0, 0.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_vec_close(d.rotate.axis, DVec3::Z, "axis");
        assert!((d.rotate.angle - PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_scale_is_removed_before_rotation() {
        // Quarter turn about Z with scale (2, 3, 1) and a translation.
        let d = cols([
            0.0, 2.0, 0.0, 0.0, //
            -3.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            10.0, 20.0, 0.0, 1.0,
        ])
        .decompose();
        assert_vec_close(d.scale, DVec3::new(2.0, 3.0, 1.0), "scale");
        assert_vec_close(d.rotate.axis, DVec3::Z, "axis");
        assert!((d.rotate.angle - FRAC_PI_2).abs() < TOLERANCE);
        assert_vec_close(d.translate, DVec3::new(10.0, 20.0, 0.0), "translate");
    }

    #[test]
    fn test_zero_scale_axis_is_guarded() {
        let d = cols([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert_eq!(d.scale, DVec3::new(1.0, 0.0, 1.0));
        assert!(d.is_finite());
    }

    #[test]
    fn test_all_zero_matrix_stays_finite() {
        let d = cols([0.0; 16]).decompose();
        assert_eq!(d.scale, DVec3::ZERO);
        assert_eq!(d.translate, DVec3::ZERO);
        assert!(d.is_finite());
    }

    #[test]
    fn test_translation_noise_snaps_to_zero() {
        let d = cols([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            1e-12, -3e-11, 0.0, 1.0,
        ])
        .decompose();
        assert_eq!(d.translate, DVec3::ZERO);
    }

    #[test]
    fn test_perspective_row_is_ignored() {
        let d = cols([
            1.0, 0.0, 0.0, 0.5, //
            0.0, 1.0, 0.0, 0.25, //
            0.0, 0.0, 1.0, -0.001, //
            0.0, 0.0, 0.0, 2.0,
        ])
        .decompose();
        assert_eq!(d, DecomposedTransform::IDENTITY);
    }

    #[test]
    fn test_overflowing_column_is_not_finite() {
        let d = cols([
            1e200, 1e200, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
        .decompose();
        assert!(!d.is_finite());
    }
}
