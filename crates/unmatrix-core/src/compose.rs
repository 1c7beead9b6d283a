//! Rendering of a [`DecomposedTransform`] as a CSS transform value.
//!
//! Functions are emitted in a fixed order and identity parts are omitted:
//!
//! ```text
//! translate3d(Xpx, Ypx, Zpx) rotate3d(ax, ay, az, θdeg) scale3d(sx, sy, sz)
//! ```
//!
//! A transform with no emitted part renders as `none`.

use std::fmt;

use crate::format::{DEFAULT_PRECISION, EPSILON, format_number};
use crate::matrix::DecomposedTransform;

/// Compose the CSS value for `transform`, numbers rounded to `precision`.
pub fn compose(transform: &DecomposedTransform, precision: usize) -> String {
    let num = |v: f64| format_number(v, precision);
    let mut functions = Vec::with_capacity(3);

    let t = transform.translate;
    if [t.x, t.y, t.z].iter().any(|v| v.abs() >= EPSILON) {
        functions.push(format!(
            "translate3d({}px, {}px, {}px)",
            num(t.x),
            num(t.y),
            num(t.z)
        ));
    }

    let rotate = transform.rotate;
    if rotate.angle != 0.0 {
        functions.push(format!(
            "rotate3d({}, {}, {}, {}deg)",
            num(rotate.axis.x),
            num(rotate.axis.y),
            num(rotate.axis.z),
            num(rotate.angle.to_degrees())
        ));
    }

    let s = transform.scale;
    if [s.x, s.y, s.z].iter().any(|v| (v - 1.0).abs() >= EPSILON) {
        functions.push(format!(
            "scale3d({}, {}, {})",
            num(s.x),
            num(s.y),
            num(s.z)
        ));
    }

    if functions.is_empty() {
        "none".to_string()
    } else {
        functions.join(" ")
    }
}

impl DecomposedTransform {
    /// See [`compose`].
    pub fn to_css(&self, precision: usize) -> String {
        compose(self, precision)
    }
}

impl fmt::Display for DecomposedTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&compose(self, DEFAULT_PRECISION))
    }
}
