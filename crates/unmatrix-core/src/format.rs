//! Canonical number rendering for emitted CSS values.
//!
//! Values are rounded to a fixed number of decimal places, then trailing
//! zeros and a dangling decimal point are stripped:
//!
//! ```text
//! 1.500000 → "1.5"
//! 2.000000 → "2"
//! 4e-12    → "0"
//! ```

/// Magnitudes below this are treated as exactly zero throughout the pipeline.
pub const EPSILON: f64 = 1e-10;

/// Decimal places used when the caller does not ask for anything else.
pub const DEFAULT_PRECISION: usize = 6;

/// Render `value` rounded to `precision` decimal places.
///
/// Near-zero values (including negative ones that round to zero) render as
/// `"0"`, never `"-0"`.
pub fn format_number(value: f64, precision: usize) -> String {
    if value.abs() < EPSILON {
        return "0".to_string();
    }

    let fixed = format!("{value:.precision$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Snap a value to exactly zero when its magnitude is below [`EPSILON`].
pub(crate) fn snap(value: f64) -> f64 {
    if value.abs() < EPSILON { 0.0 } else { value }
}
