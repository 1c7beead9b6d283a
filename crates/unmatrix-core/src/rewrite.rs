//! Stylesheet scanning: every `transform: matrix3d(...)` declaration is
//! replaced by its composed equivalent, everything else is copied verbatim.
//!
//! A declaration whose matrix cannot be read is left byte-for-byte unchanged
//! and processing moves on to the next one.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::ParseError;
use crate::matrix::Matrix16;
use crate::options::TransformOptions;

/// Outcome of rewriting one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten stylesheet.
    pub css: String,
    /// Declarations replaced by composed functions.
    pub replaced: usize,
    /// Declarations left untouched because their matrix was malformed.
    pub skipped: usize,
}

impl Rewrite {
    /// Whether any declaration was replaced.
    pub fn changed(&self) -> bool {
        self.replaced > 0
    }
}

fn transform_declaration() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)transform\s*:\s*matrix3d\s*\([^)]+\)")
            .expect("transform declaration pattern compiles")
    })
}

/// Rewrite every `transform: matrix3d(...)` declaration in `css`.
///
/// Never fails: malformed matrices pass through unchanged.
pub fn transform(css: &str, options: &TransformOptions) -> String {
    rewrite(css, options).css
}

/// Like [`transform`], also reporting how many declarations were touched.
pub fn rewrite(css: &str, options: &TransformOptions) -> Rewrite {
    let precision = options.effective_precision();
    let mut replaced = 0;
    let mut skipped = 0;

    let out = transform_declaration().replace_all(css, |caps: &Captures<'_>| {
        let declaration = &caps[0];
        match compose_value(declaration, precision) {
            Ok(value) => {
                replaced += 1;
                format!("transform: {value}")
            }
            Err(reason) => {
                skipped += 1;
                tracing::debug!(declaration, %reason, "leaving declaration unchanged");
                declaration.to_string()
            }
        }
    });

    if options.verbose && replaced > 0 {
        tracing::info!(replaced, skipped, "rewrote matrix3d transforms");
    }

    Rewrite {
        css: out.into_owned(),
        replaced,
        skipped,
    }
}

/// Convert a single `matrix3d(...)` value to composed transform functions.
///
/// Returns `None` when the value is not decomposable.
pub fn matrix3d_to_transform(value: &str, precision: usize) -> Option<String> {
    compose_value(value, precision).ok()
}

#[derive(Debug, thiserror::Error)]
enum Skip {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("decomposition overflowed")]
    NonFinite,
}

fn compose_value(text: &str, precision: usize) -> Result<String, Skip> {
    let decomposed = Matrix16::parse(text)?.decompose();
    if !decomposed.is_finite() {
        return Err(Skip::NonFinite);
    }
    Ok(decomposed.to_css(precision))
}
