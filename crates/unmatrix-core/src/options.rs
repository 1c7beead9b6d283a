//! Options record accepted by the rewriter.
//!
//! The JSON shape matches what a bundler passes to a stylesheet loader:
//! `{"precision": 4, "verbose": true}`. Missing keys take their defaults and
//! unknown keys are ignored.

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::format::DEFAULT_PRECISION;

/// Largest precision accepted by [`TransformOptions::validate`].
pub const MAX_PRECISION: usize = 100;

/// Options for a single rewrite call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Decimal places for every emitted number. `0` means "use the default".
    pub precision: usize,
    /// Log a notice when at least one declaration was rewritten.
    pub verbose: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            verbose: false,
        }
    }
}

impl TransformOptions {
    /// Parse a loader-style JSON options object and validate it.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject a precision the formatter cannot honor.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.precision > MAX_PRECISION {
            return Err(OptionsError::PrecisionOutOfRange {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }

    /// Precision actually used for formatting.
    ///
    /// Zero falls back to the default and anything above [`MAX_PRECISION`]
    /// is clamped, so rewriting never fails on configuration.
    pub fn effective_precision(&self) -> usize {
        match self.precision {
            0 => DEFAULT_PRECISION,
            p => p.min(MAX_PRECISION),
        }
    }
}
