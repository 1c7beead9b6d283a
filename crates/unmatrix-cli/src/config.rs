//! Option resolution for the command line front end.
//!
//! Each source yields a partial [`OptionLayer`]; layers are merged with
//! command-line flags first, then the options file, then the environment,
//! then the library defaults.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use unmatrix_core::TransformOptions;

/// Environment variable overriding the default precision.
const PRECISION_ENV: &str = "UNMATRIX_PRECISION";
/// Environment variable enabling the verbose notice.
const VERBOSE_ENV: &str = "UNMATRIX_VERBOSE";

/// A partially specified set of options from one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionLayer {
    pub precision: Option<usize>,
    pub verbose: Option<bool>,
}

impl OptionLayer {
    /// Read a loader-style JSON options file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading options file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing options file {}", path.display()))
    }

    /// Read `UNMATRIX_*` variables through `lookup`.
    ///
    /// Unparseable values are ignored rather than rejected.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            precision: lookup(PRECISION_ENV).and_then(|s| s.trim().parse().ok()),
            verbose: lookup(VERBOSE_ENV).and_then(|s| parse_flag(&s)),
        }
    }

    /// Read `UNMATRIX_*` variables from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Fill fields this layer leaves unset from `lower`.
    pub fn or(self, lower: Self) -> Self {
        Self {
            precision: self.precision.or(lower.precision),
            verbose: self.verbose.or(lower.verbose),
        }
    }

    /// Resolve against the library defaults and validate.
    pub fn resolve(self) -> anyhow::Result<TransformOptions> {
        let defaults = TransformOptions::default();
        let options = TransformOptions {
            precision: self.precision.unwrap_or(defaults.precision),
            verbose: self.verbose.unwrap_or(defaults.verbose),
        };
        options.validate()?;
        Ok(options)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
