//! Stylesheet sources: files or standard input.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Where one stylesheet comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Map command-line paths to inputs; none, or `-`, means stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Self::Stdin];
        }
        paths
            .iter()
            .map(|p| {
                if p.as_os_str() == "-" {
                    Self::Stdin
                } else {
                    Self::File(p.clone())
                }
            })
            .collect()
    }

    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::Stdin => {
                let mut css = String::new();
                std::io::stdin()
                    .read_to_string(&mut css)
                    .context("reading stylesheet from stdin")?;
                Ok(css)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
