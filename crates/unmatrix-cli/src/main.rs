//! Unmatrix: rewrites `matrix3d(...)` transforms in compiled stylesheets.
//!
//! Plays the loader role in a build pipeline: stylesheet text goes in, the
//! rewritten text comes out verbatim. Logs go to stderr, CSS to stdout.
//!
//! # Usage
//!
//! - `unmatrix < in.css > out.css` - filter stdin to stdout
//! - `unmatrix --in-place dist/*.css` - rewrite files that contain matrices
//! - `unmatrix --check dist/*.css` - fail if any file would change

mod config;
mod input;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use unmatrix_core::TransformOptions;

use crate::config::OptionLayer;
use crate::input::Input;

/// Rewrite CSS matrix3d() transforms as translate3d/rotate3d/scale3d.
#[derive(Parser)]
#[command(name = "unmatrix")]
#[command(version, long_about = None)]
struct Cli {
    /// Stylesheets to rewrite (`-` or none reads stdin)
    #[arg(name = "FILES")]
    files: Vec<PathBuf>,

    /// Decimal places for emitted numbers (default 6)
    #[arg(long)]
    precision: Option<usize>,

    /// Log a notice for every stylesheet that was rewritten
    #[arg(long)]
    verbose: bool,

    /// JSON options file, e.g. {"precision": 4, "verbose": true}
    #[arg(long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Overwrite input files instead of printing to stdout
    #[arg(long, conflicts_with = "check")]
    in_place: bool,

    /// Write nothing; exit with status 1 if any input would change
    #[arg(long)]
    check: bool,
}

impl Cli {
    fn flag_layer(&self) -> OptionLayer {
        OptionLayer {
            precision: self.precision,
            verbose: self.verbose.then_some(true),
        }
    }

    fn resolve_options(&self) -> Result<TransformOptions> {
        let file = match &self.options {
            Some(path) => OptionLayer::from_file(path)?,
            None => OptionLayer::default(),
        };
        self.flag_layer()
            .or(file)
            .or(OptionLayer::from_env())
            .resolve()
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.resolve_options()?;
    init_tracing(options.verbose);

    let mut would_change = false;
    let mut stdout = std::io::stdout().lock();

    for input in Input::from_args(&cli.files) {
        let css = input.read()?;
        let result = unmatrix_core::rewrite(&css, &options);
        tracing::info!(
            %input,
            replaced = result.replaced,
            skipped = result.skipped,
            "processed stylesheet"
        );
        if result.skipped > 0 {
            tracing::warn!(
                %input,
                skipped = result.skipped,
                "left malformed matrix3d values unchanged"
            );
        }

        if cli.check {
            if result.changed() {
                tracing::warn!(%input, "would rewrite");
                would_change = true;
            }
            continue;
        }

        match input.path() {
            Some(path) if cli.in_place => {
                if result.changed() {
                    std::fs::write(path, &result.css)
                        .with_context(|| format!("writing {}", path.display()))?;
                }
            }
            _ => stdout
                .write_all(result.css.as_bytes())
                .context("writing to stdout")?,
        }
    }

    stdout.flush().context("flushing stdout")?;
    Ok(if would_change {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_become_a_layer() {
        let cli = Cli::parse_from(["unmatrix", "--precision", "3", "--verbose", "a.css"]);
        assert_eq!(
            cli.flag_layer(),
            OptionLayer {
                precision: Some(3),
                verbose: Some(true)
            }
        );
        assert_eq!(cli.files, vec![PathBuf::from("a.css")]);
    }

    #[test]
    fn test_absent_verbose_flag_defers_to_lower_layers() {
        let cli = Cli::parse_from(["unmatrix"]);
        assert_eq!(cli.flag_layer(), OptionLayer::default());
    }

    #[test]
    fn test_in_place_conflicts_with_check() {
        assert!(Cli::try_parse_from(["unmatrix", "--in-place", "--check", "a.css"]).is_err());
    }
}
