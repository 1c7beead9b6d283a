//! Extraction of the 16 components from a `matrix3d(...)` substring.
//!
//! The grammar is deliberately narrow: the keyword (any ASCII case),
//! optional whitespace, `(`, comma-separated decimal numbers, `)`. Anything
//! after the first closing parenthesis is ignored.

use crate::error::ParseError;
use crate::matrix::Matrix16;

const KEYWORD: &str = "matrix3d";

impl Matrix16 {
    /// Parse the first `matrix3d(...)` value found in `text`.
    ///
    /// Fails unless the argument list holds exactly 16 finite numbers.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let arguments = matrix3d_arguments(text).ok_or(ParseError::MissingPattern)?;

        let tokens: Vec<&str> = arguments.split(',').map(str::trim).collect();
        if tokens.len() != 16 {
            return Err(ParseError::ComponentCount {
                found: tokens.len(),
            });
        }

        let mut components = [0.0_f64; 16];
        for (index, token) in tokens.iter().enumerate() {
            components[index] =
                parse_component(token).ok_or_else(|| ParseError::InvalidComponent {
                    index,
                    token: (*token).to_string(),
                })?;
        }
        Ok(Self(components))
    }
}

/// The text between `matrix3d(` and the next `)`.
fn matrix3d_arguments(text: &str) -> Option<&str> {
    // ASCII lowercasing keeps byte offsets stable.
    let start = text.to_ascii_lowercase().find(KEYWORD)?;
    let rest = text[start + KEYWORD.len()..].trim_start();
    let rest = rest.strip_prefix('(')?;
    let end = rest.find(')')?;
    Some(&rest[..end])
}

fn parse_component(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
