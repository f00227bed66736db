//! Request DTOs for the calculation API
//!
//! Defines the query parameters accepted by the calculation endpoints.

use serde::Deserialize;

use crate::error::CalcError;

/// Query parameters for a calculation request (GET /:operation?x=..&y=..)
///
/// Both operands arrive as raw strings so that a missing value and a
/// malformed value can be reported distinctly instead of as a generic
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CalcParams {
    /// First operand
    #[serde(default)]
    pub x: Option<String>,
    /// Second operand
    #[serde(default)]
    pub y: Option<String>,
}

impl CalcParams {
    /// Parses and validates both operands.
    ///
    /// Operands must be present, numeric, and finite.
    pub fn parse(&self) -> Result<(f64, f64), CalcError> {
        let x = parse_operand(self.x.as_deref(), "X")?;
        let y = parse_operand(self.y.as_deref(), "Y")?;
        Ok((x, y))
    }
}

/// Parses a single operand, treating an absent or empty parameter as missing.
fn parse_operand(raw: Option<&str>, name: &str) -> Result<f64, CalcError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(CalcError::InvalidParams(format!(
                "value for {} parameter is missing",
                name
            )))
        }
    };

    let value: f64 = raw.parse().map_err(|_| {
        CalcError::InvalidParams(format!(
            "value for {} parameter is not a number: {}",
            name, raw
        ))
    })?;

    // "inf" and "NaN" parse as f64 but have no calculation semantics here
    if !value.is_finite() {
        return Err(CalcError::InvalidParams(format!(
            "value for {} parameter must be finite: {}",
            name, raw
        )));
    }

    Ok(value)
}
