//! Parse failures

use crate::var::Kind;
use std::fmt;
use thiserror::Error;

/// Why a single variable could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
    /// A required variable was unset or empty.
    #[error("missing required variable {name}")]
    Missing { name: String },

    /// The raw value is not a valid literal for the declared kind.
    #[error("expected {name} to have type {kind}, got '{raw}'")]
    Conversion {
        name: String,
        kind: Kind,
        raw: String,
    },
}

impl VarError {
    /// Name of the variable that failed
    pub fn name(&self) -> &str {
        match self {
            VarError::Missing { name } | VarError::Conversion { name, .. } => name,
        }
    }
}

/// Every failure of one parse pass, in registration order.
///
/// Displays as the individual messages joined by newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    failures: Vec<VarError>,
}

impl ParseError {
    pub(crate) fn new(failures: Vec<VarError>) -> Self {
        Self { failures }
    }

    pub fn failures(&self) -> &[VarError] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<VarError> {
        self.failures
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let missing = VarError::Missing {
            name: "HOST".to_string(),
        };
        assert_eq!(missing.to_string(), "missing required variable HOST");

        let bad = VarError::Conversion {
            name: "PORT".to_string(),
            kind: Kind::Int,
            raw: "eighty".to_string(),
        };
        assert_eq!(bad.to_string(), "expected PORT to have type int, got 'eighty'");
        assert_eq!(bad.name(), "PORT");
    }

    #[test]
    fn test_aggregate_joins_with_newlines() {
        let err = ParseError::new(vec![
            VarError::Missing {
                name: "A".to_string(),
            },
            VarError::Conversion {
                name: "B".to_string(),
                kind: Kind::Bool,
                raw: "maybe".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "missing required variable A\nexpected B to have type bool, got 'maybe'"
        );
        assert_eq!(err.failures().len(), 2);
    }
}
