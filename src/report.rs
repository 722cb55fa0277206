//! Final outcome of a run and its renderings.

use crate::core::RawInput;
use crate::kleene::{self, Regex};
use crate::validation::{FsaError, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Either the derived expression or the reported defect, never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Regex(Regex),
    Error(FsaError),
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&FsaError> {
        match self {
            Self::Error(error) => Some(error),
            Self::Regex(_) => None,
        }
    }

    /// Serializable summary of the outcome.
    pub fn report(&self) -> Report {
        match self {
            Self::Regex(regex) => Report {
                status: Status::Valid,
                code: None,
                message: None,
                expression: Some(regex.to_string()),
            },
            Self::Error(error) => Report {
                status: Status::Invalid,
                code: Some(error.code().to_string()),
                message: Some(error.message()),
                expression: None,
            },
        }
    }
}

/// The single output text: the expression, or `Error:` followed by the
/// diagnostic on the next line.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regex(regex) => write!(f, "{regex}"),
            Self::Error(error) => write!(f, "Error:\n{error}"),
        }
    }
}

impl From<Result<Regex, FsaError>> for Outcome {
    fn from(result: Result<Regex, FsaError>) -> Self {
        match result {
            Ok(regex) => Self::Regex(regex),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Invalid,
}

/// Machine-readable form of an [`Outcome`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

/// Validate the input and, if valid, derive its expression.
pub fn convert(raw: &RawInput) -> Outcome {
    convert_with(&Validator::new(), raw)
}

/// Like [`convert`], with a caller-supplied validator.
pub fn convert_with(validator: &Validator, raw: &RawInput) -> Outcome {
    let outcome: Outcome = validator
        .validate(raw)
        .and_then(|automaton| kleene::derive(&automaton))
        .into();

    match outcome.error() {
        Some(error) => info!(code = error.code(), "automaton rejected"),
        None => info!("automaton converted"),
    }
    outcome
}

/// Convert a five-line description to the output text.
///
/// # Example
///
/// ```rust
/// let text = "states={A,B}\nalpha={x}\ninit.st={A}\nfin.st={}\ntrans={A>x>B}";
/// assert_eq!(fsa_kleene::convert_text(text), "{}");
///
/// let text = "states={A,B\nalpha={x}\ninit.st={A}\nfin.st={}\ntrans={A>x>B}";
/// assert_eq!(fsa_kleene::convert_text(text), "Error:\nE5: Input file is malformed");
/// ```
pub fn convert_text(text: &str) -> String {
    convert(&RawInput::from_text(text)).to_string()
}
