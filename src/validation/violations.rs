//! Diagnostics reported for invalid automaton descriptions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defects an automaton description can be classified with.
///
/// The display text is the exact diagnostic line, code included.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsaError {
    #[error("E1: A state '{state}' is not in set of states")]
    UndeclaredState { state: String },

    #[error("E2: Some states are disjoint")]
    DisjointStates,

    #[error("E3: A transition '{symbol}' is not represented in the alphabet")]
    SymbolNotInAlphabet { symbol: String },

    #[error("E4: Initial state is not defined")]
    UndefinedInitialState,

    #[error("E5: Input file is malformed")]
    MalformedInput,

    #[error("E6: FSA is nondeterministic")]
    Nondeterministic,
}

impl FsaError {
    /// Diagnostic code, `E1` through `E6`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UndeclaredState { .. } => "E1",
            Self::DisjointStates => "E2",
            Self::SymbolNotInAlphabet { .. } => "E3",
            Self::UndefinedInitialState => "E4",
            Self::MalformedInput => "E5",
            Self::Nondeterministic => "E6",
        }
    }

    /// Reporting rank: lower wins when several defects coexist.
    ///
    /// The order is E5, E6, E4, E3, E2, E1.
    pub fn priority(&self) -> u8 {
        match self {
            Self::MalformedInput => 0,
            Self::Nondeterministic => 1,
            Self::UndefinedInitialState => 2,
            Self::SymbolNotInAlphabet { .. } => 3,
            Self::DisjointStates => 4,
            Self::UndeclaredState { .. } => 5,
        }
    }

    /// Diagnostic text without the leading code.
    pub fn message(&self) -> String {
        let full = self.to_string();
        match full.strip_prefix(self.code()).and_then(|rest| rest.strip_prefix(": ")) {
            Some(message) => message.to_string(),
            None => full,
        }
    }
}
