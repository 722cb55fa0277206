//! Regular expressions from validated automata by state elimination.
//!
//! The generalized Kleene construction fills a matrix with the direct
//! transitions between states, then eliminates the states one by one, folding
//! the paths through each eliminated state into the remaining cells. The
//! expression of the automaton is the alternation of the cells leading from
//! the initial state to each final state.
//!
//! # Example
//!
//! ```rust
//! use fsa_kleene::core::RawInput;
//! use fsa_kleene::kleene;
//! use fsa_kleene::validation::Validator;
//!
//! let raw = RawInput::from_text("states={a}\nalpha={x}\ninit.st={a}\nfin.st={a}\ntrans={a>x>a}");
//! let automaton = Validator::new().validate(&raw).unwrap();
//!
//! assert_eq!(kleene::derive(&automaton).unwrap().to_string(), "(x|eps)(x|eps)*(x|eps)|(x|eps)");
//! ```

mod expr;
mod matrix;

pub use expr::Expr;
pub use matrix::TransitionMatrix;

use crate::validation::{Automaton, FsaError};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Regular expression derived from an automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Regex {
    /// No final states; written `{}`.
    EmptyLanguage,
    /// One fully eliminated cell per final state, in declaration order.
    Branches(Vec<Arc<Expr>>),
}

impl Regex {
    pub fn is_empty_language(&self) -> bool {
        matches!(self, Self::EmptyLanguage)
    }
}

/// Text form used in the output.
///
/// Each branch is a cell of the fully eliminated matrix, rendered without
/// its outermost parentheses; branches are joined by `|`.
impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLanguage => f.write_str("{}"),
            Self::Branches(branches) => {
                for (i, branch) in branches.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    branch.write_bare(&mut *f)?;
                }
                Ok(())
            }
        }
    }
}

/// Derive the regular expression of a validated automaton.
///
/// An automaton without final states yields the empty language without any
/// elimination. Otherwise the initial state and every final state need a
/// matrix index; an undeclared one is reported as
/// [`FsaError::UndeclaredState`]. The standard rules reject such automata
/// first, but a reduced rule set can let them through.
pub fn derive(automaton: &Automaton) -> Result<Regex, FsaError> {
    if automaton.has_no_finals() {
        debug!("no final states, empty language");
        return Ok(Regex::EmptyLanguage);
    }

    let index = |state: &str| {
        automaton
            .state_index(state)
            .ok_or_else(|| FsaError::UndeclaredState {
                state: state.to_string(),
            })
    };

    let initial = index(automaton.initial())?;
    let columns = automaton
        .finals()
        .iter()
        .map(|state| index(state.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let matrix = TransitionMatrix::base(automaton).eliminate_all();
    debug!(states = matrix.size(), "all states eliminated");

    let branches = columns
        .into_iter()
        .map(|column| matrix.get(initial, column).clone())
        .collect();

    Ok(Regex::Branches(branches))
}
