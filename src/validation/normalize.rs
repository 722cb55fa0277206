//! State de-duplication.

use crate::core::{Descriptor, Transition};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A descriptor whose state list has been de-duplicated.
///
/// Obtained only through [`normalize`]. Every check after the envelope check,
/// and the expression builder, sees this form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    descriptor: Descriptor,
}

impl Automaton {
    pub fn states(&self) -> &[String] {
        &self.descriptor.states
    }

    pub fn alphabet(&self) -> &[String] {
        &self.descriptor.alphabet
    }

    pub fn initial(&self) -> &str {
        &self.descriptor.initial
    }

    pub fn finals(&self) -> &[String] {
        &self.descriptor.finals
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.descriptor.transitions
    }

    pub fn has_no_finals(&self) -> bool {
        self.descriptor.has_no_finals()
    }

    /// Position of a state in the declaration order.
    pub fn state_index(&self, state: &str) -> Option<usize> {
        self.states().iter().position(|declared| declared == state)
    }

    pub fn is_declared(&self, state: &str) -> bool {
        self.state_index(state).is_some()
    }

    pub fn into_descriptor(self) -> Descriptor {
        self.descriptor
    }
}

/// Drop every repeated state label, keeping its first occurrence.
///
/// Duplicates collapse silently; all other fields pass through untouched.
///
/// # Example
///
/// ```rust
/// use fsa_kleene::core::{Descriptor, RawInput};
/// use fsa_kleene::validation::normalize;
///
/// let raw = RawInput::from_text("states={b,a,b}\nalpha={x}\ninit.st={a}\nfin.st={b}\ntrans={a>x>b}");
/// let automaton = normalize(Descriptor::parse(&raw));
/// assert_eq!(automaton.states(), ["b", "a"]);
/// ```
pub fn normalize(mut descriptor: Descriptor) -> Automaton {
    let mut seen = HashSet::new();
    descriptor.states.retain(|state| seen.insert(state.clone()));
    Automaton { descriptor }
}
