//! Classification of automaton descriptions.
//!
//! A description is either valid or carries exactly one reported defect.
//! Checks run in a fixed priority order and stop at the first violation:
//!
//! 1. E5, malformed input (raw lines, before anything is interpreted)
//! 2. E6, nondeterminism
//! 3. E4, undefined initial state
//! 4. E3, transition symbol outside the alphabet
//! 5. E2, disjoint states
//! 6. E1, undeclared state
//!
//! Duplicate state labels are collapsed between E5 and E6, so every later
//! check and the expression builder see the de-duplicated list.
//!
//! # Example
//!
//! ```rust
//! use fsa_kleene::core::RawInput;
//! use fsa_kleene::validation::{FsaError, Validator};
//!
//! let raw = RawInput::from_text(
//!     "states={a,b}\nalpha={x}\ninit.st={a}\nfin.st={b}\ntrans={a>x>b,a>x>a}",
//! );
//!
//! assert_eq!(Validator::new().validate(&raw), Err(FsaError::Nondeterministic));
//! ```

pub mod builder;
pub mod normalize;
pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use builder::RuleSetBuilder;
pub use normalize::{normalize, Automaton};
pub use rules::RuleSet;
pub use violations::FsaError;

use crate::core::{self as input, Descriptor, Field, RawInput};
use stillwater::validation::Validation;
use tracing::debug;

/// E5: every line carries its envelope and every transition entry has the
/// `source>symbol>target` shape.
///
/// Reads only the raw lines.
pub fn check_envelopes(raw: &RawInput) -> Result<(), FsaError> {
    if let Some(field) = Field::ALL
        .into_iter()
        .find(|field| !field.matches(raw.line(*field)))
    {
        debug!(?field, "line does not carry its envelope");
        return Err(FsaError::MalformedInput);
    }

    let transitions = Field::Transitions
        .payload(raw.line(Field::Transitions))
        .unwrap_or_default();
    if let Some(entry) = input::split_transitions(transitions)
        .into_iter()
        .find(|entry| !input::is_transition_entry(entry))
    {
        debug!(entry, "transition entry is not a triple");
        return Err(FsaError::MalformedInput);
    }

    Ok(())
}

/// Runs the envelope check, normalization and a rule set.
pub struct Validator {
    rules: RuleSet,
}

impl Validator {
    /// Validator with the standard rules.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard())
    }

    /// Validator with a custom rule set after the envelope check.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classify the input, returning the normalized automaton when valid or
    /// the highest-priority defect otherwise.
    pub fn validate(&self, raw: &RawInput) -> Result<Automaton, FsaError> {
        let descriptor = Descriptor::parse(raw);
        check_envelopes(raw)?;

        let automaton = normalize(descriptor);
        debug!(states = automaton.states().len(), "states normalized");

        self.rules.first_violation(&automaton)?;
        Ok(automaton)
    }

    /// Every defect of the input, highest priority first.
    ///
    /// Malformed input is reported alone, since nothing else can be read
    /// from it. Other defects are sorted by priority, not by rule order, so
    /// the first entry equals the error from [`validate`](Self::validate)
    /// only when the rules run in priority order, as the standard rules do.
    pub fn diagnose(&self, raw: &RawInput) -> Vec<FsaError> {
        let descriptor = Descriptor::parse(raw);
        if let Err(error) = check_envelopes(raw) {
            return vec![error];
        }

        let automaton = normalize(descriptor);
        match self.rules.enforce_all(&automaton) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => {
                let mut errors: Vec<FsaError> = errors.iter().cloned().collect();
                errors.sort_by_key(FsaError::priority);
                errors
            }
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
