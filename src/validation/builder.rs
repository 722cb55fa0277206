//! Builder API for assembling rule sets.

use crate::validation::normalize::Automaton;
use crate::validation::rules::{Rule, RuleSet};
use crate::validation::violations::FsaError;

/// Builder for creating ordered rule sets.
///
/// Rules run in the order they are added, which is also their reporting
/// priority.
///
/// # Example
///
/// ```rust
/// use fsa_kleene::validation::{rules, FsaError, RuleSetBuilder};
///
/// let rules = RuleSetBuilder::new()
///     .require("deterministic", rules::deterministic)
///     .require_pred(
///         "has_transitions",
///         |fsa| !fsa.transitions().is_empty(),
///         FsaError::DisjointStates,
///     )
///     .build();
///
/// assert_eq!(rules.names(), vec!["deterministic", "has_transitions"]);
/// ```
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a check returning its own diagnostic
    pub fn require<F>(mut self, name: &'static str, check: F) -> Self
    where
        F: Fn(&Automaton) -> Result<(), FsaError> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            name,
            check: Box::new(check),
        });
        self
    }

    /// Add a simple predicate check with a fixed diagnostic
    pub fn require_pred<F>(mut self, name: &'static str, predicate: F, error: FsaError) -> Self
    where
        F: Fn(&Automaton) -> bool + Send + Sync + 'static,
    {
        let check = move |automaton: &Automaton| {
            if predicate(automaton) {
                Ok(())
            } else {
                Err(error.clone())
            }
        };
        self.rules.push(Rule {
            name,
            check: Box::new(check),
        });
        self
    }

    /// Build the rule set
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}
