//! Ordered structural and semantic rules for normalized automata.

use crate::core::Transition;
use crate::validation::builder::RuleSetBuilder;
use crate::validation::normalize::Automaton;
use crate::validation::violations::FsaError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Type alias for rule check functions
pub type Check = Box<dyn Fn(&Automaton) -> Result<(), FsaError> + Send + Sync>;

/// A named check.
pub struct Rule {
    pub(crate) name: &'static str,
    pub(crate) check: Check,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self, automaton: &Automaton) -> Result<(), FsaError> {
        (self.check)(automaton)
    }
}

/// Rules evaluated in insertion order.
///
/// The order is the reporting priority: when several rules are violated at
/// once, the earliest one wins.
pub struct RuleSet {
    pub(crate) rules: Vec<Rule>,
}

impl RuleSet {
    /// The standard rules in priority order: E6, E4, E3, E2, E1.
    ///
    /// The malformed-input check (E5) precedes all of them but runs on the
    /// raw lines, before normalization.
    pub fn standard() -> Self {
        RuleSetBuilder::new()
            .require("deterministic", deterministic)
            .require("initial_defined", initial_defined)
            .require("symbols_in_alphabet", symbols_in_alphabet)
            .require("states_connected", states_connected)
            .require("states_declared", states_declared)
            .build()
    }

    /// Return the first violated rule, stopping there.
    pub fn first_violation(&self, automaton: &Automaton) -> Result<(), FsaError> {
        for rule in &self.rules {
            if let Err(error) = rule.check(automaton) {
                debug!(rule = rule.name, code = error.code(), "rule violated");
                return Err(error);
            }
            debug!(rule = rule.name, "rule passed");
        }
        Ok(())
    }

    /// Run every rule, accumulating ALL violations instead of stopping at the
    /// first one.
    pub fn enforce_all(&self, automaton: &Automaton) -> Validation<(), NonEmptyVec<FsaError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FsaError>>> = self
            .rules
            .iter()
            .map(|rule| match rule.check(automaton) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(error),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// E6: no state has two outgoing transitions on the same symbol.
///
/// Transitions are grouped by the position of their source in the state
/// list. A transition from an undeclared state belongs to no group.
pub fn deterministic(automaton: &Automaton) -> Result<(), FsaError> {
    let mut outgoing: Vec<Vec<&str>> = vec![Vec::new(); automaton.states().len()];

    for transition in automaton.transitions() {
        let Some(index) = automaton.state_index(&transition.source) else {
            continue;
        };
        if outgoing[index].contains(&transition.symbol.as_str()) {
            return Err(FsaError::Nondeterministic);
        }
        outgoing[index].push(&transition.symbol);
    }
    Ok(())
}

/// E4: an initial state is given at all.
pub fn initial_defined(automaton: &Automaton) -> Result<(), FsaError> {
    if automaton.initial().is_empty() {
        Err(FsaError::UndefinedInitialState)
    } else {
        Ok(())
    }
}

/// E3: every transition symbol belongs to the alphabet.
/// Reports the first offending symbol in transition order.
pub fn symbols_in_alphabet(automaton: &Automaton) -> Result<(), FsaError> {
    match automaton
        .transitions()
        .iter()
        .find(|transition| !automaton.alphabet().contains(&transition.symbol))
    {
        Some(transition) => Err(FsaError::SymbolNotInAlphabet {
            symbol: transition.symbol.clone(),
        }),
        None => Ok(()),
    }
}

/// E2: every state takes part in at least one transition to or from another
/// state.
///
/// Self-loops connect nothing and are not counted, so a state with only
/// self-loops is disjoint. A single-state automaton always passes.
pub fn states_connected(automaton: &Automaton) -> Result<(), FsaError> {
    let states = automaton.states();
    if states.len() == 1 {
        return Ok(());
    }

    let mut degree = vec![0usize; states.len()];
    for transition in automaton.transitions().iter().filter(|t| !t.is_self_loop()) {
        for (count, state) in degree.iter_mut().zip(states) {
            if *state == transition.source {
                *count += 1;
            }
            if *state == transition.target {
                *count += 1;
            }
        }
    }

    if degree.contains(&0) {
        Err(FsaError::DisjointStates)
    } else {
        Ok(())
    }
}

/// E1: every referenced state is declared.
///
/// The initial state is always checked. When final states are declared, the
/// final states and then the transition sources and targets are checked
/// too, since the expression builder indexes all of them. Without final
/// states the result is the empty language and only the initial state
/// matters. The first undeclared label is reported.
pub fn states_declared(automaton: &Automaton) -> Result<(), FsaError> {
    let (finals, transitions): (&[String], &[Transition]) = if automaton.has_no_finals() {
        (&[], &[])
    } else {
        (automaton.finals(), automaton.transitions())
    };

    let referenced = std::iter::once(automaton.initial())
        .chain(finals.iter().map(String::as_str))
        .chain(
            transitions
                .iter()
                .flat_map(|t| [t.source.as_str(), t.target.as_str()]),
        );

    for state in referenced {
        if !automaton.is_declared(state) {
            return Err(FsaError::UndeclaredState {
                state: state.to_string(),
            });
        }
    }
    Ok(())
}
