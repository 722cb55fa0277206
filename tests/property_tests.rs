//! Property-based tests for validation and conversion.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated automata.

use fsa_kleene::{convert_text, FsaError, RawInput, Validator};
use proptest::prelude::*;

const STATES: [&str; 4] = ["q0", "q1", "q2", "q3"];
const SYMBOLS: [&str; 3] = ["a", "b", "c"];

#[derive(Clone, Debug)]
struct Automaton {
    states: Vec<String>,
    alphabet: Vec<String>,
    initial: String,
    finals: Vec<String>,
    transitions: Vec<(String, String, String)>,
}

impl Automaton {
    fn render(&self) -> String {
        let transitions: Vec<String> = self
            .transitions
            .iter()
            .map(|(s, a, t)| format!("{s}>{a}>{t}"))
            .collect();
        format!(
            "states={{{}}}\nalpha={{{}}}\ninit.st={{{}}}\nfin.st={{{}}}\ntrans={{{}}}",
            self.states.join(","),
            self.alphabet.join(","),
            self.initial,
            self.finals.join(","),
            transitions.join(",")
        )
    }
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> String {
        STATES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_symbol()(index in 0..SYMBOLS.len()) -> String {
        SYMBOLS[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_automaton()(
        count in 1..=STATES.len(),
        alphabet_size in 1..=SYMBOLS.len(),
        initial in arbitrary_state(),
        finals in prop::collection::vec(arbitrary_state(), 0..3),
        transitions in prop::collection::vec(
            (arbitrary_state(), arbitrary_symbol(), arbitrary_state()),
            0..6
        )
    ) -> Automaton {
        Automaton {
            states: STATES[..count].iter().map(|s| s.to_string()).collect(),
            alphabet: SYMBOLS[..alphabet_size].iter().map(|s| s.to_string()).collect(),
            initial,
            finals,
            transitions,
        }
    }
}

fn verdict(text: &str) -> Result<(), FsaError> {
    Validator::new()
        .validate(&RawInput::from_text(text))
        .map(|_| ())
}

proptest! {
    #[test]
    fn duplicate_states_are_idempotent(fsa in arbitrary_automaton(), repeats in 1..3usize) {
        let mut duplicated = fsa.clone();
        for _ in 0..repeats {
            duplicated.states.extend(fsa.states.iter().cloned());
        }
        prop_assert_eq!(convert_text(&duplicated.render()), convert_text(&fsa.render()));
    }

    #[test]
    fn conversion_is_deterministic(fsa in arbitrary_automaton()) {
        let text = fsa.render();
        prop_assert_eq!(convert_text(&text), convert_text(&text));
    }

    #[test]
    fn first_diagnosis_matches_validation(fsa in arbitrary_automaton()) {
        let raw = RawInput::from_text(&fsa.render());
        let validator = Validator::new();
        let diagnosed = validator.diagnose(&raw);

        match validator.validate(&raw) {
            Ok(_) => prop_assert!(diagnosed.is_empty()),
            Err(error) => prop_assert_eq!(diagnosed.first(), Some(&error)),
        }
    }

    #[test]
    fn diagnoses_are_sorted_by_priority(fsa in arbitrary_automaton()) {
        let diagnosed = Validator::new().diagnose(&RawInput::from_text(&fsa.render()));
        let ranks: Vec<u8> = diagnosed.iter().map(FsaError::priority).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);
    }

    #[test]
    fn repeated_symbol_from_same_state_is_rejected(
        source in arbitrary_state(),
        symbol in arbitrary_symbol(),
        first in arbitrary_state(),
        second in arbitrary_state()
    ) {
        let fsa = Automaton {
            states: STATES.iter().map(|s| s.to_string()).collect(),
            alphabet: SYMBOLS.iter().map(|s| s.to_string()).collect(),
            initial: "q0".into(),
            finals: vec!["q1".into()],
            transitions: vec![
                (source.clone(), symbol.clone(), first),
                (source, symbol, second),
            ],
        };
        prop_assert_eq!(verdict(&fsa.render()), Err(FsaError::Nondeterministic));
    }

    #[test]
    fn distinct_symbols_never_trigger_nondeterminism(fsa in arbitrary_automaton()) {
        let mut seen = std::collections::HashSet::new();
        let mut unique = fsa.clone();
        unique
            .transitions
            .retain(|(s, a, _)| seen.insert((s.clone(), a.clone())));

        prop_assert_ne!(verdict(&unique.render()), Err(FsaError::Nondeterministic));
    }

    #[test]
    fn self_loops_alone_leave_states_disjoint(symbol in arbitrary_symbol()) {
        let fsa = Automaton {
            states: vec!["q0".into(), "q1".into()],
            alphabet: SYMBOLS.iter().map(|s| s.to_string()).collect(),
            initial: "q0".into(),
            finals: vec!["q0".into()],
            transitions: vec![("q1".into(), symbol, "q1".into())],
        };
        prop_assert_eq!(verdict(&fsa.render()), Err(FsaError::DisjointStates));
    }

    #[test]
    fn no_finals_always_yields_empty_language(fsa in arbitrary_automaton()) {
        let mut no_finals = fsa;
        no_finals.finals.clear();
        let output = convert_text(&no_finals.render());
        prop_assert!(output == "{}" || output.starts_with("Error:\n"), "unexpected output: {:?}", output);
    }

    #[test]
    fn broken_envelope_is_always_malformed(fsa in arbitrary_automaton(), line in 0..5usize) {
        let text = fsa.render();
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        lines[line].pop();
        prop_assert_eq!(verdict(&lines.join("\n")), Err(FsaError::MalformedInput));
    }
}
