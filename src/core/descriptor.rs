//! Raw input lines and the structured automaton descriptor parsed from them.

use super::envelope::{self, Field};
use serde::{Deserialize, Serialize};

/// The five raw lines of an automaton description.
///
/// Lines are kept verbatim: the malformed-input check inspects them
/// directly rather than trusting whatever the parser managed to extract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    lines: [String; 5],
}

impl RawInput {
    /// Wrap five lines in input order.
    pub fn new(lines: [String; 5]) -> Self {
        Self { lines }
    }

    /// Take the first five lines of a text.
    ///
    /// Missing lines are read as empty strings, which later fail the envelope
    /// check. A trailing carriage return is stripped from every line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsa_kleene::core::{Field, RawInput};
    ///
    /// let raw = RawInput::from_text("states={a}\r\nalpha={x}\n");
    /// assert_eq!(raw.line(Field::States), "states={a}");
    /// assert_eq!(raw.line(Field::Transitions), "");
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut lines = text.lines();
        let lines = std::array::from_fn(|_| {
            lines
                .next()
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .unwrap_or_default()
        });
        Self { lines }
    }

    /// Raw line for a field.
    pub fn line(&self, field: Field) -> &str {
        &self.lines[field.index()]
    }
}

/// A single `source>symbol>target` transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub source: String,
    pub symbol: String,
    pub target: String,
}

impl Transition {
    pub fn new(
        source: impl Into<String>,
        symbol: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            symbol: symbol.into(),
            target: target.into(),
        }
    }

    /// Parse a raw entry. Trailing empty parts are dropped first, so `a>x>b>`
    /// reads as `a>x>b`. Missing parts are left empty and extra parts are
    /// ignored; the envelope check reports such entries as malformed.
    pub fn parse(entry: &str) -> Self {
        let mut parts = envelope::transition_parts(entry).into_iter();
        let mut next = || parts.next().unwrap_or_default().to_string();
        let source = next();
        let symbol = next();
        let target = next();
        Self {
            source,
            symbol,
            target,
        }
    }

    /// A transition that leads back to its own source.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Structured automaton description: states, alphabet, initial state,
/// final states and transitions, exactly as declared.
///
/// Declared states may contain duplicates; see
/// [`normalize`](crate::validation::normalize) for the de-duplicated form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub states: Vec<String>,
    pub alphabet: Vec<String>,
    pub initial: String,
    pub finals: Vec<String>,
    pub transitions: Vec<Transition>,
}

impl Descriptor {
    /// Extract every field from the raw lines.
    ///
    /// Parsing never fails. A line without its envelope yields an empty
    /// payload; the validator re-checks envelopes on the raw lines and
    /// rejects such input before any field is interpreted.
    pub fn parse(raw: &RawInput) -> Self {
        let payload = |field: Field| field.payload(raw.line(field)).unwrap_or_default();

        Self {
            states: envelope::split_list(payload(Field::States)),
            alphabet: envelope::split_list(payload(Field::Alphabet)),
            initial: payload(Field::Initial).to_string(),
            finals: envelope::split_list(payload(Field::Finals)),
            transitions: envelope::split_transitions(payload(Field::Transitions))
                .into_iter()
                .map(Transition::parse)
                .collect(),
        }
    }

    /// True when no final state is declared: the final-state list is the
    /// single empty sentinel (`fin.st={}`) or has no entries at all
    /// (`fin.st={,}`).
    pub fn has_no_finals(&self) -> bool {
        self.finals.len() <= 1 && self.finals.iter().all(String::is_empty)
    }
}
