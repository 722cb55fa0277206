//! Envelope grammar for the five description lines.
//!
//! Every line has the shape `<prefix><payload>}` where the prefix is fixed per
//! line. The parser and the malformed-input check both read the literals from
//! here, so the two cannot disagree about what a well-formed line looks like.

use serde::{Deserialize, Serialize};

/// Closing literal shared by every line.
pub const SUFFIX: &str = "}";

/// Separator between entries of a payload.
pub const LIST_SEPARATOR: char = ',';

/// Separator between the parts of a transition entry (`s1>a>s2`).
pub const TRANSITION_SEPARATOR: char = '>';

/// One of the five lines of an automaton description, in input order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    States,
    Alphabet,
    Initial,
    Finals,
    Transitions,
}

impl Field {
    /// All fields in the order they appear in the input.
    pub const ALL: [Field; 5] = [
        Field::States,
        Field::Alphabet,
        Field::Initial,
        Field::Finals,
        Field::Transitions,
    ];

    /// Literal prefix that opens the line.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::States => "states={",
            Self::Alphabet => "alpha={",
            Self::Initial => "init.st={",
            Self::Finals => "fin.st={",
            Self::Transitions => "trans={",
        }
    }

    /// Position of the line in the input.
    pub fn index(self) -> usize {
        match self {
            Self::States => 0,
            Self::Alphabet => 1,
            Self::Initial => 2,
            Self::Finals => 3,
            Self::Transitions => 4,
        }
    }

    /// Extract the payload between prefix and suffix.
    ///
    /// Returns `None` if the line does not carry this field's envelope.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsa_kleene::core::Field;
    ///
    /// assert_eq!(Field::States.payload("states={a,b}"), Some("a,b"));
    /// assert_eq!(Field::States.payload("states={a,b"), None);
    /// assert_eq!(Field::Alphabet.payload("states={a}"), None);
    /// ```
    pub fn payload(self, line: &str) -> Option<&str> {
        line.strip_prefix(self.prefix())?.strip_suffix(SUFFIX)
    }

    /// Check whether the line carries this field's envelope.
    pub fn matches(self, line: &str) -> bool {
        self.payload(line).is_some()
    }
}

/// Split on a separator and drop trailing empty parts, so `a,b,` reads as
/// `a,b` and `a>x>b>` as `a>x>b`. Inner and leading empty parts are kept.
fn split_trimmed(text: &str, separator: char) -> Vec<&str> {
    let mut parts: Vec<&str> = text.split(separator).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

/// Split a payload into its comma-separated entries.
///
/// An empty payload yields a single empty entry (the "nothing declared"
/// sentinel). Otherwise trailing empty entries are dropped, which can leave
/// no entries at all (`,`).
pub fn split_list(payload: &str) -> Vec<String> {
    if payload.is_empty() {
        return vec![String::new()];
    }
    split_trimmed(payload, LIST_SEPARATOR)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Split a transitions payload into raw `s1>a>s2` entries.
///
/// Unlike [`split_list`], an empty payload means no transitions at all.
pub fn split_transitions(payload: &str) -> Vec<&str> {
    if payload.is_empty() {
        return Vec::new();
    }
    split_trimmed(payload, LIST_SEPARATOR)
}

/// Split a transition entry into its `>`-separated parts, dropping trailing
/// empty parts.
pub fn transition_parts(entry: &str) -> Vec<&str> {
    split_trimmed(entry, TRANSITION_SEPARATOR)
}

/// Check that a transition entry has exactly three parts once trailing
/// empty parts are dropped.
pub fn is_transition_entry(entry: &str) -> bool {
    transition_parts(entry).len() == 3
}
