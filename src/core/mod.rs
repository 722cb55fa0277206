//! Input model for automaton descriptions.
//!
//! This module contains the pure parsing layer:
//! - The envelope grammar shared by the parser and the malformed-input check
//! - Raw five-line input
//! - The structured `Descriptor` extracted from it
//!
//! Nothing here rejects input. Classification happens in
//! [`validation`](crate::validation).

mod descriptor;
mod envelope;

pub use descriptor::{Descriptor, RawInput, Transition};
pub use envelope::{
    is_transition_entry, split_list, split_transitions, transition_parts, Field, LIST_SEPARATOR,
    SUFFIX, TRANSITION_SEPARATOR,
};
