//! fsa-kleene: validate automaton descriptions and derive their regular
//! expressions.
//!
//! The library is a pure core: it takes the five lines of a description and
//! returns a single text value. Reading and writing files is left to the
//! binary.
//!
//! # Pipeline
//!
//! - **Parsing** ([`core`]): split the enveloped lines into a `Descriptor`
//! - **Validation** ([`validation`]): classify the description as valid or
//!   report one of six defects, in a fixed priority order
//! - **Elimination** ([`kleene`]): derive the regular expression of a valid
//!   automaton by the generalized Kleene construction
//! - **Reporting** ([`report`]): render the outcome as text or JSON
//!
//! # Input format
//!
//! ```text
//! states={s1,s2,...}
//! alpha={a1,a2,...}
//! init.st={s}
//! fin.st={f1,f2,...}
//! trans={s1>a>s2,...}
//! ```
//!
//! # Example
//!
//! ```rust
//! use fsa_kleene::core::RawInput;
//!
//! let raw = RawInput::from_text(
//!     "states={A,B}\nalpha={x,y}\ninit.st={A}\nfin.st={B}\ntrans={A>x>B,B>y>B}",
//! );
//! let outcome = fsa_kleene::convert(&raw);
//!
//! assert!(!outcome.is_error());
//! assert!(outcome.to_string().contains("(x)"));
//! ```

pub mod core;
pub mod kleene;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Descriptor, RawInput, Transition};
pub use kleene::{Expr, Regex};
pub use report::{convert, convert_text, convert_with, Outcome, Report};
pub use validation::{Automaton, FsaError, Validator};
