//! End-to-end conversions from five-line descriptions to output text.

use fsa_kleene::{convert_text, FsaError, RawInput, Validator};

fn description(states: &str, alpha: &str, init: &str, fin: &str, trans: &str) -> String {
    format!(
        "states={{{states}}}\nalpha={{{alpha}}}\ninit.st={{{init}}}\nfin.st={{{fin}}}\ntrans={{{trans}}}"
    )
}

#[test]
fn two_state_single_edge() {
    let output = convert_text(&description("A,B", "x,y", "A", "B", "A>x>B"));
    assert_eq!(
        output,
        "((eps)(eps)*(x)|(x))(({})(eps)*(x)|(eps))*(({})(eps)*(x)|(eps))|((eps)(eps)*(x)|(x))"
    );
}

#[test]
fn single_state_without_transitions() {
    let output = convert_text(&description("q", "a", "q", "q", ""));
    assert_eq!(output, "(eps)(eps)*(eps)|(eps)");
}

#[test]
fn empty_final_list_is_empty_language() {
    let output = convert_text(&description("A,B", "x", "A", "", "A>x>B,B>x>A"));
    assert_eq!(output, "{}");
}

#[test]
fn missing_closing_brace_is_malformed() {
    let text = "states={A,B\nalpha={x}\ninit.st={A}\nfin.st={B}\ntrans={A>x>B}";
    assert_eq!(convert_text(text), "Error:\nE5: Input file is malformed");
}

#[test]
fn missing_lines_are_malformed() {
    assert_eq!(
        convert_text("states={A}\nalpha={x}"),
        "Error:\nE5: Input file is malformed"
    );
    assert_eq!(convert_text(""), "Error:\nE5: Input file is malformed");
}

#[test]
fn windows_line_endings_are_accepted() {
    let text = description("A,B", "x", "A", "B", "A>x>B").replace('\n', "\r\n");
    assert!(!convert_text(&text).starts_with("Error:"));
}

#[test]
fn repeated_symbol_from_one_state_is_nondeterministic() {
    let output = convert_text(&description("A,B", "x", "A", "B", "A>x>B,A>x>A"));
    assert_eq!(output, "Error:\nE6: FSA is nondeterministic");
}

#[test]
fn empty_initial_state_is_undefined() {
    let output = convert_text(&description("A,B", "x", "", "B", "A>x>B"));
    assert_eq!(output, "Error:\nE4: Initial state is not defined");
}

#[test]
fn unknown_symbol_is_reported_by_name() {
    let output = convert_text(&description("A,B", "x", "A", "B", "A>x>B,B>w>A,A>v>A"));
    assert_eq!(
        output,
        "Error:\nE3: A transition 'w' is not represented in the alphabet"
    );
}

#[test]
fn state_with_only_self_loop_is_disjoint() {
    let output = convert_text(&description("A,B", "x", "A", "A", "A>x>A"));
    assert_eq!(output, "Error:\nE2: Some states are disjoint");
}

#[test]
fn initial_state_not_declared() {
    let output = convert_text(&description("A,B", "x", "C", "B", "A>x>B"));
    assert_eq!(output, "Error:\nE1: A state 'C' is not in set of states");
}

#[test]
fn undeclared_final_state_is_reported() {
    let output = convert_text(&description("A,B", "x", "A", "Z", "A>x>B"));
    assert_eq!(output, "Error:\nE1: A state 'Z' is not in set of states");
}

#[test]
fn undeclared_transition_target_is_reported() {
    let output = convert_text(&description("A,B", "x,y", "A", "B", "A>x>B,B>y>Q"));
    assert_eq!(output, "Error:\nE1: A state 'Q' is not in set of states");
}

#[test]
fn nondeterminism_outranks_undefined_initial_state() {
    let output = convert_text(&description("A,B", "x", "", "B", "A>x>B,A>x>A"));
    assert_eq!(output, "Error:\nE6: FSA is nondeterministic");
}

#[test]
fn undefined_initial_outranks_unknown_symbol() {
    let output = convert_text(&description("A,B", "x", "", "B", "A>z>B"));
    assert_eq!(output, "Error:\nE4: Initial state is not defined");
}

#[test]
fn unknown_symbol_outranks_disjoint_states() {
    let output = convert_text(&description("A,B,C", "x", "A", "B", "A>z>B"));
    assert_eq!(
        output,
        "Error:\nE3: A transition 'z' is not represented in the alphabet"
    );
}

#[test]
fn disjoint_states_outrank_undeclared_initial() {
    let output = convert_text(&description("A,B,C", "x", "Z", "B", "A>x>B"));
    assert_eq!(output, "Error:\nE2: Some states are disjoint");
}

#[test]
fn duplicate_states_do_not_change_the_result() {
    let with_duplicates = convert_text(&description("A,B,A,B", "x", "A", "B", "A>x>B"));
    let without = convert_text(&description("A,B", "x", "A", "B", "A>x>B"));
    assert_eq!(with_duplicates, without);
}

#[test]
fn multiple_final_states_follow_declaration_order() {
    let forward = convert_text(&description("A,B", "x", "A", "A,B", "A>x>B"));
    let backward = convert_text(&description("A,B", "x", "A", "B,A", "A>x>B"));

    let to_a = "((eps)(eps)*(x)|(x))(({})(eps)*(x)|(eps))*(({})(eps)*(eps)|({}))|((eps)(eps)*(eps)|(eps))";
    let to_b = "((eps)(eps)*(x)|(x))(({})(eps)*(x)|(eps))*(({})(eps)*(x)|(eps))|((eps)(eps)*(x)|(x))";

    assert_eq!(forward, format!("{to_a}|{to_b}"));
    assert_eq!(backward, format!("{to_b}|{to_a}"));
}

#[test]
fn undeclared_transition_target_is_ignored_without_finals() {
    let output = convert_text(&description("A,B", "x", "A", "", "A>x>B,B>x>C"));
    assert_eq!(output, "{}");
}

#[test]
fn undeclared_initial_is_still_reported_without_finals() {
    let output = convert_text(&description("A,B", "x", "Z", "", "A>x>B"));
    assert_eq!(output, "Error:\nE1: A state 'Z' is not in set of states");
}

#[test]
fn separator_only_final_list_is_empty_language() {
    let output = convert_text(&description("A,B", "x", "A", ",", "A>x>B"));
    assert_eq!(output, "{}");
}

#[test]
fn trailing_separator_in_transition_is_accepted() {
    let with_trailing = convert_text(&description("A,B", "x", "A", "B", "A>x>B>"));
    let plain = convert_text(&description("A,B", "x", "A", "B", "A>x>B"));
    assert_eq!(with_trailing, plain);
    assert!(!plain.starts_with("Error:"));
}

#[test]
fn diagnose_reports_everything_in_priority_order() {
    let raw = RawInput::from_text(&description("A,B,C", "x", "", "B", "A>x>B,A>x>A,B>z>A"));
    assert_eq!(
        Validator::new().diagnose(&raw),
        vec![
            FsaError::Nondeterministic,
            FsaError::UndefinedInitialState,
            FsaError::SymbolNotInAlphabet { symbol: "z".into() },
            FsaError::DisjointStates,
            FsaError::UndeclaredState { state: String::new() },
        ]
    );
}
