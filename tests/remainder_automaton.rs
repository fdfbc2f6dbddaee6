//! End-to-end behaviour of the remainder automaton through the public API.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use remainder_fsm::{FiniteStateMachine, RemainderAutomaton, RemainderError, Residue};

const SCENARIOS: [(&str, u8); 10] = [
    ("0", 0),
    ("1", 1),
    ("10", 2),
    ("11", 0),
    ("100", 1),
    ("1010", 1),
    ("1100", 0),
    ("1111", 0),
    ("10000", 1),
    ("10101", 0),
];

#[test]
fn computes_known_remainders() {
    let mut automaton = RemainderAutomaton::new();

    for (binary, expected) in SCENARIOS {
        assert_eq!(
            automaton.compute_remainder(binary),
            Ok(expected),
            "remainder of {binary}"
        );
    }
}

#[test]
fn leading_zeros_do_not_change_the_remainder() {
    let mut automaton = RemainderAutomaton::new();

    assert_eq!(automaton.compute_remainder("0001010"), Ok(1));
    assert_eq!(automaton.compute_remainder("0000"), Ok(0));
}

#[test]
fn rejects_empty_input() {
    let mut automaton = RemainderAutomaton::new();

    let err = automaton.compute_remainder("").unwrap_err();
    assert_eq!(err, RemainderError::EmptyInput);
    assert_eq!(err.to_string(), "Input string cannot be empty");
}

#[test]
fn rejects_non_binary_characters() {
    let mut automaton = RemainderAutomaton::new();

    for input in ["102", "2", "1 0", "abc", "10\n", "１"] {
        assert!(
            matches!(
                automaton.compute_remainder(input),
                Err(RemainderError::InvalidCharacter { .. })
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn failed_call_does_not_leak_into_next_call() {
    let mut automaton = RemainderAutomaton::new();

    assert_eq!(automaton.compute_remainder("10"), Ok(2));
    assert!(automaton.compute_remainder("1012").is_err());
    assert_eq!(automaton.compute_remainder("1"), Ok(1));
}

#[test]
fn results_do_not_depend_on_call_order() {
    let mut forward = RemainderAutomaton::new();
    let mut backward = RemainderAutomaton::new();

    let forward_results = SCENARIOS
        .iter()
        .map(|(binary, _)| forward.compute_remainder(binary))
        .collect::<Vec<_>>();
    let mut backward_results = SCENARIOS
        .iter()
        .rev()
        .map(|(binary, _)| backward.compute_remainder(binary))
        .collect::<Vec<_>>();
    backward_results.reverse();

    assert_eq!(forward_results, backward_results);
}

#[test]
fn independent_instances_agree() {
    let mut first = RemainderAutomaton::new();
    let mut second = RemainderAutomaton::default();

    for (binary, _) in SCENARIOS {
        assert_eq!(
            first.compute_remainder(binary),
            second.compute_remainder(binary)
        );
    }
}

#[test]
fn terminal_state_is_always_final() {
    let mut automaton = RemainderAutomaton::new();

    for (binary, expected) in SCENARIOS {
        automaton.compute_remainder(binary).unwrap();
        assert!(automaton.fsm().is_accepting());
        assert_eq!(Some(*automaton.fsm().current_state()), Residue::from_value(expected));
    }
}
