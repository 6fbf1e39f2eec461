use super::*;
use crate::boolean::Term;
use std::cell::Cell;

fn gate(gate_type: GateType, inputs: &[&str]) -> Gate {
    Gate::new(
        "G1",
        None,
        gate_type,
        inputs.iter().map(|s| s.to_string()).collect(),
        false,
        1,
    )
}

#[test]
fn expression_is_computed_once_and_cached() {
    let g = gate(GateType::Or, &["A"]);
    let calls = Cell::new(0);

    let first = g.expression_or_compute(|| {
        calls.set(calls.get() + 1);
        Expression::single(Term::from_event_index(0))
    });
    let second = g.expression_or_compute(|| {
        calls.set(calls.get() + 1);
        Expression::single(Term::from_event_index(0))
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(first, second);
}

#[test]
fn input_count_matches_inputs_length() {
    let g = gate(GateType::And, &["A", "B", "C"]);
    assert_eq!(g.input_count(), 3);
}

#[test]
fn null_and_vote_are_distinct_types() {
    assert_ne!(GateType::Null, GateType::Vote(1));
    assert_eq!(GateType::Vote(2), GateType::Vote(2));
}

#[test]
fn equality_ignores_memoised_expression_cache() {
    let a = gate(GateType::Or, &["A"]);
    let b = gate(GateType::Or, &["A"]);
    a.expression_or_compute(|| Expression::single(Term::from_event_index(0)));
    assert_eq!(a, b);
}
