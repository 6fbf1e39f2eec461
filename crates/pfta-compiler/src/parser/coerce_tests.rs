use super::*;

#[test]
fn float_accepts_finite_infinite_and_nan() {
    assert_eq!(coerce_float("1.5", 1).unwrap(), 1.5);
    assert!(coerce_float("inf", 1).unwrap().is_infinite());
    assert!(coerce_float("nan", 1).unwrap().is_nan());
    assert!(coerce_float("not a number", 1).is_err());
}

#[test]
fn float_list_splits_on_commas() {
    assert_eq!(coerce_float_list("1, 2, 3", 1).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn float_list_allows_one_trailing_comma() {
    assert_eq!(coerce_float_list("1, 2,", 1).unwrap(), vec![1.0, 2.0]);
}

#[test]
fn float_list_rejects_two_trailing_commas() {
    assert!(coerce_float_list("1, 2,,", 1).is_err());
}

#[test]
fn float_list_rejects_empty_element() {
    assert!(coerce_float_list("1,, 2", 1).is_err());
}

#[test]
fn integer_rejects_non_integral_tokens() {
    assert_eq!(coerce_integer("42", 1).unwrap(), 42);
    assert!(coerce_integer("4.2", 1).is_err());
}

#[test]
fn boolean_is_case_sensitive() {
    assert!(coerce_boolean("True", 1).unwrap());
    assert!(!coerce_boolean("False", 1).unwrap());
    assert!(coerce_boolean("true", 1).is_err());
}

#[test]
fn gate_type_parses_vote_with_k() {
    assert_eq!(coerce_gate_type("AND", 1).unwrap(), GateType::And);
    assert_eq!(coerce_gate_type("VOTE(2)", 1).unwrap(), GateType::Vote(2));
    assert!(coerce_gate_type("vote(2)", 1).is_err());
}

#[test]
fn model_type_matches_closed_set() {
    assert_eq!(coerce_model_type("ConstantRate", 1).unwrap(), ModelType::ConstantRate);
    assert!(coerce_model_type("constantrate", 1).is_err());
}

#[test]
fn distribution_bare_float_is_degenerate() {
    let d = coerce_distribution("0.1", 1).unwrap();
    assert!(matches!(d, Distribution::Degenerate { value, .. } if value == 0.1));
}

#[test]
fn distribution_uniform_call_form() {
    let d = coerce_distribution("uniform(lower=1, upper=2)", 1).unwrap();
    assert!(matches!(d, Distribution::Uniform { lower: 1.0, upper: 2.0, .. }));
}

#[test]
fn distribution_lognormal_call_form() {
    let d = coerce_distribution("lognormal(mu=0, sigma=1)", 1).unwrap();
    assert!(matches!(d, Distribution::LogNormal { mu: 0.0, sigma: 1.0, .. }));
}

#[test]
fn distribution_rejects_unknown_name() {
    assert!(coerce_distribution("bogus(a=1)", 1).is_err());
}

#[test]
fn distribution_rejects_out_of_domain_parameter() {
    let err = coerce_distribution("normal(mu=0, sigma=-1)", 1).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InvalidDistributionParameter { .. }));
}

#[test]
fn distribution_rejects_malformed_call() {
    assert!(coerce_distribution("uniform(lower=1 upper=2)", 1).is_err());
}
