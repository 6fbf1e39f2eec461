use super::*;
use crate::build::builder::build;
use crate::parser::parse;

fn validate_text(text: &str) -> Result<(), FaultTreeTextError> {
    let (fault_tree, line_numbers) = build(&parse(text).unwrap()).unwrap();
    validate(&fault_tree, &line_numbers)
}

#[test]
fn unset_times_is_rejected() {
    let err = validate_text("- seed: 1").unwrap_err();
    assert!(matches!(err, FaultTreeTextError::UnsetProperty { .. }));
}

#[test]
fn negative_times_is_rejected() {
    let err = validate_text("- times: 1, -2").unwrap_err();
    assert!(matches!(err, FaultTreeTextError::NegativeValue { .. }));
}

#[test]
fn sub_unit_sample_size_is_rejected() {
    let err = validate_text("- times: 1\n- sample_size: 0").unwrap_err();
    assert!(matches!(err, FaultTreeTextError::SubUnitValue { .. }));
}

#[test]
fn out_of_range_tolerance_is_rejected() {
    let err = validate_text("- times: 1\n- computational_tolerance: 1").unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InvalidComputationalTolerance { .. }));
}

#[test]
fn negative_tolerance_is_rejected() {
    let err = validate_text("- times: 1\n- computational_tolerance: -0.1").unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InvalidComputationalTolerance { .. }));
}

#[test]
fn event_referencing_unknown_model_is_rejected() {
    let text = "- times: 1\n\nEvent: E1\n- model: NoSuchModel";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::UnknownModel { .. }));
}

#[test]
fn gate_referencing_unknown_input_is_rejected() {
    let text = "- times: 1\n\nGate: G1\n- type: OR\n- inputs: NoSuchInput";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::UnknownInput { .. }));
}

#[test]
fn null_gate_with_more_than_one_input_is_rejected() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Event: B\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Gate: G1\n- type: NULL\n- inputs: A, B";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InputCount { .. }));
}

#[test]
fn vote_gate_with_k_above_input_count_is_rejected() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Gate: G1\n- type: VOTE(2)\n- inputs: A";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InputCount { .. }));
}

#[test]
fn vote_gate_with_negative_k_is_rejected() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Gate: G1\n- type: VOTE(-1)\n- inputs: A";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InputCount { .. }));
}

#[test]
fn self_referential_gate_is_a_circular_input() {
    let text = "- times: 1\n\nGate: A\n- type: OR\n- inputs: A";
    let err = validate_text(text).unwrap_err();
    match err {
        FaultTreeTextError::CircularInputs { message } => {
            assert!(message.contains("(A,)"), "message was: {message}");
        }
        other => panic!("expected CircularInputs, got {other:?}"),
    }
}

#[test]
fn mutually_referential_gates_are_a_circular_input() {
    let text = "- times: 1\n\nGate: A\n- type: OR\n- inputs: B\n\nGate: B\n- type: OR\n- inputs: A";
    let err = validate_text(text).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::CircularInputs { .. }));
}

#[test]
fn a_well_formed_tree_validates_cleanly() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Event: B\n- model_type: Fixed\n- probability: 0.2\n- intensity: 0\n\n\
                Gate: Top\n- type: AND\n- inputs: A, B";
    validate_text(text).unwrap();
}
