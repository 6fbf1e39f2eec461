use super::*;
use crate::build::build;
use crate::parser::parse;

fn analyze_text(text: &str) -> AnalysisResult {
    let fault_tree = build(&parse(text).unwrap()).unwrap();
    analyze(&fault_tree).unwrap()
}

#[test]
fn blank_fault_tree_with_only_times_yields_no_rows() {
    let result = analyze_text("- times: 1");
    assert!(result.events.is_empty());
    assert!(result.gates.is_empty());
    assert!(result.cut_sets.is_empty());
}

#[test]
fn single_fixed_event_under_or_gate() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Gate: Top\n- type: OR\n- inputs: A";
    let result = analyze_text(text);
    let top = result.gates.iter().find(|g| g.id == "Top").unwrap();
    assert!((top.probability[0] - 0.1).abs() < 1e-9);
    assert!((top.intensity[0] - 0.0).abs() < 1e-9);
}

#[test]
fn two_independent_events_under_and_gate() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Event: B\n- model_type: Fixed\n- probability: 0.2\n- intensity: 0\n\n\
                Gate: Top\n- type: AND\n- inputs: A, B";
    let result = analyze_text(text);
    let top = result.gates.iter().find(|g| g.id == "Top").unwrap();
    assert!((top.probability[0] - 0.02).abs() < 1e-9);
}

#[test]
fn two_independent_events_under_or_gate() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Event: B\n- model_type: Fixed\n- probability: 0.2\n- intensity: 0\n\n\
                Gate: Top\n- type: OR\n- inputs: A, B";
    let result = analyze_text(text);
    let top = result.gates.iter().find(|g| g.id == "Top").unwrap();
    assert!((top.probability[0] - 0.28).abs() < 1e-9);
}

#[test]
fn top_gate_has_a_cut_set_table_with_rendered_ids() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Event: B\n- model_type: Fixed\n- probability: 0.2\n- intensity: 0\n\n\
                Gate: Top\n- type: AND\n- inputs: A, B";
    let result = analyze_text(text);
    let rows = &result.cut_sets["Top"];
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cut_set, "A.B");
    assert_eq!(rows[0].order, 2);
}

#[test]
fn non_top_gate_is_excluded_from_cut_set_tables() {
    let text = "- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n\n\
                Gate: Leaf\n- type: NULL\n- inputs: A\n\n\
                Gate: Top\n- type: NULL\n- inputs: Leaf";
    let result = analyze_text(text);
    assert!(!result.cut_sets.contains_key("Leaf"));
    assert!(result.cut_sets.contains_key("Top"));
}

#[test]
fn staircase_of_and_or_gates_produces_finite_probabilities() {
    let mut text = String::from("- times: 1\n\nEvent: A\n- model_type: Fixed\n- probability: 0.1\n- intensity: 0\n");
    let mut previous = "A".to_string();
    for depth in 0..20 {
        let gate_type = if depth % 2 == 0 { "AND" } else { "OR" };
        let id = format!("G{depth}");
        text.push_str(&format!("\nGate: {id}\n- type: {gate_type}\n- inputs: {previous}, A\n"));
        previous = id;
    }
    let result = analyze_text(&text);
    let top = result.gates.iter().find(|g| g.id == previous).unwrap();
    assert!(top.probability[0].is_finite());
}
