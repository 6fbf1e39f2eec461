use super::*;

#[test]
fn fixed_admits_exactly_one_combo() {
    let combos = Model::valid_key_combos(ModelType::Fixed);
    assert_eq!(combos, &[&["probability", "intensity"]]);
}

#[test]
fn constant_rate_admits_four_combos() {
    let combos = Model::valid_key_combos(ModelType::ConstantRate);
    assert_eq!(combos.len(), 4);
    assert!(combos.contains(&["failure_rate", "repair_rate"].as_slice()));
    assert!(combos.contains(&["mean_failure_time", "mean_repair_time"].as_slice()));
}

#[test]
fn undeveloped_true_false_admit_no_parameters() {
    for model_type in [ModelType::Undeveloped, ModelType::True, ModelType::False] {
        assert_eq!(Model::valid_key_combos(model_type), &[&[] as &[&str]]);
    }
}

#[test]
fn model_constructor_preserves_fields() {
    let model = Model::new("M1", Some("pump".to_string()), ModelType::Fixed, Parameters::new(), 3);
    assert_eq!(model.id, "M1");
    assert_eq!(model.label.as_deref(), Some("pump"));
    assert_eq!(model.model_type, ModelType::Fixed);
    assert_eq!(model.declaration_line_number, 3);
}
