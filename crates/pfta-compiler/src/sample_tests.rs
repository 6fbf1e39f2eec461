use super::*;
use pfta_core::event::{Event, EventModel};
use pfta_core::gate::Gate;
use pfta_core::model::{Model, ModelType, Parameters};

fn degenerate_tree(seed: Option<u64>) -> FaultTree {
    let mut parameters = Parameters::new();
    parameters.insert("probability".to_string(), Distribution::Degenerate { value: 0.25, line_number: 1 });
    parameters.insert("intensity".to_string(), Distribution::Degenerate { value: 0.0, line_number: 1 });
    let model = Model::new("M1", None, ModelType::Fixed, parameters, 1);

    FaultTree {
        time_unit: None,
        times: vec![0.0, 1.0],
        seed,
        sample_size: 3,
        computational_tolerance: 1e-6,
        models: IndexMap::from([(model.id.clone(), model)]),
        events: Vec::new(),
        gates: IndexMap::<String, Gate>::new(),
    }
}

#[test]
fn degenerate_distribution_repeats_its_value() {
    let tree = degenerate_tree(Some(1));
    let sampled = sample_models(&tree).unwrap();
    let draws = &sampled["M1"]["probability"];
    assert_eq!(draws.len(), tree.times.len() * tree.sample_size);
    assert!(draws.iter().all(|&v| v == 0.25));
}

fn with_uniform_rate(seed: Option<u64>) -> FaultTree {
    let mut tree = degenerate_tree(seed);
    tree.models.insert(
        "R".to_string(),
        Model::new(
            "R",
            None,
            ModelType::ConstantRate,
            Parameters::from([(
                "failure_rate".to_string(),
                Distribution::Uniform { lower: 0.0, upper: 100.0, line_number: 3 },
            )]),
            3,
        ),
    );
    tree
}

#[test]
fn same_seed_reproduces_identical_draws() {
    let tree = with_uniform_rate(Some(7));
    let first = sample_models(&tree).unwrap();
    let second = sample_models(&tree).unwrap();
    assert_eq!(first["R"]["failure_rate"], second["R"]["failure_rate"]);
}

#[test]
fn different_seeds_diverge() {
    let a = sample_models(&with_uniform_rate(Some(1))).unwrap();
    let b = sample_models(&with_uniform_rate(Some(2))).unwrap();
    assert_ne!(a["R"]["failure_rate"], b["R"]["failure_rate"]);
}

#[test]
fn probability_out_of_range_is_rejected() {
    let mut tree = degenerate_tree(Some(1));
    tree.models.insert(
        "Bad".to_string(),
        Model::new(
            "Bad",
            None,
            ModelType::Fixed,
            Parameters::from([
                ("probability".to_string(), Distribution::Degenerate { value: 1.5, line_number: 5 }),
                ("intensity".to_string(), Distribution::Degenerate { value: 0.0, line_number: 5 }),
            ]),
            5,
        ),
    );
    let err = sample_models(&tree).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::InvalidProbabilityValue { .. }));
}

#[test]
fn negative_rate_is_rejected() {
    let mut tree = degenerate_tree(Some(1));
    tree.models.insert(
        "Bad".to_string(),
        Model::new(
            "Bad",
            None,
            ModelType::ConstantRate,
            Parameters::from([("failure_rate".to_string(), Distribution::Degenerate { value: -1.0, line_number: 6 })]),
            6,
        ),
    );
    let err = sample_models(&tree).unwrap_err();
    assert!(matches!(err, FaultTreeTextError::NegativeValue { .. }));
}

#[test]
fn normal_with_zero_sigma_samples_as_a_constant() {
    let mut tree = degenerate_tree(Some(1));
    tree.models.insert(
        "Constant".to_string(),
        Model::new(
            "Constant",
            None,
            ModelType::ConstantRate,
            Parameters::from([(
                "failure_rate".to_string(),
                Distribution::Normal { mu: 0.1, sigma: 0.0, line_number: 8 },
            )]),
            8,
        ),
    );
    let sampled = sample_models(&tree).unwrap();
    assert!(sampled["Constant"]["failure_rate"].iter().all(|&v| (v - 0.1).abs() < 1e-12));
}

#[test]
fn inline_event_models_are_sampled_under_a_synthetic_key() {
    let mut tree = degenerate_tree(Some(1));
    tree.events.push(Event::new(
        "E1",
        0,
        None,
        EventModel::Inline {
            model_type: ModelType::Fixed,
            parameters: Parameters::from([
                ("probability".to_string(), Distribution::Degenerate { value: 0.5, line_number: 9 }),
                ("intensity".to_string(), Distribution::Degenerate { value: 0.0, line_number: 9 }),
            ]),
        },
        9,
    ));
    let sampled = sample_models(&tree).unwrap();
    assert!(sampled.contains_key("__event:E1"));
}
