//! Assembly-walk construction of a `FaultTree` from parsed assemblies.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use pfta_core::error::FaultTreeTextError;
use pfta_core::event::{Event, EventModel};
use pfta_core::fault_tree::FaultTree;
use pfta_core::gate::Gate;
use pfta_core::model::{Model, ModelType, Parameters};

use crate::parser::assembly::{Assembly, RawProperty};
use crate::parser::coerce;

/// Default `computational_tolerance` when the property is unset.
pub const DEFAULT_COMPUTATIONAL_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_SAMPLE_SIZE: usize = 1;

const ALL_MODEL_PARAM_KEYS: &[&str] =
    &["probability", "intensity", "failure_rate", "repair_rate", "mean_failure_time", "mean_repair_time"];

/// Source line numbers for the scalar `FaultTree` properties, kept
/// alongside the built tree so the validation pipeline can still point at
/// the right line even though `FaultTree` itself doesn't carry per-field
/// line numbers (they're not part of the value's public shape).
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultTreeLineNumbers {
    /// The implicit `FaultTree` paragraph's own header/first line, used as
    /// a fallback when a property was never set.
    pub fault_tree_header: usize,
    pub times: Option<usize>,
    pub sample_size: Option<usize>,
    pub computational_tolerance: Option<usize>,
}

/// Walk `assemblies` in declaration order, constructing the fault tree's
/// raw domain objects. Does not run the post-hoc validation pipeline; call
/// [`crate::build::validate::validate`] on the result.
pub fn build(assemblies: &[Assembly]) -> Result<(FaultTree, FaultTreeLineNumbers), FaultTreeTextError> {
    let mut fault_tree = FaultTree {
        time_unit: None,
        times: Vec::new(),
        seed: None,
        sample_size: DEFAULT_SAMPLE_SIZE,
        computational_tolerance: DEFAULT_COMPUTATIONAL_TOLERANCE,
        models: IndexMap::new(),
        events: Vec::new(),
        gates: IndexMap::new(),
    };

    let mut line_numbers = FaultTreeLineNumbers::default();
    let mut seen_ids: BTreeSet<String> = BTreeSet::new();
    let mut event_index = 0usize;

    for assembly in assemblies {
        if let Some(id) = &assembly.id {
            if !seen_ids.insert(id.clone()) {
                return Err(FaultTreeTextError::DuplicateId {
                    line_number: assembly.line_number,
                    message: format!("identifier `{id}` already used"),
                });
            }
        }

        match assembly.class.as_str() {
            "FaultTree" => absorb_fault_tree(&mut fault_tree, &mut line_numbers, assembly)?,
            "Model" => {
                let model = build_model(assembly)?;
                fault_tree.models.insert(model.id.clone(), model);
            }
            "Event" => {
                let event = build_event(assembly, event_index)?;
                event_index += 1;
                fault_tree.events.push(event);
            }
            "Gate" => {
                let gate = build_gate(assembly)?;
                fault_tree.gates.insert(gate.id.clone(), gate);
            }
            other => unreachable!("assembler only ever produces {{FaultTree,Model,Event,Gate}}, got {other}"),
        }
    }

    Ok((fault_tree, line_numbers))
}

fn find<'a>(properties: &'a [RawProperty], key: &str) -> Option<&'a RawProperty> {
    properties.iter().find(|p| p.key == key)
}

fn absorb_fault_tree(
    fault_tree: &mut FaultTree,
    line_numbers: &mut FaultTreeLineNumbers,
    assembly: &Assembly,
) -> Result<(), FaultTreeTextError> {
    line_numbers.fault_tree_header = assembly.line_number;

    if let Some(p) = find(&assembly.properties, "time_unit") {
        fault_tree.time_unit = Some(p.value.clone());
    }
    if let Some(p) = find(&assembly.properties, "times") {
        fault_tree.times = coerce::coerce_float_list(&p.value, p.line_number)?;
        line_numbers.times = Some(p.line_number);
    }
    if let Some(p) = find(&assembly.properties, "seed") {
        fault_tree.seed = Some(coerce::coerce_integer(&p.value, p.line_number)? as u64);
    }
    if let Some(p) = find(&assembly.properties, "sample_size") {
        fault_tree.sample_size = coerce::coerce_integer(&p.value, p.line_number)? as usize;
        line_numbers.sample_size = Some(p.line_number);
    }
    if let Some(p) = find(&assembly.properties, "computational_tolerance") {
        fault_tree.computational_tolerance = coerce::coerce_float(&p.value, p.line_number)?;
        line_numbers.computational_tolerance = Some(p.line_number);
    }
    Ok(())
}

fn build_model(assembly: &Assembly) -> Result<Model, FaultTreeTextError> {
    let id = assembly.id.clone().expect("Model assembly always has a header id");
    let label = find(&assembly.properties, "label").map(|p| p.value.clone());

    let model_type_property = find(&assembly.properties, "model_type").ok_or_else(|| {
        FaultTreeTextError::UnsetProperty {
            line_number: assembly.line_number,
            message: format!("model `{id}` is missing required property `model_type`"),
        }
    })?;
    let model_type = coerce::coerce_model_type(&model_type_property.value, model_type_property.line_number)?;

    let parameters = build_model_parameters(&id, model_type, &assembly.properties, assembly.line_number)?;

    Ok(Model::new(id, label, model_type, parameters, assembly.line_number))
}

fn build_model_parameters(
    owner_id: &str,
    model_type: ModelType,
    properties: &[RawProperty],
    line_number: usize,
) -> Result<Parameters, FaultTreeTextError> {
    let present: BTreeSet<&str> = properties
        .iter()
        .map(|p| p.key.as_str())
        .filter(|key| ALL_MODEL_PARAM_KEYS.contains(key))
        .collect();

    let combos = Model::valid_key_combos(model_type);
    let matching_combo = combos
        .iter()
        .find(|combo| present.len() == combo.len() && combo.iter().all(|k| present.contains(k)));

    let combo = matching_combo.ok_or_else(|| FaultTreeTextError::InvalidModelKeyCombo {
        line_number,
        message: format!("model `{owner_id}` has an invalid parameter key combination for its model type"),
        explainer: explain_combos(combos),
    })?;

    let mut parameters = Parameters::new();
    for key in *combo {
        let property = find(properties, key).expect("key presence already confirmed by the combo match above");
        let distribution = coerce::coerce_distribution(&property.value, property.line_number)?;
        parameters.insert(key.to_string(), distribution);
    }
    Ok(parameters)
}

fn explain_combos(combos: &[&[&str]]) -> String {
    let rendered: Vec<String> = combos
        .iter()
        .map(|combo| format!("({})", combo.join(", ")))
        .collect();
    format!("Valid parameter combinations are: {}.", rendered.join("; "))
}

fn build_event(assembly: &Assembly, index: usize) -> Result<Event, FaultTreeTextError> {
    let id = assembly.id.clone().expect("Event assembly always has a header id");
    let label = find(&assembly.properties, "label").map(|p| p.value.clone());

    let model_ref = find(&assembly.properties, "model");
    let model_type_property = find(&assembly.properties, "model_type");

    let model = match (model_ref, model_type_property) {
        (Some(model_property), None) => EventModel::Reference {
            model_id: model_property.value.clone(),
            line_number: model_property.line_number,
        },
        (None, Some(model_type_property)) => {
            let model_type = coerce::coerce_model_type(&model_type_property.value, model_type_property.line_number)?;
            let parameters = build_model_parameters(&id, model_type, &assembly.properties, assembly.line_number)?;
            EventModel::Inline { model_type, parameters }
        }
        (Some(model_property), Some(_)) => {
            return Err(FaultTreeTextError::ModelPropertyClash {
                line_number: model_property.line_number,
                message: format!("event `{id}` sets both `model` and an inline `model_type`"),
            })
        }
        (None, None) => {
            return Err(FaultTreeTextError::UnsetProperty {
                line_number: assembly.line_number,
                message: format!("event `{id}` has neither a `model` reference nor an inline `model_type`"),
            })
        }
    };

    Ok(Event::new(id, index, label, model, assembly.line_number))
}

fn build_gate(assembly: &Assembly) -> Result<Gate, FaultTreeTextError> {
    let id = assembly.id.clone().expect("Gate assembly always has a header id");
    let label = find(&assembly.properties, "label").map(|p| p.value.clone());

    let is_paged = match find(&assembly.properties, "is_paged") {
        Some(p) => coerce::coerce_boolean(&p.value, p.line_number)?,
        None => false,
    };

    let type_property = find(&assembly.properties, "type").ok_or_else(|| FaultTreeTextError::UnsetProperty {
        line_number: assembly.line_number,
        message: format!("gate `{id}` is missing required property `type`"),
    })?;
    let gate_type = coerce::coerce_gate_type(&type_property.value, type_property.line_number)?;

    let inputs_property = find(&assembly.properties, "inputs").ok_or_else(|| FaultTreeTextError::UnsetProperty {
        line_number: assembly.line_number,
        message: format!("gate `{id}` is missing required property `inputs`"),
    })?;
    let inputs = split_id_list(&inputs_property.value);

    Ok(Gate::new(id, label, gate_type, inputs, is_paged, assembly.line_number))
}

fn split_id_list(value: &str) -> Vec<String> {
    value
        .trim()
        .trim_end_matches(',')
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
