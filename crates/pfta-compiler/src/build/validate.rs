//! The post-assembly validation pipeline: every check that needs the fully
//! assembled fault tree (as opposed to a single property in isolation).

use pfta_core::cycles::find_cycles;
use pfta_core::error::FaultTreeTextError;
use pfta_core::fault_tree::FaultTree;
use pfta_core::gate::GateType;

use super::builder::FaultTreeLineNumbers;

pub fn validate(fault_tree: &FaultTree, line_numbers: &FaultTreeLineNumbers) -> Result<(), FaultTreeTextError> {
    validate_times(fault_tree, line_numbers)?;
    validate_sample_size(fault_tree, line_numbers)?;
    validate_computational_tolerance(fault_tree, line_numbers)?;
    validate_event_models(fault_tree)?;
    validate_gate_inputs(fault_tree)?;
    validate_gate_input_counts(fault_tree)?;
    validate_cycle_free(fault_tree)?;
    Ok(())
}

fn validate_times(fault_tree: &FaultTree, line_numbers: &FaultTreeLineNumbers) -> Result<(), FaultTreeTextError> {
    let line_number = line_numbers.times.unwrap_or(line_numbers.fault_tree_header);

    if fault_tree.times.is_empty() {
        return Err(FaultTreeTextError::UnsetProperty {
            line_number,
            message: "required property `times` is not set".to_string(),
        });
    }

    if let Some(&negative) = fault_tree.times.iter().find(|&&t| t < 0.0) {
        return Err(FaultTreeTextError::NegativeValue {
            line_number,
            message: format!("`times` must be non-negative, got {negative}"),
        });
    }

    Ok(())
}

fn validate_sample_size(fault_tree: &FaultTree, line_numbers: &FaultTreeLineNumbers) -> Result<(), FaultTreeTextError> {
    if fault_tree.sample_size < 1 {
        return Err(FaultTreeTextError::SubUnitValue {
            line_number: line_numbers.sample_size.unwrap_or(line_numbers.fault_tree_header),
            message: format!("`sample_size` must be at least 1, got {}", fault_tree.sample_size),
        });
    }
    Ok(())
}

fn validate_computational_tolerance(
    fault_tree: &FaultTree,
    line_numbers: &FaultTreeLineNumbers,
) -> Result<(), FaultTreeTextError> {
    let tolerance = fault_tree.computational_tolerance;
    if !(0.0..1.0).contains(&tolerance) {
        return Err(FaultTreeTextError::InvalidComputationalTolerance {
            line_number: line_numbers.computational_tolerance.unwrap_or(line_numbers.fault_tree_header),
            message: format!("`computational_tolerance` must lie in [0, 1), got {tolerance}"),
        });
    }
    Ok(())
}

fn validate_event_models(fault_tree: &FaultTree) -> Result<(), FaultTreeTextError> {
    for event in &fault_tree.events {
        if let Some(model_id) = event.model_id() {
            if fault_tree.model_by_id(model_id).is_none() {
                let line_number = match &event.model {
                    pfta_core::event::EventModel::Reference { line_number, .. } => *line_number,
                    pfta_core::event::EventModel::Inline { .. } => event.declaration_line_number,
                };
                return Err(FaultTreeTextError::UnknownModel {
                    line_number,
                    message: format!("event `{}` references unknown model `{model_id}`", event.id),
                });
            }
        }
    }
    Ok(())
}

fn validate_gate_inputs(fault_tree: &FaultTree) -> Result<(), FaultTreeTextError> {
    for gate in fault_tree.gates.values() {
        for input_id in &gate.inputs {
            let resolves = fault_tree.event_by_id(input_id).is_some() || fault_tree.gate_by_id(input_id).is_some();
            if !resolves {
                return Err(FaultTreeTextError::UnknownInput {
                    line_number: gate.declaration_line_number,
                    message: format!("gate `{}` references unknown input `{input_id}`", gate.id),
                });
            }
        }
    }
    Ok(())
}

fn validate_gate_input_counts(fault_tree: &FaultTree) -> Result<(), FaultTreeTextError> {
    for gate in fault_tree.gates.values() {
        match gate.gate_type {
            GateType::Null if gate.input_count() != 1 => {
                return Err(FaultTreeTextError::InputCount {
                    line_number: gate.declaration_line_number,
                    message: format!("NULL gate `{}` must have exactly one input, got {}", gate.id, gate.input_count()),
                })
            }
            GateType::Vote(k) => {
                let n = gate.input_count() as i64;
                if !(0..=n).contains(&k) {
                    return Err(FaultTreeTextError::InputCount {
                        line_number: gate.declaration_line_number,
                        message: format!("VOTE({k}) gate `{}` requires 0 <= k <= {n}", gate.id),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn validate_cycle_free(fault_tree: &FaultTree) -> Result<(), FaultTreeTextError> {
    let adjacency = fault_tree.gate_adjacency();
    let cycles = find_cycles(&adjacency);

    let Some(smallest_cycle) = cycles.into_iter().min() else {
        return Ok(());
    };

    // Rendered as a Python-style tuple literal, including the trailing comma
    // that disambiguates a length-1 tuple (a self-referential gate).
    let rendered = if smallest_cycle.len() == 1 {
        format!("{},", smallest_cycle[0])
    } else {
        smallest_cycle.join(", ")
    };
    Err(FaultTreeTextError::CircularInputs {
        message: format!("circular gate reference: ({rendered})"),
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
