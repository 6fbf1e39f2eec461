//! Assembly typing: the third parsing pass.

use pfta_core::error::FaultTreeTextError;

use super::lex::Line;
use super::paragraph::Paragraph;

const VALID_CLASSES: &[&str] = &["Model", "Event", "Gate"];

const FAULT_TREE_KEYS: &[&str] = &["time_unit", "times", "seed", "sample_size", "computational_tolerance"];
const MODEL_KEYS: &[&str] = &[
    "label",
    "comment",
    "model_type",
    "probability",
    "intensity",
    "failure_rate",
    "repair_rate",
    "mean_failure_time",
    "mean_repair_time",
];
const EVENT_KEYS: &[&str] = &[
    "label",
    "comment",
    "model",
    "model_type",
    "probability",
    "intensity",
    "failure_rate",
    "repair_rate",
    "mean_failure_time",
    "mean_repair_time",
];
const GATE_KEYS: &[&str] = &["label", "comment", "is_paged", "type", "inputs"];

fn valid_keys(class: &str) -> &'static [&'static str] {
    match class {
        "FaultTree" => FAULT_TREE_KEYS,
        "Model" => MODEL_KEYS,
        "Event" => EVENT_KEYS,
        "Gate" => GATE_KEYS,
        _ => unreachable!("class already validated by this point"),
    }
}

fn class_explainer() -> String {
    format!("An object must have class {}.", natural_join_backticks(VALID_CLASSES))
}

fn key_explainer(class: &str) -> String {
    format!("Recognised keys are {}.", natural_join_backticks(valid_keys(class)))
}

fn natural_join_backticks(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("`{s}`")).collect();
    match quoted.len() {
        0 => String::new(),
        1 => quoted[0].clone(),
        2 => format!("{} and {}", quoted[0], quoted[1]),
        _ => {
            let (last, rest) = quoted.split_last().unwrap();
            format!("{}, and {last}", rest.join(", "))
        }
    }
}

/// A property setting with its coercion-ready raw value and source line.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProperty {
    pub key: String,
    pub value: String,
    pub line_number: usize,
}

/// A paragraph promoted to a typed object declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub class: String,
    pub id: Option<String>,
    /// Line number of the object header, or of the first property when the
    /// assembly is the implicit headerless `FaultTree`.
    pub line_number: usize,
    pub properties: Vec<RawProperty>,
}

/// Type every paragraph into an `Assembly`, validating object class and
/// property keys along the way. Only the very first paragraph may lack an
/// object header.
pub fn assemble(paragraphs: &[Paragraph]) -> Result<Vec<Assembly>, FaultTreeTextError> {
    paragraphs
        .iter()
        .enumerate()
        .map(|(i, paragraph)| assemble_one(paragraph, i == 0))
        .collect()
}

fn assemble_one(paragraph: &Paragraph, is_first: bool) -> Result<Assembly, FaultTreeTextError> {
    let (class, id, line_number) = match &paragraph.object {
        Some(Line::Object { class, id, line_number }) => {
            if !VALID_CLASSES.contains(&class.as_str()) {
                return Err(FaultTreeTextError::InvalidClass {
                    line_number: *line_number,
                    message: format!("invalid class `{class}`"),
                    explainer: class_explainer(),
                });
            }
            (class.clone(), Some(id.clone()), *line_number)
        }
        Some(_) => unreachable!("paragraph.object is always a Line::Object when present"),
        None => {
            if !is_first {
                let dangling = &paragraph.properties[0];
                let Line::Property { key, line_number, .. } = dangling else {
                    unreachable!("paragraph.properties only ever holds Line::Property")
                };
                return Err(FaultTreeTextError::DanglingProperty {
                    line_number: *line_number,
                    message: format!("missing object declaration before setting property `{key}`"),
                });
            }
            let line_number = paragraph.properties.first().map(Line::line_number).unwrap_or(1);
            ("FaultTree".to_string(), None, line_number)
        }
    };

    let mut properties = Vec::with_capacity(paragraph.properties.len());
    let mut seen_keys = std::collections::BTreeSet::new();

    for line in &paragraph.properties {
        let Line::Property { key, value, line_number } = line else {
            unreachable!("paragraph.properties only ever holds Line::Property")
        };

        if !valid_keys(&class).contains(&key.as_str()) {
            return Err(FaultTreeTextError::InvalidKey {
                line_number: *line_number,
                message: format!("invalid key `{key}` for a property setting under class `{class}`"),
                explainer: key_explainer(&class),
            });
        }

        if !seen_keys.insert(key.clone()) {
            return Err(FaultTreeTextError::DuplicateKey {
                line_number: *line_number,
                message: format!("duplicate key `{key}` for a property setting under class `{class}`"),
            });
        }

        properties.push(RawProperty {
            key: key.clone(),
            value: value.clone(),
            line_number: *line_number,
        });
    }

    Ok(Assembly { class, id, line_number, properties })
}

#[cfg(test)]
#[path = "assembly_tests.rs"]
mod assembly_tests;
