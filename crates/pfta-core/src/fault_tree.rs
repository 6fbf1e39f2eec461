//! The fault tree itself: an immutable collection of models, events, and
//! gates built once from input text and never mutated thereafter.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::event::Event;
use crate::gate::Gate;
use crate::model::Model;

/// A fully assembled, validated fault tree. Every derived table (cut sets,
/// per-event/per-gate quantities) is a pure function of this value.
#[derive(Debug, Clone)]
pub struct FaultTree {
    pub time_unit: Option<String>,
    pub times: Vec<f64>,
    pub seed: Option<u64>,
    pub sample_size: usize,
    pub computational_tolerance: f64,
    pub models: IndexMap<String, Model>,
    pub events: Vec<Event>,
    pub gates: IndexMap<String, Gate>,
}

impl FaultTree {
    pub fn event_by_id(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn gate_by_id(&self, id: &str) -> Option<&Gate> {
        self.gates.get(id)
    }

    pub fn model_by_id(&self, id: &str) -> Option<&Model> {
        self.models.get(id)
    }

    /// Every identifier appearing as some gate's input, in no particular order.
    pub fn all_input_ids(&self) -> std::collections::BTreeSet<&str> {
        self.gates
            .values()
            .flat_map(|gate| gate.inputs.iter().map(String::as_str))
            .collect()
    }

    /// `event.is_used ⟺ some gate lists its id`.
    pub fn is_event_used(&self, event_id: &str) -> bool {
        self.all_input_ids().contains(event_id)
    }

    /// `gate.is_top_gate ⟺ no gate lists its id`.
    pub fn is_top_gate(&self, gate_id: &str) -> bool {
        !self.all_input_ids().contains(gate_id)
    }

    /// The set of top-level gate ids, in declaration order.
    pub fn top_gate_ids(&self) -> Vec<&str> {
        self.gates
            .keys()
            .filter(|id| self.is_top_gate(id))
            .map(String::as_str)
            .collect()
    }

    /// The directed graph on gates (edges: gate -> its gate-typed inputs),
    /// used for cycle detection. Event-typed inputs are leaves and are
    /// omitted since they can never participate in a cycle.
    pub fn gate_adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.gates
            .values()
            .map(|gate| {
                let gate_inputs: Vec<String> = gate
                    .inputs
                    .iter()
                    .filter(|input_id| self.gates.contains_key(*input_id))
                    .cloned()
                    .collect();
                (gate.id.clone(), gate_inputs)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "fault_tree_tests.rs"]
mod fault_tree_tests;
