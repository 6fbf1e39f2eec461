//! Quantity evaluation over the Cartesian product `times × [0, sample_size)`.
//!
//! Produces the per-event, per-gate, and per-top-gate-cut-set tables named
//! as the fixed output shape. Each row's `probability`/`intensity` vector is
//! indexed by the flattened `(time, sample)` pair, time-major.

use std::collections::HashMap;

use indexmap::IndexMap;

use pfta_core::boolean::Term;
use pfta_core::error::FaultTreeTextError;
use pfta_core::fault_tree::FaultTree;
use pfta_core::gate::GateType;
use pfta_core::kernel;
use pfta_core::model::ModelType;

use crate::analyze::expr;
use crate::sample::{self, SampledModels};

pub struct EventRow {
    pub index: usize,
    pub id: String,
    pub is_used: bool,
    pub label: Option<String>,
    pub probability: Vec<f64>,
    pub intensity: Vec<f64>,
}

pub struct GateRow {
    pub id: String,
    pub is_top_gate: bool,
    pub is_paged: bool,
    pub gate_type: GateType,
    pub inputs: Vec<String>,
    pub label: Option<String>,
    pub probability: Vec<f64>,
    pub intensity: Vec<f64>,
}

pub struct CutSetRow {
    pub cut_set: String,
    pub order: u32,
    pub probability: Vec<f64>,
    pub intensity: Vec<f64>,
}

pub struct AnalysisResult {
    pub times: Vec<f64>,
    pub sample_size: usize,
    pub events: Vec<EventRow>,
    pub gates: Vec<GateRow>,
    /// Cut-set tables, keyed by top-level gate id.
    pub cut_sets: IndexMap<String, Vec<CutSetRow>>,
}

/// Flattened `(time, sample)` index count.
fn point_count(fault_tree: &FaultTree) -> usize {
    fault_tree.times.len() * fault_tree.sample_size
}

fn time_at(fault_tree: &FaultTree, idx: usize) -> f64 {
    fault_tree.times[idx / fault_tree.sample_size]
}

/// The event's resolved `(model_type, parameter samples)`.
fn event_parameters<'a>(
    fault_tree: &FaultTree,
    sampled: &'a SampledModels,
    event: &pfta_core::event::Event,
) -> (ModelType, &'a IndexMap<String, Vec<f64>>) {
    match &event.model {
        pfta_core::event::EventModel::Reference { model_id, .. } => {
            let model = fault_tree.model_by_id(model_id).expect("validated: every event.model_id resolves");
            (model.model_type, &sampled[model_id])
        }
        pfta_core::event::EventModel::Inline { model_type, .. } => {
            (*model_type, &sampled[&format!("__event:{}", event.id)])
        }
    }
}

fn quantities_at(model_type: ModelType, params: &IndexMap<String, Vec<f64>>, idx: usize, t: f64) -> (f64, f64) {
    match model_type {
        ModelType::Undeveloped | ModelType::False => (0.0, 0.0),
        ModelType::True => (1.0, 0.0),
        ModelType::Fixed => (params["probability"][idx], params["intensity"][idx]),
        ModelType::ConstantRate => {
            let lambda = params.get("failure_rate").map(|v| v[idx]).unwrap_or_else(|| 1.0 / params["mean_failure_time"][idx]);
            let mu = params.get("repair_rate").map(|v| v[idx]).unwrap_or_else(|| 1.0 / params["mean_repair_time"][idx]);
            (kernel::constant_rate_probability(t, lambda, mu), kernel::constant_rate_intensity(t, lambda, mu))
        }
    }
}

/// `q`/`ω` of the intersection of the cut sets named by `subset`, a set of
/// indices into `terms`, at a single `(time, sample)` point.
fn intersection_quantities(
    subset: &[usize],
    terms: &[Term],
    event_q: &HashMap<usize, f64>,
    event_omega: &HashMap<usize, f64>,
) -> (f64, f64) {
    let combined = Term::conjunction(subset.iter().map(|&i| terms[i]));
    let indices = combined.event_indices();

    let probability = kernel::cut_set_probability(indices.iter().map(|index| event_q[index]));
    let factors: Vec<(f64, f64)> = indices.iter().map(|index| (event_q[index], event_omega[index])).collect();
    let intensity = kernel::cut_set_intensity(&factors);

    (probability, intensity)
}

/// Cut-set rendering: the factor event ids joined by `.`, in ascending
/// event-index order.
fn render_cut_set(term: Term, fault_tree: &FaultTree) -> String {
    let index_to_id: HashMap<usize, &str> = fault_tree.events.iter().map(|e| (e.index, e.id.as_str())).collect();
    term.event_indices()
        .into_iter()
        .map(|index| index_to_id[&index])
        .collect::<Vec<_>>()
        .join(".")
}

pub fn analyze(fault_tree: &FaultTree) -> Result<AnalysisResult, FaultTreeTextError> {
    tracing::debug!(
        events = fault_tree.events.len(),
        gates = fault_tree.gates.len(),
        "analyzing fault tree",
    );

    let sampled = sample::sample_models(fault_tree)?;
    let count = point_count(fault_tree);
    let tolerance = fault_tree.computational_tolerance;

    let mut event_q: HashMap<usize, Vec<f64>> = HashMap::new();
    let mut event_omega: HashMap<usize, Vec<f64>> = HashMap::new();
    let mut events = Vec::with_capacity(fault_tree.events.len());

    for event in &fault_tree.events {
        let (model_type, params) = event_parameters(fault_tree, &sampled, event);
        let mut probability = Vec::with_capacity(count);
        let mut intensity = Vec::with_capacity(count);
        for idx in 0..count {
            let t = time_at(fault_tree, idx);
            let (q, omega) = quantities_at(model_type, params, idx, t);
            probability.push(q);
            intensity.push(omega);
        }
        event_q.insert(event.index, probability.clone());
        event_omega.insert(event.index, intensity.clone());
        events.push(EventRow {
            index: event.index,
            id: event.id.clone(),
            is_used: fault_tree.is_event_used(&event.id),
            label: event.label.clone(),
            probability,
            intensity,
        });
    }

    let mut gates = Vec::with_capacity(fault_tree.gates.len());
    let mut cut_sets = IndexMap::new();

    for gate in fault_tree.gates.values() {
        let expression = expr::expression_of(fault_tree, &gate.id)
            .expect("gate graph validated acyclic and fully resolved before analysis");
        let terms: Vec<Term> = expression.terms().collect();
        let n = terms.len();
        tracing::trace!(gate = %gate.id, cut_sets = n, tolerance, "inclusion-exclusion over cut sets");

        let mut probability = Vec::with_capacity(count);
        let mut intensity = Vec::with_capacity(count);
        for idx in 0..count {
            let per_point_q: HashMap<usize, f64> = event_q.iter().map(|(&i, v)| (i, v[idx])).collect();
            let per_point_omega: HashMap<usize, f64> = event_omega.iter().map(|(&i, v)| (i, v[idx])).collect();

            let q = kernel::inclusion_exclusion(n, tolerance, |subset| {
                intersection_quantities(subset, &terms, &per_point_q, &per_point_omega).0
            });
            let omega = kernel::inclusion_exclusion(n, tolerance, |subset| {
                intersection_quantities(subset, &terms, &per_point_q, &per_point_omega).1
            });
            probability.push(q);
            intensity.push(omega);
        }

        let is_top_gate = fault_tree.is_top_gate(&gate.id);
        if is_top_gate {
            let mut rows = Vec::with_capacity(terms.len());
            for &term in &terms {
                let mut term_probability = Vec::with_capacity(count);
                let mut term_intensity = Vec::with_capacity(count);
                for idx in 0..count {
                    let indices = term.event_indices();
                    let qs = indices.iter().map(|index| event_q[index][idx]);
                    let factors: Vec<(f64, f64)> =
                        indices.iter().map(|index| (event_q[index][idx], event_omega[index][idx])).collect();
                    term_probability.push(kernel::cut_set_probability(qs));
                    term_intensity.push(kernel::cut_set_intensity(&factors));
                }
                rows.push(CutSetRow {
                    cut_set: render_cut_set(term, fault_tree),
                    order: term.order(),
                    probability: term_probability,
                    intensity: term_intensity,
                });
            }
            cut_sets.insert(gate.id.clone(), rows);
        }

        gates.push(GateRow {
            id: gate.id.clone(),
            is_top_gate,
            is_paged: gate.is_paged,
            gate_type: gate.gate_type,
            inputs: gate.inputs.clone(),
            label: gate.label.clone(),
            probability,
            intensity,
        });
    }

    Ok(AnalysisResult {
        times: fault_tree.times.clone(),
        sample_size: fault_tree.sample_size,
        events,
        gates,
        cut_sets,
    })
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod driver_tests;
