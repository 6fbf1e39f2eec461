//! Statistical failure models attached to primary events.

use indexmap::IndexMap;

use crate::distribution::Distribution;

/// The kind of statistical model a `Model` or inline event model represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// Never fails; excluded from analysis by convention of having no cut sets.
    Undeveloped,
    /// Always failed (`q = 1`, `ω = 0`).
    True,
    /// Never failed (`q = 0`, `ω = 0`).
    False,
    /// Carries `probability`/`intensity` distributions sampled directly as q/ω.
    Fixed,
    /// Carries failure/repair rate distributions evaluated through the
    /// constant-rate kernel.
    ConstantRate,
}

/// Parameter name for a model's distribution, keyed by the `ModelType`'s
/// valid key combination.
pub type Parameters = IndexMap<String, Distribution>;

/// A named statistical model, owned by the fault tree and referenced by zero
/// or more events via `model_id`, or inlined directly on an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub id: String,
    pub label: Option<String>,
    pub model_type: ModelType,
    pub parameters: Parameters,
    pub declaration_line_number: usize,
}

impl Model {
    pub fn new(
        id: impl Into<String>,
        label: Option<String>,
        model_type: ModelType,
        parameters: Parameters,
        declaration_line_number: usize,
    ) -> Self {
        Model {
            id: id.into(),
            label,
            model_type,
            parameters,
            declaration_line_number,
        }
    }

    /// The parameter keys this model's type admits (one of a small closed
    /// set of valid combinations for `ConstantRate`; `Fixed` has exactly one
    /// combination; `Undeveloped`/`True`/`False` admit none).
    pub fn valid_key_combos(model_type: ModelType) -> &'static [&'static [&'static str]] {
        match model_type {
            ModelType::Undeveloped | ModelType::True | ModelType::False => &[&[]],
            ModelType::Fixed => &[&["probability", "intensity"]],
            ModelType::ConstantRate => &[
                &["failure_rate", "repair_rate"],
                &["failure_rate", "mean_repair_time"],
                &["mean_failure_time", "repair_rate"],
                &["mean_failure_time", "mean_repair_time"],
            ],
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod model_tests;
