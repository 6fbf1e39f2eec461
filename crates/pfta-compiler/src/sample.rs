//! Distribution sampling over a seeded generator.
//!
//! Draw order is declaration order (models, then each model's parameters in
//! the order recorded on [`pfta_core::model::Parameters`]), then per-time,
//! then per-sample, per the reproducibility contract: identical text and
//! seed reproduce bit-identical draws.

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as _, LogNormal, Normal};

use pfta_core::distribution::Distribution;
use pfta_core::error::FaultTreeTextError;
use pfta_core::fault_tree::FaultTree;

/// Parameter keys whose samples must be probabilities in `[0, 1]`.
const PROBABILITY_KEYS: &[&str] = &["probability"];

/// Parameter keys whose samples must be non-negative.
const NONNEGATIVE_KEYS: &[&str] =
    &["intensity", "failure_rate", "repair_rate", "mean_failure_time", "mean_repair_time"];

/// `model_id -> (parameter_key -> samples)`, one sample per
/// `(time, sample_index)` pair flattened in time-major order.
pub type SampledModels = IndexMap<String, IndexMap<String, Vec<f64>>>;

/// Draw every model parameter's samples, `times.len() * sample_size` draws
/// each, in declaration order.
pub fn sample_models(fault_tree: &FaultTree) -> Result<SampledModels, FaultTreeTextError> {
    let seed = fault_tree.seed.unwrap_or(0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let count = fault_tree.times.len() * fault_tree.sample_size;
    tracing::debug!(seed, count, "sampling model parameters");

    let mut sampled = SampledModels::new();
    for model in fault_tree.models.values() {
        let mut parameters = IndexMap::new();
        for (key, distribution) in &model.parameters {
            tracing::trace!(model = %model.id, parameter = %key, "drawing");
            let draws = draw(*distribution, count, &mut rng)?;
            check_domain(key, *distribution, &draws)?;
            parameters.insert(key.clone(), draws);
        }
        sampled.insert(model.id.clone(), parameters);
    }

    for event in &fault_tree.events {
        if let pfta_core::event::EventModel::Inline { model_type: _, parameters } = &event.model {
            let mut drawn = IndexMap::new();
            for (key, distribution) in parameters {
                let draws = draw(*distribution, count, &mut rng)?;
                check_domain(key, *distribution, &draws)?;
                drawn.insert(key.clone(), draws);
            }
            sampled.insert(format!("__event:{}", event.id), drawn);
        }
    }

    Ok(sampled)
}

fn draw(distribution: Distribution, count: usize, rng: &mut ChaCha8Rng) -> Result<Vec<f64>, FaultTreeTextError> {
    let line_number = distribution.line_number();
    let samples = match distribution {
        Distribution::Degenerate { value, .. } => vec![value; count],
        Distribution::Uniform { lower, upper, .. } => (0..count).map(|_| rng.gen_range(lower..=upper)).collect(),
        Distribution::LogUniform { lower, upper, .. } => {
            let (log_lower, log_upper) = (lower.ln(), upper.ln());
            (0..count).map(|_| rng.gen_range(log_lower..=log_upper).exp()).collect()
        }
        Distribution::Normal { mu, sigma, .. } => {
            let normal = Normal::new(mu, sigma).map_err(|error| FaultTreeTextError::DistributionSamplingError {
                line_number,
                message: format!("normal distribution could not be constructed: {error}"),
            })?;
            (0..count).map(|_| normal.sample(rng)).collect()
        }
        Distribution::LogNormal { mu, sigma, .. } => {
            let log_normal =
                LogNormal::new(mu, sigma).map_err(|error| FaultTreeTextError::DistributionSamplingError {
                    line_number,
                    message: format!("log-normal distribution could not be constructed: {error}"),
                })?;
            (0..count).map(|_| log_normal.sample(rng)).collect()
        }
    };

    if let Some(&bad) = samples.iter().find(|s| s.is_nan() || s.is_infinite()) {
        return Err(FaultTreeTextError::DistributionSamplingError {
            line_number,
            message: format!("sample drawn out of range: {bad}"),
        });
    }

    Ok(samples)
}

fn check_domain(key: &str, distribution: Distribution, draws: &[f64]) -> Result<(), FaultTreeTextError> {
    let line_number = distribution.line_number();

    if PROBABILITY_KEYS.contains(&key) {
        if let Some(&bad) = draws.iter().find(|&&v| !(0.0..=1.0).contains(&v)) {
            return Err(FaultTreeTextError::InvalidProbabilityValue {
                line_number,
                message: format!("`{key}` sample {bad} is not a valid probability in [0, 1]"),
            });
        }
    }

    if NONNEGATIVE_KEYS.contains(&key) {
        if let Some(&bad) = draws.iter().find(|&&v| v < 0.0) {
            return Err(FaultTreeTextError::NegativeValue {
                line_number,
                message: format!("`{key}` sample {bad} is negative"),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod sample_tests;
