//! Reliability computation kernel: the constant-rate failure/repair model and
//! inclusion-exclusion evaluation of cut-set and gate quantities.
//!
//! The constant-rate functions are total over the extended reals (every
//! combination of zero/finite/infinite/NaN rates and times produces a
//! defined, possibly-NaN, result) rather than partial functions that panic
//! or propagate floating-point exceptions silently.

use crate::numeric::{descending_product, descending_sum};

/// Instantaneous failure probability `q(t)` for a component with constant
/// failure rate `lambda` and repair rate `mu`.
///
/// `q(t) = λ/(λ+μ) · (1 − exp(−(λ+μ)t))`, extended to zero/infinite/NaN
/// rates and times by the corner-case table below (`i|n` = ∞ or NaN):
///
/// | λ | μ | t | q |
/// |---|---|---|---|
/// | 0 | 0 | ∞ or NaN | NaN |
/// | 0 | 0 | other | 0 |
/// | 0 | ∞ | any | 0 |
/// | 0 | NaN | ∞ or NaN | NaN |
/// | 0 | NaN | other | 0 |
/// | 0 | finite>0 | any | 0 |
/// | ∞ | ∞ or NaN | any | NaN |
/// | ∞ | finite | 0 or NaN | NaN |
/// | ∞ | finite | other | 1 |
/// | NaN | any | any | NaN |
/// | finite>0 | ∞ | any | 0 |
/// | finite>0 | NaN | any | NaN |
/// | finite>0 | finite | any | computable |
pub fn constant_rate_probability(t: f64, lambda: f64, mu: f64) -> f64 {
    if lambda == 0.0 {
        if mu == 0.0 {
            return if t.is_infinite() || t.is_nan() { f64::NAN } else { 0.0 };
        }
        if mu.is_infinite() {
            return 0.0;
        }
        if mu.is_nan() {
            return if t.is_infinite() || t.is_nan() { f64::NAN } else { 0.0 };
        }
        return 0.0;
    }

    if lambda.is_infinite() {
        if mu.is_infinite() || mu.is_nan() {
            return f64::NAN;
        }
        if t == 0.0 || t.is_nan() {
            return f64::NAN;
        }
        return 1.0;
    }

    if lambda.is_nan() {
        return f64::NAN;
    }

    if mu.is_infinite() {
        return 0.0;
    }
    if mu.is_nan() {
        return f64::NAN;
    }

    lambda / (lambda + mu) * (-((-(lambda + mu) * t).exp_m1()))
}

/// Instantaneous failure intensity `ω(t) = λ(1 − q(t))` for a component with
/// constant failure rate `lambda` and repair rate `mu`.
///
/// | λ | μ | t | ω |
/// |---|---|---|---|
/// | 0 | any | any | 0 |
/// | ∞ | ∞ or NaN | any | NaN |
/// | ∞ | finite | 0 or NaN | NaN |
/// | ∞ | finite | other | μ |
/// | NaN | any | any | NaN |
/// | finite>0 | ∞ | any | λ |
/// | finite>0 | NaN | any | NaN |
/// | finite>0 | finite | any | computable |
pub fn constant_rate_intensity(t: f64, lambda: f64, mu: f64) -> f64 {
    if lambda == 0.0 {
        return 0.0;
    }

    if lambda.is_infinite() {
        if mu.is_infinite() || mu.is_nan() {
            return f64::NAN;
        }
        if t == 0.0 || t.is_nan() {
            return f64::NAN;
        }
        return mu;
    }

    if lambda.is_nan() {
        return f64::NAN;
    }

    if mu.is_infinite() {
        return lambda;
    }
    if mu.is_nan() {
        return f64::NAN;
    }

    let q = constant_rate_probability(t, lambda, mu);
    lambda * (1.0 - q)
}

/// Failure probability of a cut set (a conjunction of independent factors)
/// given each factor's own failure probability: `Π q[factor]`, reduced by
/// descending magnitude.
pub fn cut_set_probability(factor_probabilities: impl IntoIterator<Item = f64>) -> f64 {
    descending_product(factor_probabilities)
}

/// Failure intensity of a cut set via the product rule for differentiating
/// a conjunction of independent factors:
///
/// ω[C] = Σ_i ω[factor_i] · Π_{j≠i} q[factor_j]
///
/// Both the outer sum and each inner product are reduced by descending
/// magnitude.
pub fn cut_set_intensity(factors: &[(f64, f64)]) -> f64 {
    let terms = factors.iter().enumerate().map(|(i, &(_, omega_i))| {
        let others = factors
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &(q_j, _))| q_j);
        omega_i * descending_product(others)
    });
    descending_sum(terms)
}

/// Evaluate a gate's failure probability via inclusion-exclusion over the
/// probabilities of the intersections (conjunctions) of its minimal cut
/// sets, with convergence-based truncation.
///
/// `intersection_probability(subset)` computes `q[∩ S]` for a non-empty
/// subset of cut-set indices `0..n`. After each outer step `k`, if the
/// magnitude of the latest step's contribution relative to the running
/// partial sum (including that step) falls below `tolerance`, evaluation
/// halts early and the current partial sum is reported. Terms within a
/// step are summed in descending magnitude.
pub fn inclusion_exclusion<F>(n: usize, tolerance: f64, mut intersection_probability: F) -> f64
where
    F: FnMut(&[usize]) -> f64,
{
    if n == 0 {
        return 0.0;
    }

    let mut partial_sum = 0.0;
    let mut subset = Vec::with_capacity(n);

    for k in 1..=n {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let mut step_terms = Vec::new();

        subset.clear();
        combine(n, k, &mut subset, &mut |s| {
            step_terms.push(intersection_probability(s));
        });

        let step_sum = sign * descending_sum(step_terms.iter().copied());
        partial_sum += step_sum;

        if partial_sum != 0.0 && (step_sum.abs() / partial_sum.abs()) < tolerance {
            break;
        }
    }

    partial_sum
}

/// Invoke `visit` once for every `k`-element subset of `0..n`, as ascending
/// index lists.
fn combine(n: usize, k: usize, current: &mut Vec<usize>, visit: &mut impl FnMut(&[usize])) {
    fn recurse(start: usize, n: usize, k: usize, current: &mut Vec<usize>, visit: &mut impl FnMut(&[usize])) {
        if current.len() == k {
            visit(current);
            return;
        }
        for i in start..n {
            current.push(i);
            recurse(i + 1, n, k, current, visit);
            current.pop();
        }
    }
    recurse(0, n, k, current, visit);
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod kernel_tests;
