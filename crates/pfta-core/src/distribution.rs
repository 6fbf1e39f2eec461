//! Statistical distributions attached to model parameters.

/// A parameter's statistical distribution, tagged by shape. Each variant
/// carries the source line number of the property it was parsed from, so
/// sampling errors downstream can still point back at the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// A constant value: every draw returns `value`.
    Degenerate { value: f64, line_number: usize },
    /// Continuous uniform on `[lower, upper]`.
    Uniform {
        lower: f64,
        upper: f64,
        line_number: usize,
    },
    /// Uniform on `log(x)` for `x` in `[lower, upper]`, `lower > 0`.
    LogUniform {
        lower: f64,
        upper: f64,
        line_number: usize,
    },
    /// Normal with mean `mu` and standard deviation `sigma`.
    Normal {
        mu: f64,
        sigma: f64,
        line_number: usize,
    },
    /// Log-normal: `log(x)` is normal with mean `mu` and standard deviation `sigma`.
    LogNormal {
        mu: f64,
        sigma: f64,
        line_number: usize,
    },
}

impl Distribution {
    pub fn line_number(self) -> usize {
        match self {
            Distribution::Degenerate { line_number, .. }
            | Distribution::Uniform { line_number, .. }
            | Distribution::LogUniform { line_number, .. }
            | Distribution::Normal { line_number, .. }
            | Distribution::LogNormal { line_number, .. } => line_number,
        }
    }

    /// Check the shape-specific domain invariants (finite parameters,
    /// `lower <= upper`, `lower > 0` for log-uniform, `sigma > 0` for
    /// log-normal only — a normal distribution's `sigma` may be zero, a
    /// degenerate point mass at `mu`), returning a human-readable violation
    /// description on failure.
    pub fn validate(self) -> Result<(), String> {
        match self {
            Distribution::Degenerate { value, .. } => require_finite("value", value),
            Distribution::Uniform { lower, upper, .. } => {
                require_finite("lower", lower)?;
                require_finite("upper", upper)?;
                require(lower <= upper, format!("uniform distribution requires lower <= upper, got {lower} > {upper}"))
            }
            Distribution::LogUniform { lower, upper, .. } => {
                require_finite("lower", lower)?;
                require_finite("upper", upper)?;
                require(lower > 0.0, format!("log-uniform distribution requires lower > 0, got {lower}"))?;
                require(lower <= upper, format!("log-uniform distribution requires lower <= upper, got {lower} > {upper}"))
            }
            Distribution::Normal { mu, sigma, .. } => {
                require_finite("mu", mu)?;
                require_finite("sigma", sigma)
            }
            Distribution::LogNormal { mu, sigma, .. } => {
                require_finite("mu", mu)?;
                require_finite("sigma", sigma)?;
                require(sigma > 0.0, format!("log-normal distribution requires sigma > 0, got {sigma}"))
            }
        }
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), String> {
    require(value.is_finite(), format!("{name} must be finite, got {value}"))
}

fn require(condition: bool, message: String) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(message)
    }
}

#[cfg(test)]
#[path = "distribution_tests.rs"]
mod distribution_tests;
