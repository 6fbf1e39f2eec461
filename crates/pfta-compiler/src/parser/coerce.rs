//! Typed coercion of raw property value strings.

use pfta_core::distribution::Distribution;
use pfta_core::error::FaultTreeTextError;
use pfta_core::gate::GateType;
use pfta_core::model::ModelType;

pub fn coerce_float(value: &str, line_number: usize) -> Result<f64, FaultTreeTextError> {
    value.trim().parse::<f64>().map_err(|_| FaultTreeTextError::InvalidFloat {
        line_number,
        message: format!("invalid float `{value}`"),
    })
}

/// A comma-separated list of floats. One trailing comma is permitted; more
/// than one, or an empty element anywhere, is invalid.
pub fn coerce_float_list(value: &str, line_number: usize) -> Result<Vec<f64>, FaultTreeTextError> {
    let trimmed = value.trim();
    let invalid = || FaultTreeTextError::InvalidFloat {
        line_number,
        message: format!("invalid float list `{value}`"),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let body = match trimmed.strip_suffix(',') {
        Some(rest) => {
            if rest.trim_end().ends_with(',') {
                return Err(invalid());
            }
            rest
        }
        None => trimmed,
    };

    body.split(',')
        .map(|element| {
            if element.trim().is_empty() {
                return Err(invalid());
            }
            coerce_float(element, line_number)
        })
        .collect()
}

pub fn coerce_integer(value: &str, line_number: usize) -> Result<i64, FaultTreeTextError> {
    value.trim().parse::<i64>().map_err(|_| FaultTreeTextError::InvalidInteger {
        line_number,
        message: format!("invalid integer `{value}`"),
    })
}

const BOOLEAN_EXPLAINER: &str = "Boolean property must be `True` or `False` (case-sensitive).";

pub fn coerce_boolean(value: &str, line_number: usize) -> Result<bool, FaultTreeTextError> {
    match value {
        "True" => Ok(true),
        "False" => Ok(false),
        _ => Err(FaultTreeTextError::InvalidBoolean {
            line_number,
            message: format!("invalid boolean `{value}`"),
            explainer: BOOLEAN_EXPLAINER.to_string(),
        }),
    }
}

const GATE_TYPE_EXPLAINER: &str = "Gate type must be `AND`, `OR`, `NULL`, or `VOTE(<k>)` (case-sensitive).";

pub fn coerce_gate_type(value: &str, line_number: usize) -> Result<GateType, FaultTreeTextError> {
    match value {
        "AND" => return Ok(GateType::And),
        "OR" => return Ok(GateType::Or),
        "NULL" => return Ok(GateType::Null),
        _ => {}
    }

    if let Some(inner) = value.strip_prefix("VOTE(").and_then(|s| s.strip_suffix(')')) {
        if let Ok(k) = inner.trim().parse::<i64>() {
            return Ok(GateType::Vote(k));
        }
    }

    Err(FaultTreeTextError::InvalidGateType {
        line_number,
        message: format!("invalid gate type `{value}`"),
        explainer: GATE_TYPE_EXPLAINER.to_string(),
    })
}

const MODEL_TYPE_EXPLAINER: &str =
    "Recognised model types are `Undeveloped`, `True`, `False`, `Fixed`, and `ConstantRate`.";

pub fn coerce_model_type(value: &str, line_number: usize) -> Result<ModelType, FaultTreeTextError> {
    match value {
        "Undeveloped" => Ok(ModelType::Undeveloped),
        "True" => Ok(ModelType::True),
        "False" => Ok(ModelType::False),
        "Fixed" => Ok(ModelType::Fixed),
        "ConstantRate" => Ok(ModelType::ConstantRate),
        _ => Err(FaultTreeTextError::InvalidModelType {
            line_number,
            message: format!("invalid model type `{value}`"),
            explainer: MODEL_TYPE_EXPLAINER.to_string(),
        }),
    }
}

/// A distribution value: either a bare float (`Degenerate`) or a call
/// `name(key=expr, ...)` where `name` is one of `uniform`, `loguniform`,
/// `normal`, `lognormal`.
pub fn coerce_distribution(value: &str, line_number: usize) -> Result<Distribution, FaultTreeTextError> {
    let trimmed = value.trim();

    if let Ok(bare) = coerce_float(trimmed, line_number) {
        return Ok(Distribution::Degenerate { value: bare, line_number });
    }

    let invalid_syntax = || FaultTreeTextError::InvalidDistribution {
        line_number,
        message: format!("invalid distribution `{value}`"),
    };
    let invalid_parameter = |detail: String| FaultTreeTextError::InvalidDistributionParameter {
        line_number,
        message: format!("invalid distribution parameter in `{value}`: {detail}"),
    };

    let open = trimmed.find('(').ok_or_else(invalid_syntax)?;
    let name = &trimmed[..open];
    let args_str = trimmed.strip_suffix(')').ok_or_else(invalid_syntax)?[open + 1..].to_string();

    let mut args = std::collections::BTreeMap::new();
    if !args_str.trim().is_empty() {
        for pair in args_str.split(',') {
            let (key, val) = pair.split_once('=').ok_or_else(invalid_syntax)?;
            let key = key.trim();
            let val = coerce_float(val, line_number).map_err(|_| invalid_syntax())?;
            if args.insert(key.to_string(), val).is_some() {
                return Err(invalid_syntax());
            }
        }
    }

    let get = |key: &str| args.get(key).copied().ok_or_else(invalid_syntax);

    let distribution = match name {
        "uniform" => Distribution::Uniform {
            lower: get("lower")?,
            upper: get("upper")?,
            line_number,
        },
        "loguniform" => Distribution::LogUniform {
            lower: get("lower")?,
            upper: get("upper")?,
            line_number,
        },
        "normal" => Distribution::Normal {
            mu: get("mu")?,
            sigma: get("sigma")?,
            line_number,
        },
        "lognormal" => Distribution::LogNormal {
            mu: get("mu")?,
            sigma: get("sigma")?,
            line_number,
        },
        _ => return Err(invalid_syntax()),
    };

    distribution.validate().map_err(invalid_parameter)?;
    Ok(distribution)
}

#[cfg(test)]
#[path = "coerce_tests.rs"]
mod coerce_tests;
