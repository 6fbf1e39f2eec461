//! Error taxonomy for fault tree text.
//!
//! Two disjoint families: [`FaultTreeTextError`] is user-visible and
//! recoverable (every validation failure named by the format); the crate
//! never attempts local recovery, it just constructs and returns the value.
//! [`ImplementationError`] marks an invariant the rest of the pipeline is
//! supposed to guarantee — an unreachable branch taken anyway is a bug, not
//! a bad input, and is never caught.

/// A single diagnostic raised while parsing, building, or computing over
/// fault tree text. Every variant carries the line number it pertains to
/// (absent for cross-object problems such as a circular reference), a
/// one-line message, and an optional multi-line explainer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FaultTreeTextError {
    #[error("line {line_number}: {message}")]
    InvalidLine {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    SmotheredObject { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    DanglingProperty { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidClass {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    InvalidKey {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    DuplicateKey { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidFloat { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidInteger { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidBoolean {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    InvalidGateType {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    InvalidModelType {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    InvalidDistribution { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidDistributionParameter { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    DuplicateId { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    UnsetProperty { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    ModelPropertyClash { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidModelKeyCombo {
        line_number: usize,
        message: String,
        explainer: String,
    },
    #[error("line {line_number}: {message}")]
    NegativeValue { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    SubUnitValue { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidComputationalTolerance { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    UnknownModel { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    UnknownInput { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InputCount { line_number: usize, message: String },
    #[error("{message}")]
    CircularInputs { message: String },
    #[error("line {line_number}: {message}")]
    DistributionSamplingError { line_number: usize, message: String },
    #[error("line {line_number}: {message}")]
    InvalidProbabilityValue { line_number: usize, message: String },
}

impl FaultTreeTextError {
    /// The line the error pertains to, if any (cross-object problems such as
    /// a circular gate reference have none).
    pub fn line_number(&self) -> Option<usize> {
        use FaultTreeTextError::*;
        match self {
            InvalidLine { line_number, .. }
            | SmotheredObject { line_number, .. }
            | DanglingProperty { line_number, .. }
            | InvalidClass { line_number, .. }
            | InvalidKey { line_number, .. }
            | DuplicateKey { line_number, .. }
            | InvalidFloat { line_number, .. }
            | InvalidInteger { line_number, .. }
            | InvalidBoolean { line_number, .. }
            | InvalidGateType { line_number, .. }
            | InvalidModelType { line_number, .. }
            | InvalidDistribution { line_number, .. }
            | InvalidDistributionParameter { line_number, .. }
            | DuplicateId { line_number, .. }
            | UnsetProperty { line_number, .. }
            | ModelPropertyClash { line_number, .. }
            | InvalidModelKeyCombo { line_number, .. }
            | NegativeValue { line_number, .. }
            | SubUnitValue { line_number, .. }
            | InvalidComputationalTolerance { line_number, .. }
            | UnknownModel { line_number, .. }
            | UnknownInput { line_number, .. }
            | InputCount { line_number, .. }
            | DistributionSamplingError { line_number, .. }
            | InvalidProbabilityValue { line_number, .. } => Some(*line_number),
            CircularInputs { .. } => None,
        }
    }

    /// The one-line message, without the `line N:` prefix.
    pub fn message(&self) -> &str {
        use FaultTreeTextError::*;
        match self {
            InvalidLine { message, .. }
            | SmotheredObject { message, .. }
            | DanglingProperty { message, .. }
            | InvalidClass { message, .. }
            | InvalidKey { message, .. }
            | DuplicateKey { message, .. }
            | InvalidFloat { message, .. }
            | InvalidInteger { message, .. }
            | InvalidBoolean { message, .. }
            | InvalidGateType { message, .. }
            | InvalidModelType { message, .. }
            | InvalidDistribution { message, .. }
            | InvalidDistributionParameter { message, .. }
            | DuplicateId { message, .. }
            | UnsetProperty { message, .. }
            | ModelPropertyClash { message, .. }
            | InvalidModelKeyCombo { message, .. }
            | NegativeValue { message, .. }
            | SubUnitValue { message, .. }
            | InvalidComputationalTolerance { message, .. }
            | UnknownModel { message, .. }
            | UnknownInput { message, .. }
            | InputCount { message, .. }
            | CircularInputs { message, .. }
            | DistributionSamplingError { message, .. }
            | InvalidProbabilityValue { message, .. } => message,
        }
    }

    /// A multi-line elaboration of the recognised forms/values, when one exists.
    pub fn explainer(&self) -> Option<&str> {
        use FaultTreeTextError::*;
        match self {
            InvalidLine { explainer, .. }
            | InvalidClass { explainer, .. }
            | InvalidKey { explainer, .. }
            | InvalidBoolean { explainer, .. }
            | InvalidGateType { explainer, .. }
            | InvalidModelType { explainer, .. }
            | InvalidModelKeyCombo { explainer, .. } => Some(explainer),
            _ => None,
        }
    }
}

/// An internal invariant was violated: an unreachable branch was reached.
/// Never caught; propagation to the top is a bug report, not a diagnostic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("internal invariant violated: {0}")]
pub struct ImplementationError(pub String);

impl ImplementationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
