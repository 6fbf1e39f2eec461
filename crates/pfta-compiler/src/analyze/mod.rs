//! Bottom-up expression construction and quantity evaluation: the analysis
//! driver tying the built fault tree to its output tables.

pub mod driver;
pub mod expr;

pub use driver::{analyze, AnalysisResult, CutSetRow, EventRow, GateRow};
