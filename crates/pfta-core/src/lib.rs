//! Core data structures and pure computation for fault tree reliability
//! analysis: Boolean algebra over primary events, the constant-rate
//! failure/repair kernel, and the domain value types assembled from parsed
//! input text.

pub mod boolean;
pub mod cycles;
pub mod distribution;
pub mod error;
pub mod event;
pub mod fault_tree;
pub mod gate;
pub mod kernel;
pub mod model;
pub mod numeric;

pub use boolean::{Expression, Term};
pub use distribution::Distribution;
pub use error::{FaultTreeTextError, ImplementationError};
pub use event::{Event, EventModel};
pub use fault_tree::FaultTree;
pub use gate::{Gate, GateType};
pub use model::{Model, ModelType, Parameters};
