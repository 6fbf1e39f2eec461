//! Assembly-to-fault-tree construction and the validation pipeline that
//! runs over the result.

pub mod builder;
pub mod validate;

use pfta_core::error::FaultTreeTextError;
use pfta_core::fault_tree::FaultTree;

use crate::parser::Assembly;

/// Build and validate a fault tree from its parsed assemblies.
pub fn build(assemblies: &[Assembly]) -> Result<FaultTree, FaultTreeTextError> {
    let (fault_tree, line_numbers) = builder::build(assemblies)?;
    tracing::trace!(
        events = fault_tree.events.len(),
        gates = fault_tree.gates.len(),
        models = fault_tree.models.len(),
        "built",
    );

    validate::validate(&fault_tree, &line_numbers)?;
    tracing::debug!("validated");

    Ok(fault_tree)
}

#[cfg(test)]
mod build_tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn builds_and_validates_a_minimal_tree() {
        let tree = build(&parse("- times: 1").unwrap()).unwrap();
        assert_eq!(tree.times, vec![1.0]);
    }

    #[test]
    fn propagates_validation_failures() {
        let err = build(&parse("- seed: 1").unwrap()).unwrap_err();
        assert!(matches!(err, FaultTreeTextError::UnsetProperty { .. }));
    }
}
