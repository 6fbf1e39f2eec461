//! Bottom-up, memoised expression construction.
//!
//! Event expressions are trivial (a single single-bit term). A gate's
//! expression dispatches on its `GateType`, recursing into its own inputs'
//! expressions first. The gate graph is validated acyclic before this is
//! ever called, so the recursion always terminates.

use pfta_core::boolean::Expression;
use pfta_core::error::ImplementationError;
use pfta_core::fault_tree::FaultTree;
use pfta_core::gate::GateType;

/// The computed expression of the object (event or gate) named `id`.
pub fn expression_of(fault_tree: &FaultTree, id: &str) -> Result<Expression, ImplementationError> {
    if let Some(event) = fault_tree.event_by_id(id) {
        return Ok(event.computed_expression());
    }

    let gate = fault_tree
        .gate_by_id(id)
        .ok_or_else(|| ImplementationError::new(format!("`{id}` resolves to neither an event nor a gate")))?;

    let mut recursion_error = None;
    let expression = gate.expression_or_compute(|| {
        let input_expressions: Vec<Expression> = gate
            .inputs
            .iter()
            .filter_map(|input_id| match expression_of(fault_tree, input_id) {
                Ok(expr) => Some(expr),
                Err(error) => {
                    recursion_error = Some(error);
                    None
                }
            })
            .collect();

        match gate.gate_type {
            GateType::And => Expression::conjunction(input_expressions.iter()),
            GateType::Or => Expression::disjunction(input_expressions.iter()),
            GateType::Null => input_expressions
                .into_iter()
                .next()
                .unwrap_or_else(Expression::false_),
            GateType::Vote(k) => Expression::vote(&input_expressions, k),
        }
    });

    if let Some(error) = recursion_error {
        return Err(error);
    }
    Ok(expression)
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod expr_tests;
