//! Gates: internal fault tree nodes that combine the expressions of their
//! inputs.

use std::cell::RefCell;

use crate::boolean::Expression;

/// The combining rule a gate applies to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateType {
    And,
    Or,
    /// Identity: passes its single input through unchanged.
    Null,
    /// k-of-n: fails when at least `k` of its `n` inputs have failed.
    Vote(i64),
}

/// A gate: an ordered sequence of input identifiers (each resolving to an
/// `Event` or another `Gate`) combined per its `GateType`.
#[derive(Debug, Clone)]
pub struct Gate {
    pub id: String,
    pub label: Option<String>,
    pub gate_type: GateType,
    pub inputs: Vec<String>,
    pub is_paged: bool,
    pub declaration_line_number: usize,
    computed_expression: RefCell<Option<Expression>>,
}

impl Gate {
    pub fn new(
        id: impl Into<String>,
        label: Option<String>,
        gate_type: GateType,
        inputs: Vec<String>,
        is_paged: bool,
        declaration_line_number: usize,
    ) -> Self {
        Gate {
            id: id.into(),
            label,
            gate_type,
            inputs,
            is_paged,
            declaration_line_number,
            computed_expression: RefCell::new(None),
        }
    }

    /// Return this gate's memoised expression, computing it with `compute`
    /// on the first call. `compute` is expected to recursively resolve the
    /// gate's own inputs' expressions; since the gate graph is validated
    /// acyclic before any expression is requested, this recursion always
    /// terminates.
    pub fn expression_or_compute(&self, compute: impl FnOnce() -> Expression) -> Expression {
        if let Some(expression) = self.computed_expression.borrow().as_ref() {
            return expression.clone();
        }
        let expression = compute();
        *self.computed_expression.borrow_mut() = Some(expression.clone());
        expression
    }

    /// Input count, used to validate NULL (exactly 1) and VOTE(k) (`0 <= k <= n`).
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}

impl PartialEq for Gate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.label == other.label
            && self.gate_type == other.gate_type
            && self.inputs == other.inputs
            && self.is_paged == other.is_paged
            && self.declaration_line_number == other.declaration_line_number
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod gate_tests;
