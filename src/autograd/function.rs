//! Operation trait and graph construction

use super::Scalar;

/// Trait for differentiable scalar operations
///
/// Each operation defines a forward rule mapping its inputs to an output
/// value, and a backward rule distributing the output gradient back to
/// one gradient per input, positionally matched.
pub trait Function {
    /// Compute the output value from the inputs, in operand order
    fn forward(&self, inputs: &[f64]) -> f64;

    /// Compute per-input gradients given the gradient of the output
    ///
    /// `inputs` holds the forward-time values captured by [`apply`]; the
    /// returned vector must match them in order and count.
    fn backward(&self, inputs: &[f64], grad: f64) -> Vec<f64>;

    /// Human-readable name for debugging
    fn name(&self) -> &'static str;
}

/// One application of an operation: the rule plus the forward-time input
/// values it consumed
///
/// Created once per operator invocation and owned by the node it produced.
/// The captured raw inputs drive the backward math; graph traversal uses
/// the node-level operand handles.
pub(crate) struct Application {
    op: Box<dyn Function>,
    inputs: Vec<f64>,
}

impl Application {
    pub(crate) fn backward(&self, grad: f64) -> Vec<f64> {
        self.op.backward(&self.inputs, grad)
    }

    pub(crate) fn name(&self) -> &'static str {
        self.op.name()
    }
}

/// Apply an operation to operand nodes, producing the output node
///
/// This is the sole graph-construction primitive: it extracts the operand
/// values in order, runs the forward rule, and wires the result's
/// provenance back to the operation and its operands.
pub fn apply(op: Box<dyn Function>, operands: &[&Scalar]) -> Scalar {
    let inputs: Vec<f64> = operands.iter().map(|s| s.value()).collect();
    let value = op.forward(&inputs);
    let operands: Vec<Scalar> = operands.iter().map(|&s| s.clone()).collect();
    Scalar::from_application(value, operands, Application { op, inputs })
}
