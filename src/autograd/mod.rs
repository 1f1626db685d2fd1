//! Reverse-mode autograd over scalar values
//!
//! Arithmetic on [`Scalar`] nodes builds a computation graph during the
//! forward pass; [`Scalar::backward`] walks the recorded graph and
//! accumulates gradients at every node that contributed to the result.

mod function;
mod ops;
mod scalar;


pub use function::{apply, Function};
pub use ops::{add, mul, neg, relu, scale, sub};
pub use scalar::Scalar;

/// Perform backward pass from a node
///
/// Seeds with 1.0 when no gradient is given (the usual seed for a loss node).
pub fn backward(node: &Scalar, grad: Option<f64>) {
    node.backward(grad.unwrap_or(1.0));
}
