//! Concrete operations with forward and backward rules

use super::function::{apply, Function};
use super::Scalar;
use std::ops;

/// Add two nodes
pub fn add(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Box::new(Add), &[a, b])
}

struct Add;

impl Function for Add {
    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] + inputs[1]
    }

    fn backward(&self, _inputs: &[f64], grad: f64) -> Vec<f64> {
        // ∂(a+b)/∂a = ∂(a+b)/∂b = 1
        vec![grad, grad]
    }

    fn name(&self) -> &'static str {
        "Add"
    }
}

/// Subtract one node from another
pub fn sub(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Box::new(Sub), &[a, b])
}

struct Sub;

impl Function for Sub {
    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] - inputs[1]
    }

    fn backward(&self, _inputs: &[f64], grad: f64) -> Vec<f64> {
        // ∂(a-b)/∂a = 1, ∂(a-b)/∂b = -1
        vec![grad, -grad]
    }

    fn name(&self) -> &'static str {
        "Sub"
    }
}

/// Multiply two nodes
pub fn mul(a: &Scalar, b: &Scalar) -> Scalar {
    apply(Box::new(Mul), &[a, b])
}

struct Mul;

impl Function for Mul {
    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] * inputs[1]
    }

    fn backward(&self, inputs: &[f64], grad: f64) -> Vec<f64> {
        // ∂(ab)/∂a = b, ∂(ab)/∂b = a (forward-time values)
        vec![grad * inputs[1], grad * inputs[0]]
    }

    fn name(&self) -> &'static str {
        "Mul"
    }
}

/// Negate a node
pub fn neg(a: &Scalar) -> Scalar {
    apply(Box::new(Neg), &[a])
}

struct Neg;

impl Function for Neg {
    fn forward(&self, inputs: &[f64]) -> f64 {
        -inputs[0]
    }

    fn backward(&self, _inputs: &[f64], grad: f64) -> Vec<f64> {
        vec![-grad]
    }

    fn name(&self) -> &'static str {
        "Neg"
    }
}

/// Scale a node by a constant factor
pub fn scale(a: &Scalar, factor: f64) -> Scalar {
    apply(Box::new(Scale { factor }), &[a])
}

struct Scale {
    factor: f64,
}

impl Function for Scale {
    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] * self.factor
    }

    fn backward(&self, _inputs: &[f64], grad: f64) -> Vec<f64> {
        // ∂(c·a)/∂a = c
        vec![grad * self.factor]
    }

    fn name(&self) -> &'static str {
        "Scale"
    }
}

/// ReLU activation
pub fn relu(a: &Scalar) -> Scalar {
    apply(Box::new(Relu), &[a])
}

struct Relu;

impl Function for Relu {
    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].max(0.0)
    }

    fn backward(&self, inputs: &[f64], grad: f64) -> Vec<f64> {
        // ∂relu(a)/∂a = 1 for a > 0, else 0
        vec![if inputs[0] > 0.0 { grad } else { 0.0 }]
    }

    fn name(&self) -> &'static str {
        "Relu"
    }
}

// Operator sugar on references, so expressions keep sharing the operand
// handles instead of consuming them.

impl ops::Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Scalar {
        add(self, rhs)
    }
}

impl ops::Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Scalar {
        sub(self, rhs)
    }
}

impl ops::Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Scalar {
        mul(self, rhs)
    }
}

impl ops::Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg(self)
    }
}
