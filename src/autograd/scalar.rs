//! Scalar node type with gradient tracking

use super::function::Application;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Scalar value with automatic differentiation support
///
/// A `Scalar` is a cheap handle to a node in the computation graph. Clones
/// share the same node, so a leaf fed into several operations is the same
/// node everywhere and accumulates gradient from every path. The forward
/// value is fixed at construction; only the gradient is mutated.
#[derive(Clone)]
pub struct Scalar {
    inner: Rc<Node>,
}

struct Node {
    value: f64,
    grad: RefCell<Option<f64>>,
    /// Operand nodes consumed by the producing operation, in call order.
    /// Empty exactly when `producer` is `None`.
    operands: Vec<Scalar>,
    producer: Option<Application>,
}

impl Scalar {
    /// Create a leaf node with the given value
    ///
    /// Rejects NaN and infinities; no node is created on failure.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidValue(value));
        }
        Ok(Self {
            inner: Rc::new(Node {
                value,
                grad: RefCell::new(None),
                operands: Vec::new(),
                producer: None,
            }),
        })
    }

    /// Create a node produced by an operation application
    pub(crate) fn from_application(
        value: f64,
        operands: Vec<Scalar>,
        producer: Application,
    ) -> Self {
        Self {
            inner: Rc::new(Node {
                value,
                grad: RefCell::new(None),
                operands,
                producer: Some(producer),
            }),
        }
    }

    /// Get the forward value
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    /// Get the accumulated gradient (if any backward pass reached this node)
    ///
    /// `None` means no gradient has been propagated here yet, which is
    /// distinct from an accumulated gradient of `0.0`.
    pub fn grad(&self) -> Option<f64> {
        *self.inner.grad.borrow()
    }

    /// Check whether this is a leaf (input) node
    pub fn is_leaf(&self) -> bool {
        self.inner.producer.is_none()
    }

    /// Accumulate gradient (for when a node is reached via multiple paths)
    pub fn accumulate_grad(&self, grad: f64) {
        let mut slot = self.inner.grad.borrow_mut();
        *slot = Some(match *slot {
            Some(existing) => existing + grad,
            None => grad,
        });
    }

    /// Reset the gradient to the absent state
    pub fn zero_grad(&self) {
        *self.inner.grad.borrow_mut() = None;
    }

    /// Propagate a gradient backward through the graph that produced this node
    ///
    /// Accumulates `grad` here, then distributes it to the operands via the
    /// producing operation's backward rule, recursing depth-first in operand
    /// order. Each call fans out the incoming contribution as received, so a
    /// node reachable along several paths is entered once per path and ends
    /// up with the sum over all of them. Leaves accumulate and stop.
    pub fn backward(&self, grad: f64) {
        self.accumulate_grad(grad);

        if let Some(producer) = &self.inner.producer {
            let grads = producer.backward(grad);
            assert_eq!(
                grads.len(),
                self.inner.operands.len(),
                "{} backward returned {} gradients for {} operands",
                producer.name(),
                grads.len(),
                self.inner.operands.len()
            );
            for (operand, g) in self.inner.operands.iter().zip(grads) {
                operand.backward(g);
            }
        }
    }
}

impl std::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scalar")
            .field("value", &self.inner.value)
            .field("grad", &self.grad())
            .field("op", &self.inner.producer.as_ref().map(|p| p.name()))
            .finish()
    }
}
