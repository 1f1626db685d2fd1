//! # Derivar: Scalar Autograd Engine
//!
//! Derivar provides reverse-mode automatic differentiation over scalar
//! values. Arithmetic on [`Scalar`] nodes records a computation graph
//! during the forward pass; calling [`Scalar::backward`] propagates a
//! gradient through that graph and accumulates it at every leaf that
//! contributed to the result.
//!
//! ## Architecture
//!
//! - **autograd**: scalar node type, operation trait, backward propagation
//! - **error**: crate-wide error type
//!
//! ## Example
//!
//! ```
//! use derivar::Scalar;
//!
//! let x = Scalar::new(2.0)?;
//! let y = Scalar::new(4.0)?;
//! let z = &x * &y;
//! assert_eq!(z.value(), 8.0);
//!
//! z.backward(1.0);
//! assert_eq!(x.grad(), Some(4.0));
//! assert_eq!(y.grad(), Some(2.0));
//! # Ok::<(), derivar::Error>(())
//! ```

pub mod autograd;
pub mod error;

// Re-export commonly used types
pub use autograd::{backward, Function, Scalar};
pub use error::{Error, Result};
