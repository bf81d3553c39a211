//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every arithmetic operation on a [`Value`] allocates a new node that remembers its
//! operands, so the computation graph is built as a side effect of ordinary code.
//! Calling [`Value::backward`] on the final node fills in the gradient of every node
//! that contributed to it.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let x = Value::with_label(2.0, "x");
//! let y = &x * &x + 3.0;
//! y.backward().unwrap();
//! assert_eq!(y.value(), 7.0);
//! assert_eq!(x.grad(), 4.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod value;

// Collaborators built on top of the core node API
pub mod nn;
pub mod optim;
pub mod train;
pub mod utils;
pub mod viz;

pub use error::ScalarGradError;
pub use ops::Op;
pub use value::{IntoValue, Value};
