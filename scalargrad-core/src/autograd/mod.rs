// src/autograd/mod.rs
// Reverse-mode differentiation: graph ordering, local gradient rules and the
// backward driver.

pub mod backward;
pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward::backward;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
