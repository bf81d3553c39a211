pub mod dot;

pub use dot::{to_dot, write_dot};
