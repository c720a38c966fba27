#![forbid(unsafe_code)]
//! minitorch: scalar operators and list combinators for a teaching autodiff stack.
//!
//! This facade re-exports the member crates so downstream code (and the
//! integration tests under `tests/`) can depend on a single package.

pub use minitorch_operators as operators;

pub use minitorch_core::prelude::*;
pub use minitorch_operators::*;
