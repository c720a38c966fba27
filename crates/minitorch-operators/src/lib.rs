#![forbid(unsafe_code)]
//! minitorch-operators: scalar operators and list combinators.
//!
//! Design intent:
//! - Every function is pure: no shared state, no I/O, safe to call from any thread.
//! - Total operators return `f64`; partial ones (`inv`, `log`, and their `_back`
//!   counterparts) return `Result` instead of producing `inf`/`NaN`.
//! - Each operator that appears in a computation graph has a paired `_back`
//!   function computing `d * f'(x)`, so the reverse pass can call them uniformly
//!   (see `registry` for name-based dispatch).

pub mod backward;
pub mod higher_order;
pub mod lists;
pub mod numerics;
pub mod registry;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use backward::{inv_back, log_back, relu_back};
pub use higher_order::{map, reduce, try_map, try_reduce, try_zip_with, zip_with};
pub use lists::{add_lists, neg_list, prod, sum};
pub use numerics::Numerics;
pub use registry::{BinaryOp, UnaryOp};
pub use scalar::{add, eq, exp, id, inv, is_close, log, lt, max, mul, neg, relu, sigmoid};

pub use minitorch_core::{Error, Result};
