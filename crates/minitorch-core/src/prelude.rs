//! Convenient re-exports for downstream crates.

pub use crate::config::NumericConfig;
pub use crate::consts::{CLOSE_TOLERANCE, EPS};
pub use crate::error::{Error, Result};
