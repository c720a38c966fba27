#![forbid(unsafe_code)]
//! minitorch-core: shared vocabulary for the scalar operator library.
//!
//! Responsibilities:
//! - The crate-wide `Error`/`Result` used by every partial operator.
//! - Numeric constants (`EPS`, `CLOSE_TOLERANCE`) the operators are defined against.
//! - A serializable `NumericConfig` for callers that want different tolerances.
//!
//! No operators live here; see `minitorch-operators`.

pub mod config;
pub mod consts;
pub mod error;
pub mod prelude;

pub use config::NumericConfig;
pub use error::{Error, Result};
