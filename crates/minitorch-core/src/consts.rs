//! Numeric constants the scalar operators are defined against.

/// Offset added inside `log` and `log_back` so that `log(0)` stays finite.
pub const EPS: f64 = 1e-6;

/// Absolute tolerance used by `is_close`.
pub const CLOSE_TOLERANCE: f64 = 1e-2;
