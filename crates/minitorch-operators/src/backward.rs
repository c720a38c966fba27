//! Chain-rule contributions: given `x` and the upstream gradient `d`, each
//! function returns `d * f'(x)` for its forward operator.

use minitorch_core::consts::EPS;
use minitorch_core::{Error, Result};

/// `d / (x + EPS)`, the contribution of [`crate::log`].
///
/// Fails with [`Error::DivisionByZero`] only when `x + EPS` is exactly zero.
pub fn log_back(x: f64, d: f64) -> Result<f64> {
    shifted_ln_back(x, d, EPS)
}

pub(crate) fn shifted_ln_back(x: f64, d: f64, eps: f64) -> Result<f64> {
    let shifted = x + eps;
    if shifted == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(x, eps, "log_back at singularity");
        return Err(Error::DivisionByZero { op: "log_back" });
    }
    Ok(d * (1.0 / shifted))
}

/// `-d / x^2`, the contribution of [`crate::inv`].
///
/// Fails with [`Error::DivisionByZero`] when `x^2` is zero, which includes
/// inputs small enough for the square to underflow.
pub fn inv_back(x: f64, d: f64) -> Result<f64> {
    let sq = x * x;
    if sq == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(x, d, "inv_back of zero");
        return Err(Error::DivisionByZero { op: "inv_back" });
    }
    Ok(-d / sq)
}

/// `d` if `x > 0` else 0.0, the contribution of [`crate::relu`].
#[inline]
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x > 0.0 {
        d
    } else {
        0.0
    }
}
