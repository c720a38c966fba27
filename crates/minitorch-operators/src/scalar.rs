//! Elementary scalar operators over `f64`.

use minitorch_core::consts::{CLOSE_TOLERANCE, EPS};
use minitorch_core::{Error, Result};

/// `x * y`
#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// Identity over any value type.
#[inline]
pub fn id<T>(x: T) -> T {
    x
}

/// `x + y`
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// `-x`
#[inline]
pub fn neg(x: f64) -> f64 {
    -x
}

/// 1.0 if `x < y` else 0.0
#[inline]
pub fn lt(x: f64, y: f64) -> f64 {
    if x < y {
        1.0
    } else {
        0.0
    }
}

/// 1.0 if `x == y` else 0.0
#[inline]
pub fn eq(x: f64, y: f64) -> f64 {
    if x == y {
        1.0
    } else {
        0.0
    }
}

/// `x` if `x > y` else `y`. Ties (and unordered pairs) return `y`.
#[inline]
pub fn max<T: PartialOrd>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

/// `|x - y| < 1e-2`
#[inline]
pub fn is_close(x: f64, y: f64) -> bool {
    close_within(x, y, CLOSE_TOLERANCE)
}

pub(crate) fn close_within(x: f64, y: f64, tolerance: f64) -> bool {
    (x - y).abs() < tolerance
}

/// Logistic function, branched on the sign of `x` so `exp` never sees a
/// large positive argument.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let ex = x.exp();
        ex / (1.0 + ex)
    }
}

/// `x` if `x > 0` else 0.0. The boundary is strict: `relu(0.0) == 0.0`.
#[inline]
pub fn relu(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

/// `ln(x + EPS)`.
///
/// Fails with [`Error::LogDomain`] when `x + EPS <= 0`.
pub fn log(x: f64) -> Result<f64> {
    shifted_ln(x, EPS)
}

pub(crate) fn shifted_ln(x: f64, eps: f64) -> Result<f64> {
    let shifted = x + eps;
    if shifted <= 0.0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(x, eps, "log outside domain");
        return Err(Error::LogDomain { x, eps });
    }
    Ok(shifted.ln())
}

/// `e^x`. Overflows to `+inf` for large `x`; that is not an error.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// `1 / x`.
///
/// Fails with [`Error::DivisionByZero`] when `x == 0` (either sign).
pub fn inv(x: f64) -> Result<f64> {
    if x == 0.0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(x, "inv of zero");
        return Err(Error::DivisionByZero { op: "inv" });
    }
    Ok(1.0 / x)
}
