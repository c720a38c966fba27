//! Operators parameterized by a [`NumericConfig`] instead of the fixed constants.

use minitorch_core::{NumericConfig, Result};

use crate::backward::shifted_ln_back;
use crate::scalar::{close_within, shifted_ln};

/// `log`, `log_back`, and `is_close` evaluated against a validated config.
///
/// `Numerics::default()` behaves exactly like the free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Numerics {
    cfg: NumericConfig,
}

impl Numerics {
    pub fn new(cfg: NumericConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &NumericConfig {
        &self.cfg
    }

    pub fn log(&self, x: f64) -> Result<f64> {
        shifted_ln(x, self.cfg.log_eps)
    }

    pub fn log_back(&self, x: f64, d: f64) -> Result<f64> {
        shifted_ln_back(x, d, self.cfg.log_eps)
    }

    pub fn is_close(&self, x: f64, y: f64) -> bool {
        close_within(x, y, self.cfg.close_tolerance)
    }
}
