//! Numeric configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::consts::{CLOSE_TOLERANCE, EPS};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericConfig {
    /// Offset added inside `log`/`log_back`. Must be finite and > 0.
    pub log_eps: f64,

    /// Absolute tolerance for `is_close`. Must be finite and > 0.
    pub close_tolerance: f64,
}

impl NumericConfig {
    /// The constants the free-function operators use.
    pub const DEFAULT: Self = Self {
        log_eps: EPS,
        close_tolerance: CLOSE_TOLERANCE,
    };

    /// Parse a JSON object; absent fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        check_positive("log_eps", self.log_eps)?;
        check_positive("close_tolerance", self.close_tolerance)
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn check_positive(field: &str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{field} must be finite and positive, got {v}"
        )))
    }
}
