use thiserror::Error;

/// Canonical result for the operator library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("division by zero in '{op}'")]
    DivisionByZero { op: &'static str },

    // Raised when `x + eps <= 0`, i.e. the shifted argument is outside ln's domain.
    #[error("math domain error in 'log': x = {x} is not greater than -{eps}")]
    LogDomain { x: f64, eps: f64 },

    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// True for the floating-point domain failures (as opposed to lookup/config errors).
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::DivisionByZero { .. } | Error::LogDomain { .. })
    }
}
