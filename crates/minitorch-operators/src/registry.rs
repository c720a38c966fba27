//! Name-based dispatch over the scalar operators.
//!
//! An autodiff engine records which operator produced each node; these enums
//! are that record. Names are stable and match the free-function names.

use std::fmt;
use std::str::FromStr;

use minitorch_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::backward::{inv_back, log_back, relu_back};
use crate::scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    Id,
    Neg,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::UnknownOperator(name.to_string()))
    }

    pub fn forward(&self, x: f64) -> Result<f64> {
        match self {
            UnaryOp::Id => Ok(scalar::id(x)),
            UnaryOp::Neg => Ok(scalar::neg(x)),
            UnaryOp::Sigmoid => Ok(scalar::sigmoid(x)),
            UnaryOp::Relu => Ok(scalar::relu(x)),
            UnaryOp::Log => scalar::log(x),
            UnaryOp::Exp => Ok(scalar::exp(x)),
            UnaryOp::Inv => scalar::inv(x),
        }
    }

    /// `d * f'(x)` for operators that own a `_back` function; `None` otherwise.
    pub fn backward(&self, x: f64, d: f64) -> Option<Result<f64>> {
        match self {
            UnaryOp::Log => Some(log_back(x, d)),
            UnaryOp::Inv => Some(inv_back(x, d)),
            UnaryOp::Relu => Some(Ok(relu_back(x, d))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Mul,
    Lt,
    Eq,
    Max,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Mul,
        BinaryOp::Lt,
        BinaryOp::Eq,
        BinaryOp::Max,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Lt => "lt",
            BinaryOp::Eq => "eq",
            BinaryOp::Max => "max",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| Error::UnknownOperator(name.to_string()))
    }

    pub fn forward(&self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => scalar::add(x, y),
            BinaryOp::Mul => scalar::mul(x, y),
            BinaryOp::Lt => scalar::lt(x, y),
            BinaryOp::Eq => scalar::eq(x, y),
            BinaryOp::Max => scalar::max(x, y),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl FromStr for BinaryOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
