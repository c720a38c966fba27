//! List utilities composed from the combinators and scalar operators.

use crate::higher_order::{map, reduce, zip_with};
use crate::scalar::{add, mul, neg};

/// Negate each element.
pub fn neg_list(ls: &[f64]) -> Vec<f64> {
    map(neg)(ls)
}

/// Elementwise sum, truncated to the shorter input.
pub fn add_lists(ls1: &[f64], ls2: &[f64]) -> Vec<f64> {
    zip_with(add)(ls1, ls2)
}

/// Total of all elements; 0.0 for an empty slice.
pub fn sum(ls: &[f64]) -> f64 {
    reduce(add, 0.0)(ls)
}

/// Product of all elements; 1.0 for an empty slice.
pub fn prod(ls: &[f64]) -> f64 {
    reduce(mul, 1.0)(ls)
}
