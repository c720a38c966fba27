//! Higher-order list combinators.
//!
//! Each combinator takes the combining function up front and returns a
//! closure over slices. Inputs are never mutated; elements are cloned into
//! the combining function and results are freshly allocated.

/// Apply `f` to every element, preserving order and length.
pub fn map<A, B, F>(f: F) -> impl Fn(&[A]) -> Vec<B>
where
    A: Clone,
    F: Fn(A) -> B,
{
    move |ls: &[A]| -> Vec<B> { ls.iter().cloned().map(&f).collect() }
}

/// Combine two slices pairwise with `f`.
///
/// The output has the length of the shorter input; trailing elements of the
/// longer one are dropped without error.
pub fn zip_with<A, B, C, F>(f: F) -> impl Fn(&[A], &[B]) -> Vec<C>
where
    A: Clone,
    B: Clone,
    F: Fn(A, B) -> C,
{
    move |ls1: &[A], ls2: &[B]| -> Vec<C> {
        ls1.iter()
            .cloned()
            .zip(ls2.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

/// Left fold: `f(...f(f(start, x1), x2)..., xn)`. Empty input yields `start`.
pub fn reduce<A, B, F>(f: F, start: B) -> impl Fn(&[A]) -> B
where
    A: Clone,
    B: Clone,
    F: Fn(B, A) -> B,
{
    move |ls: &[A]| ls.iter().cloned().fold(start.clone(), &f)
}

/// [`map`] with a fallible `f`; stops at the first error.
pub fn try_map<A, B, E, F>(f: F) -> impl Fn(&[A]) -> Result<Vec<B>, E>
where
    A: Clone,
    F: Fn(A) -> Result<B, E>,
{
    move |ls: &[A]| -> Result<Vec<B>, E> { ls.iter().cloned().map(&f).collect() }
}

/// [`zip_with`] with a fallible `f`; stops at the first error.
pub fn try_zip_with<A, B, C, E, F>(f: F) -> impl Fn(&[A], &[B]) -> Result<Vec<C>, E>
where
    A: Clone,
    B: Clone,
    F: Fn(A, B) -> Result<C, E>,
{
    move |ls1: &[A], ls2: &[B]| -> Result<Vec<C>, E> {
        ls1.iter()
            .cloned()
            .zip(ls2.iter().cloned())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

/// [`reduce`] with a fallible `f`; stops at the first error.
pub fn try_reduce<A, B, E, F>(f: F, start: B) -> impl Fn(&[A]) -> Result<B, E>
where
    A: Clone,
    B: Clone,
    F: Fn(B, A) -> Result<B, E>,
{
    move |ls: &[A]| ls.iter().cloned().try_fold(start.clone(), &f)
}
