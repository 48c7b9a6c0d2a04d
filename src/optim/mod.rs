//! Scalar root finding.
//!
//! Allocation-free; requires the [`FloatScalar`](crate::FloatScalar) bound
//! (real-valued only).
//!
//! - [`bisection`] — bracketed bisection, guaranteed to converge on a sign change
//! - [`newton_1d`] — Newton's method with user-supplied derivative
//!
//! Both are configured by [`RootSettings`] and report a [`RootResult`].

mod root;

#[cfg(test)]
mod tests;

pub use root::{bisection, newton_1d, RootSettings};

/// Errors from root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OptimError {
    /// Maximum number of iterations exceeded.
    #[error("maximum iterations exceeded")]
    MaxIterations,
    /// Bracket endpoints do not have opposite signs.
    #[error("bracket endpoints must have opposite signs")]
    BracketInvalid,
    /// Derivative vanished at the current iterate.
    #[error("derivative is zero or nearly zero")]
    Singular,
    /// A computed value was NaN or infinity.
    #[error("computed value is NaN or infinity")]
    NotFinite,
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}
