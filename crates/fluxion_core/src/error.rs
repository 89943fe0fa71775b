use std::fmt::{Debug, Display};
use thiserror::Error;

/// Failure modes of the difference engines.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DerivativeError<T: Debug + Display> {
    /// A difference quotient was requested with a zero step.
    #[error("step size must be nonzero")]
    InvalidStep,
    /// The shrinking-step search exhausted its step range without two
    /// successive estimates agreeing within tolerance. Carries the
    /// evaluation point for diagnostics.
    #[error("function is not differentiable at {0}")]
    NotDifferentiable(T),
}
