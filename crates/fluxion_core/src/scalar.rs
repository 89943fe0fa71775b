//! One-dimensional difference engine.

use crate::error::DerivativeError;
use crate::limit::{shrink_to_limit, LimitSettings};
use crate::traits::Scalar;

/// Forward difference quotient `(f(x + h) - f(x)) / h`.
fn difference_quotient<T: Scalar>(f: impl Fn(T) -> T, x: T, h: T) -> T {
    (f(x + h) - f(x)) / h
}

/// Average rate of change of `f` over `[x, x + h]`.
///
/// Fails with [`DerivativeError::InvalidStep`] when `h` is zero, without
/// evaluating `f`.
pub fn rate_of_change<T, F>(f: F, x: T, h: T) -> Result<T, DerivativeError<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    if h == T::zero() {
        return Err(DerivativeError::InvalidStep);
    }
    Ok(difference_quotient(f, x, h))
}

/// Estimates `f'(x)` by halving the difference step until two successive
/// quotients agree within the default tolerance.
pub fn derivative_at<T, F>(f: F, x: T) -> Result<T, DerivativeError<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    derivative_at_with(f, x, &LimitSettings::default())
}

/// As [`derivative_at`], with explicit convergence settings.
///
/// On convergence the newest quotient is returned; the 3-D engine returns
/// the quotient one shrink earlier instead (see the `directional` module).
/// Fails with [`DerivativeError::NotDifferentiable`] when the step range is
/// exhausted without the quotients stabilizing, as happens at kinks and
/// oscillatory singularities.
pub fn derivative_at_with<T, F>(
    f: F,
    x: T,
    settings: &LimitSettings,
) -> Result<T, DerivativeError<T>>
where
    T: Scalar,
    F: Fn(T) -> T,
{
    shrink_to_limit(settings, T::one(), |h| difference_quotient(&f, x, h))
        .map(|pair| pair.latest)
        .ok_or(DerivativeError::NotDifferentiable(x))
}

/// Turns `f` into a function that evaluates the derivative estimate
/// pointwise.
///
/// Points where the estimate does not converge yield `0`; callers of the
/// returned function never observe the failure. Call [`derivative_at`]
/// directly to distinguish non-differentiable points from a flat slope.
pub fn derivative<T, F>(f: F) -> impl Fn(T) -> T
where
    T: Scalar,
    F: Fn(T) -> T,
{
    move |x| derivative_at(&f, x).unwrap_or(T::zero())
}
