//! Directional derivatives of scalar fields over R^3.
//!
//! The derivative of a scalar field at a base point is modeled as a
//! [`LinearMap`]: a functional sending a direction vector to the rate of
//! change of the field along it. [`FormField`] assigns such a functional to
//! every point of the domain. Both hold the field and base point
//! explicitly rather than as opaque closures, so ownership stays visible.

use nalgebra::Vector3;

use crate::error::DerivativeError;
use crate::limit::{shrink_to_limit, LimitSettings};

/// Convergence tolerance of the 3-D engine, tighter than the 1-D default.
const DIRECTIONAL_TOLERANCE: f64 = 1e-7;

fn directional_settings() -> LimitSettings {
    LimitSettings {
        tolerance: DIRECTIONAL_TOLERANCE,
        ..LimitSettings::default()
    }
}

/// The local linear approximation of a scalar field at a fixed base point.
pub struct LinearMap<'a, F> {
    field: &'a F,
    base: Vector3<f64>,
    settings: LimitSettings,
}

impl<F> Clone for LinearMap<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for LinearMap<'_, F> {}

impl<F> LinearMap<'_, F>
where
    F: Fn(Vector3<f64>) -> f64,
{
    /// The base point this functional was taken at.
    pub fn base(&self) -> Vector3<f64> {
        self.base
    }

    /// Directional derivative of the field along `direction`.
    ///
    /// Directions along which the estimates never stabilize yield `0`, as
    /// does the zero direction; no failure is ever signalled. Use
    /// [`LinearMap::try_evaluate`] to observe non-convergence instead.
    pub fn evaluate(&self, direction: Vector3<f64>) -> f64 {
        self.try_evaluate(direction).unwrap_or(0.0)
    }

    /// As [`LinearMap::evaluate`], but surfaces non-convergence as
    /// [`DerivativeError::NotDifferentiable`] carrying the base point.
    ///
    /// The zero direction is `Ok(0.0)`: the field does not change along it,
    /// so it is not a convergence failure.
    ///
    /// Termination is assessed against the absolute step `k * |direction|`
    /// in the domain, independent of how the caller normalized the
    /// direction. On convergence this returns the estimate one shrink
    /// before the newest one; the 1-D engine returns the newest (see
    /// `scalar::derivative_at_with`).
    pub fn try_evaluate(
        &self,
        direction: Vector3<f64>,
    ) -> Result<f64, DerivativeError<Vector3<f64>>> {
        if direction == Vector3::zeros() {
            return Ok(0.0);
        }
        shrink_to_limit(&self.settings, direction.norm(), |k| {
            ((self.field)(self.base + k * direction) - (self.field)(self.base)) / k
        })
        .map(|pair| pair.previous)
        .ok_or(DerivativeError::NotDifferentiable(self.base))
    }
}

/// Builds the directional-derivative functional of `field` at `base`.
pub fn linear_projection_at<F>(field: &F, base: Vector3<f64>) -> LinearMap<'_, F>
where
    F: Fn(Vector3<f64>) -> f64,
{
    LinearMap {
        field,
        base,
        settings: directional_settings(),
    }
}

/// The derivative of a scalar field as a field of linear functionals.
pub struct FormField<F> {
    field: F,
    settings: LimitSettings,
}

impl<F> FormField<F>
where
    F: Fn(Vector3<f64>) -> f64,
{
    pub fn new(field: F) -> Self {
        Self::with_settings(field, directional_settings())
    }

    /// As [`FormField::new`], with explicit convergence settings.
    pub fn with_settings(field: F, settings: LimitSettings) -> Self {
        Self { field, settings }
    }

    /// The linear functional approximating the field's change at `base`.
    pub fn at(&self, base: Vector3<f64>) -> LinearMap<'_, F> {
        LinearMap {
            field: &self.field,
            base,
            settings: self.settings,
        }
    }
}

/// Builds the derivative field of a scalar field.
pub fn derivative_3d<F>(field: F) -> FormField<F>
where
    F: Fn(Vector3<f64>) -> f64,
{
    FormField::new(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn sphere(v: Vector3<f64>) -> f64 {
        v.x * v.x + v.y * v.y + v.z * v.z
    }

    #[test]
    fn vector_arithmetic_is_component_wise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -2.0, 1.0);
        assert_eq!(a + b, Vector3::new(1.5, 0.0, 4.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).norm(), 7.0);
    }

    #[test]
    fn sphere_gradient_on_the_x_axis() {
        let prime = derivative_3d(sphere);
        let at_base = prime.at(Vector3::new(1.0, 0.0, 0.0));
        // Analytic gradient is (2, 0, 0).
        assert!((at_base.evaluate(Vector3::new(1.0, 0.0, 0.0)) - 2.0).abs() < 1e-5);
        assert!(at_base.evaluate(Vector3::new(0.0, 1.0, 0.0)).abs() < 1e-5);
        assert!(at_base.evaluate(Vector3::new(0.0, 0.0, 1.0)).abs() < 1e-5);
    }

    #[test]
    fn zero_direction_is_zero_without_sampling_the_field() {
        let calls = Cell::new(0u32);
        let field = |v: Vector3<f64>| {
            calls.set(calls.get() + 1);
            sphere(v)
        };
        let map = linear_projection_at(&field, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(map.evaluate(Vector3::zeros()), 0.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn try_evaluate_surfaces_non_convergence() {
        // Oscillates ever faster as the x-coordinate approaches 1, so the
        // quotients along the x-axis never stabilize.
        let field = |v: Vector3<f64>| {
            let r = v.x - 1.0;
            if r == 0.0 {
                0.0
            } else {
                r * (1.0 / r).sin()
            }
        };
        let base = Vector3::new(1.0, 0.0, 0.0);
        let map = linear_projection_at(&field, base);
        let strict = map.try_evaluate(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(strict, Err(DerivativeError::NotDifferentiable(base)));
        // The lenient path swallows the same failure.
        assert_eq!(map.evaluate(Vector3::new(1.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn repeated_evaluations_do_not_drift() {
        let prime = derivative_3d(sphere);
        let map = prime.at(Vector3::new(1.0, 0.0, 0.0));
        let direction = Vector3::new(0.3, -0.4, 0.5);
        assert_eq!(map.evaluate(direction), map.evaluate(direction));
    }
}
