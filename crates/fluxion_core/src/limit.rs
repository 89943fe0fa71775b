//! Shrinking-step convergence, the loop shared by both difference engines.

use serde::{Deserialize, Serialize};

use crate::traits::Scalar;

/// Tunables for the shrinking-step limit search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Step size used for the first estimate.
    pub initial_step: f64,
    /// Factor applied to the step after every non-converged estimate.
    pub shrink: f64,
    /// The search stops once the scaled step is no longer above this.
    pub min_step: f64,
    /// Two successive estimates closer than this count as converged.
    pub tolerance: f64,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            initial_step: 0.1,
            shrink: 0.5,
            min_step: 1e-11,
            tolerance: 1e-6,
        }
    }
}

/// The last two estimates of a converged search. `previous` lags `latest`
/// by one shrink of the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converged<T> {
    pub previous: T,
    pub latest: T,
}

/// Runs `estimate` with a geometrically shrinking step until two successive
/// results agree within `settings.tolerance`, or the step range is
/// exhausted (`None`).
///
/// Termination is assessed against `step * step_scale`, so a caller working
/// along a direction vector of length `step_scale` converges against the
/// absolute step taken in its domain. A `step_scale` of zero means the loop
/// body never runs and the search reports `None` without calling
/// `estimate`.
///
/// With the default settings the step shrinks from 0.1 to ~1.2e-11, so
/// `estimate` runs at most 34 times.
pub fn shrink_to_limit<T, F>(
    settings: &LimitSettings,
    step_scale: T,
    mut estimate: F,
) -> Option<Converged<T>>
where
    T: Scalar,
    F: FnMut(T) -> T,
{
    let shrink = T::from_f64(settings.shrink).unwrap();
    let min_step = T::from_f64(settings.min_step).unwrap();
    let tolerance = T::from_f64(settings.tolerance).unwrap();

    let mut limit = T::zero();
    let mut step = T::from_f64(settings.initial_step).unwrap();
    while step * step_scale > min_step {
        let value = estimate(step);
        if (limit - value).abs() < tolerance {
            return Some(Converged {
                previous: limit,
                latest: value,
            });
        }
        limit = value;
        step = step * shrink;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converged_pair_holds_the_last_two_estimates() {
        // estimate(h) = h stabilizes once the step drops below tolerance,
        // and successive steps differ by exactly one halving.
        let settings = LimitSettings::default();
        let pair = shrink_to_limit(&settings, 1.0, |h| h).expect("stabilizes");
        assert!(pair.latest < settings.tolerance);
        assert_eq!(pair.previous, 2.0 * pair.latest);
    }

    #[test]
    fn oscillating_estimates_never_converge() {
        let settings = LimitSettings::default();
        let mut sign = 1.0;
        let result = shrink_to_limit(&settings, 1.0, |_| {
            sign = -sign;
            sign
        });
        assert!(result.is_none());
    }

    #[test]
    fn zero_step_scale_skips_the_loop_entirely() {
        let settings = LimitSettings::default();
        let mut calls = 0;
        let result = shrink_to_limit(&settings, 0.0, |h| {
            calls += 1;
            h
        });
        assert!(result.is_none());
        assert_eq!(calls, 0);
    }
}
