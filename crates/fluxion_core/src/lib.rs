//! Finite-difference derivative estimation.
//!
//! Given a black-box real-valued function, this crate estimates its
//! derivative at a point by shrinking a difference step until successive
//! difference quotients stabilize, and reports non-differentiability when
//! they never do. The same shrinking-step loop generalizes to scalar fields
//! over R^3, producing a directional-derivative functional at a base point.
//!
//! Key components:
//! - **Traits**: `Scalar` (numeric type abstraction).
//! - **Limit**: the shrinking-step convergence routine shared by both
//!   engines, and its settings.
//! - **Scalar**: difference quotients and derivative estimates in one
//!   dimension.
//! - **Directional**: `LinearMap` and `FormField` for directional
//!   derivatives of 3-D scalar fields.

pub mod directional;
pub mod error;
pub mod limit;
pub mod scalar;
pub mod traits;
