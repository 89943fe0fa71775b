use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// A trait for types that can be used as scalars by the difference engines.
/// Must support floating-point arithmetic, debug and display printing, and
/// conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + Display + 'static {}

impl<T: Float + FromPrimitive + Debug + Display + 'static> Scalar for T {}
