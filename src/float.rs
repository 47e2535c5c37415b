//! Float trait

use cast::From;
use num_traits::float;

/// Extension of `num_traits::float::Float` that adds safe casting from the
/// integer and float literals used throughout the crate, plus the
/// `Sync + Send` bounds the detection surface promises.
pub trait Float:
    float::Float + From<usize, Output = Self> + From<f32, Output = Self> + Sync + Send
{
}

impl Float for f32 {}
impl Float for f64 {}
