//! Robust outlier detection based on the median and the median absolute deviation (MAD).
//!
//! A value is flagged as an outlier when its deviation from the sample median exceeds `criterion`
//! units of the scaled MAD. Both estimators are robust: unlike the mean and the standard
//! deviation, they are not dragged around by the very outliers being looked for.
//!
//! Missing entries are represented by `NaN` and handled according to a [`NanPolicy`]; missing
//! entries are never flagged themselves. Fatal conditions (an all-missing sample) abort the
//! detection with an [`Error`], while recoverable ones (a multi-element, missing, or negative
//! criterion) are normalized and reported as [`Warning`]s alongside the result.
//!
//! ```
//! use madsieve::{Criterion, NanPolicy, Sample};
//!
//! let data = [1.0, 2.0, 1.5, 1.2, 90.0];
//! let detection = Sample::new(&data)
//!     .outliers(Criterion::new(4.0), NanPolicy::Propagate)
//!     .unwrap();
//!
//! assert_eq!(detection.indices(), &[4]);
//! assert_eq!(detection.values(), &[90.0]);
//! ```

mod error;
mod float;
mod sample;

pub mod outliers;

pub use crate::error::{Error, Result, Warning};
pub use crate::float::Float;
pub use crate::outliers::mad::{detect, Criterion, Detection, NanPolicy};
pub use crate::sample::Sample;
