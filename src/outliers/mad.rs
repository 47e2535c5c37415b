//! The median/MAD method
//!
//! A robust alternative to the classic "k standard deviations from the mean" rule. The center of
//! the data is estimated with the median and the spread with the median absolute deviation (MAD),
//! scaled to be consistent with the standard deviation under normality:
//!
//! ``` ignore
//! let center = median(sample);
//! let spread = 1.4826 * median(abs(sample - center));  // the scaled MAD
//!
//! let is_outlier = |x| (x - center).abs() / spread > criterion;
//! ```
//!
//! `criterion` is the number of spread units a value must deviate from the center before it is
//! flagged; 4 is the conventional default. Missing entries are represented by `NaN` and are never
//! flagged themselves, since every comparison involving `NaN` is false. The same rule makes the
//! zero-spread case well defined: when all present values are identical, `0 / 0` is `NaN` (equal
//! values are not flagged) while `x / 0` is infinite for nonzero `x` (every deviating value is
//! flagged).

use std::iter;
use std::slice;

use crate::error::{Error, Result, Warning};
use crate::float::Float;
use crate::sample::Sample;

/// Missing-value handling for the center/spread computation
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NanPolicy {
    /// A single missing entry makes the center and the spread missing as well; the detection is
    /// then empty
    Propagate,
    /// Missing entries are dropped before the center and the spread are computed
    Omit,
}

impl Default for NanPolicy {
    fn default() -> NanPolicy {
        NanPolicy::Propagate
    }
}

/// Detection sensitivity, in robust spread units
///
/// Out-of-domain inputs are normalized rather than rejected; each adjustment is reported as a
/// [`Warning`] on the resulting [`Detection`]:
///
/// - a multi-element criterion is truncated to its first element
/// - a `NaN` criterion flags nothing
/// - a negative criterion is replaced by its absolute value
#[derive(Clone, Copy, Debug)]
pub struct Criterion<A> {
    value: A,
    truncated: bool,
}

impl<A> Criterion<A>
where
    A: Float,
{
    /// Creates a criterion from a scalar
    pub fn new(value: A) -> Criterion<A> {
        Criterion {
            value,
            truncated: false,
        }
    }

    /// Creates a criterion from a collection, retaining only its first element
    ///
    /// If more than one element was supplied, the truncation is reported as
    /// [`Warning::CriterionTruncated`] on the detection.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty
    pub fn from_slice(values: &[A]) -> Criterion<A> {
        assert!(!values.is_empty());

        Criterion {
            value: values[0],
            truncated: values.len() > 1,
        }
    }
}

impl<A> Default for Criterion<A>
where
    A: Float,
{
    /// The conventional sensitivity of 4 spread units
    fn default() -> Criterion<A> {
        Criterion::new(A::cast(4))
    }
}

impl<A> From<A> for Criterion<A>
where
    A: Float,
{
    fn from(value: A) -> Criterion<A> {
        Criterion::new(value)
    }
}

/// The outcome of a detection: the flagged values, their positions, the robust center and spread
/// they were measured against, and the non-fatal diagnostics raised along the way
///
/// `values` and `indices` are parallel sequences of the same length; `indices` holds the 0-based
/// positions of the flagged values in the input sample, in ascending order. The input sample is
/// never mutated; the flagged values are copied out.
#[derive(Clone, Debug)]
pub struct Detection<A> {
    values: Vec<A>,
    indices: Vec<usize>,
    center: A,
    spread: A,
    warnings: Vec<Warning>,
}

impl<A> Detection<A>
where
    A: Float,
{
    /// The flagged values, in their original order
    pub fn values(&self) -> &[A] {
        &self.values
    }

    /// The 0-based positions of the flagged values, in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The robust center (median) the deviations were measured from
    ///
    /// `NaN` when the sample contains missing entries and the policy was
    /// [`NanPolicy::Propagate`]
    pub fn center(&self) -> A {
        self.center
    }

    /// The robust spread (scaled MAD) the deviations were measured against
    ///
    /// `NaN` under the same conditions as [`Detection::center`]
    pub fn spread(&self) -> A {
        self.spread
    }

    /// The non-fatal diagnostics, in the order they were raised
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns the number of flagged values
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Checks whether no value was flagged
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns an iterator over the flagged `(index, value)` pairs
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            inner: self.indices.iter().zip(self.values.iter()),
        }
    }
}

impl<'a, A> IntoIterator for &'a Detection<A>
where
    A: Float,
{
    type Item = (usize, A);
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

/// Iterator over the flagged `(index, value)` pairs
pub struct Iter<'a, A> {
    inner: iter::Zip<slice::Iter<'a, usize>, slice::Iter<'a, A>>,
}

impl<'a, A> Iterator for Iter<'a, A>
where
    A: Float,
{
    type Item = (usize, A);

    fn next(&mut self) -> Option<(usize, A)> {
        self.inner.next().map(|(&i, &x)| (i, x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Flags the values that deviate from the robust center by more than `criterion` robust spread
/// units
///
/// Fails with [`Error::AllMissing`] when every entry of the sample is missing, which is vacuously
/// true of an empty sample. Recoverable
/// criterion adjustments are reported on [`Detection::warnings`] instead, and the detection is
/// still produced.
///
/// - Time: `O(N log N) where N = length`
/// - Memory: `O(length)`
pub fn detect<A>(
    sample: &Sample<A>,
    criterion: Criterion<A>,
    policy: NanPolicy,
) -> Result<Detection<A>>
where
    A: Float,
{
    if sample.is_all_missing() {
        return Err(Error::AllMissing);
    }

    let mut warnings = Vec::new();

    if criterion.truncated {
        warnings.push(Warning::CriterionTruncated);
    }

    let mut crit = criterion.value;
    if crit.is_nan() {
        warnings.push(Warning::CriterionMissing);
    } else if crit < A::cast(0) {
        warnings.push(Warning::CriterionNegative);
        crit = crit.abs();
    }

    let center = sample.median(policy);
    let spread = sample.median_abs_dev(Some(center), policy);

    let mut values = Vec::new();
    let mut indices = Vec::new();
    for (i, &x) in sample.iter().enumerate() {
        // A NaN deviation (missing entry, or missing center under Propagate) and a NaN criterion
        // both fail this comparison, so neither flags anything
        if (x - center).abs() / spread > crit {
            values.push(x);
            indices.push(i);
        }
    }

    Ok(Detection {
        values,
        indices,
        center,
        spread,
        warnings,
    })
}
