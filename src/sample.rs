use std::{mem, ops};

use crate::error::Result;
use crate::float::Float;
use crate::outliers::mad::{self, Criterion, Detection, NanPolicy};

/// A collection of data points drawn from a population
///
/// Missing entries are represented by `NaN`; every other statistic of the sample is computed from
/// the entries that are present, subject to the [`NanPolicy`] passed along.
///
/// The sample may be empty; an empty sample counts as all-missing, so detection on it fails with
/// [`Error::AllMissing`](crate::Error::AllMissing) and its median is `NaN`.
#[repr(transparent)]
pub struct Sample<A>([A]);

impl<A> Sample<A>
where
    A: Float,
{
    /// Creates a new sample from an existing slice
    #[allow(clippy::new_ret_no_self)]
    pub fn new(slice: &[A]) -> &Sample<A> {
        unsafe { mem::transmute(slice) }
    }

    /// Returns the number of missing (`NaN`) entries
    ///
    /// - Time: `O(length)`
    pub fn missing_count(&self) -> usize {
        self.iter().filter(|x| x.is_nan()).count()
    }

    /// Checks whether every entry of the sample is missing
    ///
    /// - Time: `O(length)`
    pub fn is_all_missing(&self) -> bool {
        self.iter().all(|x| x.is_nan())
    }

    /// Returns the median of the sample
    ///
    /// Under [`NanPolicy::Omit`] missing entries are dropped before sorting; under
    /// [`NanPolicy::Propagate`] a single missing entry makes the median `NaN`. When the count of
    /// present entries is even, the two central order statistics are averaged.
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn median(&self, policy: NanPolicy) -> A {
        if policy == NanPolicy::Propagate && self.missing_count() > 0 {
            return A::nan();
        }

        median_of(self.present())
    }

    /// Returns the median absolute deviation, scaled by 1.4826 for consistency with the standard
    /// deviation under normality
    ///
    /// The `center` can be optionally passed along to speed up (2X) the computation
    ///
    /// - Time: `O(N log N) where N = length`
    /// - Memory: `O(length)`
    pub fn median_abs_dev(&self, center: Option<A>, policy: NanPolicy) -> A {
        let center = center.unwrap_or_else(|| self.median(policy));

        if center.is_nan() {
            return A::nan();
        }

        let abs_devs = self
            .present()
            .into_iter()
            .map(|x| (x - center).abs())
            .collect::<Vec<_>>();

        median_of(abs_devs) * A::cast(1.4826)
    }

    /// Flags the entries that deviate from the robust center by more than `criterion` robust
    /// spread units
    ///
    /// This is a convenience wrapper around [`mad::detect`]
    pub fn outliers(&self, criterion: Criterion<A>, policy: NanPolicy) -> Result<Detection<A>> {
        mad::detect(self, criterion, policy)
    }

    fn present(&self) -> Vec<A> {
        self.iter().cloned().filter(|x| !x.is_nan()).collect()
    }
}

impl<A> ops::Deref for Sample<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

fn median_of<A>(mut v: Vec<A>) -> A
where
    A: Float,
{
    use std::cmp::Ordering;

    // NB The vector holds no `NaN`s at this point, they were filtered out by the caller
    fn cmp<T>(a: &T, b: &T) -> Ordering
    where
        T: PartialOrd,
    {
        match a.partial_cmp(b) {
            Some(o) => o,
            // Arbitrary way to handle NaNs that should never happen
            None => Ordering::Equal,
        }
    }

    if v.is_empty() {
        return A::nan();
    }

    v.sort_unstable_by(cmp);

    let n = v.len();
    let mid = n / 2;
    if n % 2 == 1 {
        v[mid]
    } else {
        (v[mid - 1] + v[mid]) / A::cast(2)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::outliers::mad::NanPolicy;
    use crate::sample::Sample;

    #[test]
    fn median_odd_count() {
        let v = [3.0, 1.0, 2.0];
        assert_relative_eq!(Sample::new(&v).median(NanPolicy::Propagate), 2.0);
    }

    #[test]
    fn median_even_count_averages_the_central_pair() {
        let v = [4.0, 1.0, 3.0, 2.0];
        assert_relative_eq!(Sample::new(&v).median(NanPolicy::Propagate), 2.5);
    }

    #[test]
    fn median_propagates_missing() {
        let v = [1.0, f64::NAN, 3.0];
        assert!(Sample::new(&v).median(NanPolicy::Propagate).is_nan());
    }

    #[test]
    fn median_omits_missing() {
        let v = [1.0, f64::NAN, 3.0];
        assert_relative_eq!(Sample::new(&v).median(NanPolicy::Omit), 2.0);
    }

    #[test]
    fn median_abs_dev_is_normal_consistent() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        let sample = Sample::new(&v);

        // deviations from the median 3 are [2, 1, 0, 1, 2], their median is 1
        assert_relative_eq!(
            sample.median_abs_dev(None, NanPolicy::Propagate),
            1.4826,
            max_relative = 1e-6
        );
    }

    #[test]
    fn median_abs_dev_of_constant_sample_is_zero() {
        let v = [7.0; 10];
        let sample = Sample::new(&v);

        assert_relative_eq!(sample.median_abs_dev(None, NanPolicy::Propagate), 0.0);
    }

    #[test]
    fn missing_count() {
        let v = [1.0, f64::NAN, 3.0, f64::NAN];
        assert_eq!(Sample::new(&v).missing_count(), 2);
        assert!(!Sample::new(&v).is_all_missing());
        assert!(Sample::new(&[f64::NAN; 3]).is_all_missing());
    }

    #[test]
    fn empty_sample_counts_as_all_missing() {
        let v: [f64; 0] = [];
        let sample = Sample::new(&v);

        assert!(sample.is_all_missing());
        assert!(sample.median(NanPolicy::Omit).is_nan());
    }
}
