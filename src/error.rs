use thiserror::Error;

/// Fatal failures; no [`Detection`](crate::Detection) is produced when one of these is returned.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// Every entry of the sample is the `NaN` missing-value sentinel, so no center or spread can
    /// be computed.
    #[error("sample values are all missing")]
    AllMissing,
}

/// Non-fatal diagnostics raised while normalizing the detection criterion.
///
/// A warning never aborts the detection; it travels alongside the successful result, in the order
/// it was raised. See [`Detection::warnings`](crate::Detection::warnings).
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Warning {
    /// More than one criterion value was supplied; only the first was used.
    #[error("criterion has more than one element, only the first was used")]
    CriterionTruncated,
    /// The criterion is `NaN`; every comparison against it is false, so nothing is flagged.
    #[error("criterion is missing, no values will be flagged")]
    CriterionMissing,
    /// The criterion is negative; its absolute value was used instead.
    #[error("criterion is negative, its absolute value was used")]
    CriterionNegative,
}

pub type Result<T> = ::std::result::Result<T, Error>;
