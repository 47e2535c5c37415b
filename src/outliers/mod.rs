//! Classification of outliers
//!
//! There's no formal/mathematical definition of what an outlier actually is, so every classifier
//! is *subjective*. The one provided here is the robust median/MAD rule, which tolerates a large
//! fraction of contaminated data before its estimates of center and spread break down.

pub mod mad;

pub use self::mad::{detect, Criterion, Detection, NanPolicy};
