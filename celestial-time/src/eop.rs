//! The UT1-UTC capability the converter consumes.
//!
//! Concrete providers (IERS bulletin tables, fallbacks between them) live in the
//! `celestial-eop` crate; the converter only sees [`Ut1Provider`].

use crate::julian::SplitJulianDate;
use crate::TimeResult;
use std::fmt;
use std::sync::Arc;

/// How much an EOP value can be trusted.
///
/// Ordered from least to most trustworthy, so `min` picks the more conservative
/// of two qualities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EopQuality {
    /// No measured value; a neighbouring value was carried across the hole.
    Missing,
    /// A bulletin prediction, or a value held flat past the end of the data.
    Predicted,
    Observed,
}

impl EopQuality {
    pub fn is_observed(self) -> bool {
        self == Self::Observed
    }
}

impl fmt::Display for EopQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Predicted => "predicted",
            Self::Observed => "observed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ut1Offset {
    pub seconds: f64,
    pub quality: EopQuality,
}

impl Ut1Offset {
    pub fn new(seconds: f64, quality: EopQuality) -> Self {
        Self { seconds, quality }
    }

    pub fn observed(seconds: f64) -> Self {
        Self::new(seconds, EopQuality::Observed)
    }
}

/// Maps a UTC epoch to UT1-UTC.
///
/// Implementations are immutable after construction and shared across threads.
/// Epochs before the data fail with [`crate::TimeError::OutOfRange`]; epochs past
/// the data succeed with a quality below `Observed`.
pub trait Ut1Provider: Send + Sync {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset>;

    /// Short label used in log output.
    fn name(&self) -> &str {
        "ut1-provider"
    }
}

impl<T: Ut1Provider + ?Sized> Ut1Provider for &T {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        (**self).ut1_minus_utc(utc)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Ut1Provider + ?Sized> Ut1Provider for Box<T> {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        (**self).ut1_minus_utc(utc)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: Ut1Provider + ?Sized> Ut1Provider for Arc<T> {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        (**self).ut1_minus_utc(utc)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
