//! Time scale conversion between UTC, UT1, TAI, TT, TCG, TDB and TCB.
//!
//! Epochs are carried as [`SplitJulianDate`] so sub-microsecond precision
//! survives across centuries. [`TimeScaleConverter`] routes a conversion through
//! the scale graph, using a [`LeapSecondTable`] for UTC and a [`Ut1Provider`]
//! for UT1.

pub mod constants;
pub mod eop;
pub mod julian;
pub mod leap_seconds;
pub mod scales;

pub use eop::{EopQuality, Ut1Offset, Ut1Provider};
pub use julian::SplitJulianDate;
pub use leap_seconds::{LeapSecondDrift, LeapSecondEntry, LeapSecondTable};
pub use scales::conversions::{convert, Conversion, TimeScaleConverter};
pub use scales::{Epoch, TimeScale};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// A table lookup fell outside the domain the table defines.
    #[error("{what}: JD {requested_jd:.6} is outside the covered range (first entry JD {first_jd:.6})")]
    OutOfRange {
        what: String,
        requested_jd: f64,
        first_jd: f64,
    },

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Conversion {from} -> {to} needs UT1-UTC but no EOP provider was supplied")]
    MissingEopProvider { from: TimeScale, to: TimeScale },

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl TimeError {
    pub fn out_of_range(what: impl Into<String>, requested: SplitJulianDate, first_jd: f64) -> Self {
        Self::OutOfRange {
            what: what.into(),
            requested_jd: requested.to_f64(),
            first_jd,
        }
    }

    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable(message.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
