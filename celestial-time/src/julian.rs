//! Two-part Julian Date.
//!
//! A single `f64` Julian Date near 2.45 million days has a resolution of about
//! 40 microseconds. [`SplitJulianDate`] keeps the large day count in `whole` and the
//! sub-day part in `fraction`, so offsets of a few milliseconds (or a few
//! picoseconds) are applied to the small component and survive intact.
//!
//! ```
//! use celestial_time::SplitJulianDate;
//!
//! let jd = SplitJulianDate::new(2451545.0, 0.25);
//! let later = jd.add_seconds(32.184);
//! assert_eq!(later.whole(), 2451545.0);
//! assert!((later.fraction() - (0.25 + 32.184 / 86400.0)).abs() < 1e-16);
//! ```
//!
//! # Normalization
//!
//! Every constructor and arithmetic operation keeps `|fraction| < 1.0` by carrying
//! whole days out of `fraction` into `whole`. The split itself is otherwise left as
//! given: a date built at midnight (`whole` ending in `.5`) stays that way. Use
//! [`SplitJulianDate::rebalanced`] for the canonical split where `whole` is the
//! nearest integer day and `|fraction| <= 0.5`.
//!
//! # Ordering
//!
//! `PartialEq` and `PartialOrd` compare `whole` first and `fraction` second, with
//! no tolerance. Two different splits of the same instant therefore compare as
//! unequal; use [`SplitJulianDate::difference_days`] to compare instants.

use crate::constants::SECONDS_TO_DAYS;
use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD};
use celestial_core::math::{nearest_int, two_sum};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitJulianDate {
    whole: f64,
    fraction: f64,
}

impl SplitJulianDate {
    pub fn new(whole: f64, fraction: f64) -> Self {
        if fraction.abs() < 1.0 {
            return Self { whole, fraction };
        }
        let carry = libm::trunc(fraction);
        Self {
            whole: whole + carry,
            fraction: fraction - carry,
        }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    /// Builds a date from a Modified Julian Date, keeping the MJD's own fraction.
    pub fn from_mjd(mjd: f64) -> Self {
        let day = libm::floor(mjd);
        Self::new(MJD_ZERO_POINT + day, mjd - day)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn unix_epoch() -> Self {
        Self::new(UNIX_EPOCH_JD, 0.0)
    }

    pub fn whole(&self) -> f64 {
        self.whole
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Collapses both parts into one `f64`. Loses sub-millisecond precision.
    pub fn to_f64(&self) -> f64 {
        self.whole + self.fraction
    }

    pub fn to_mjd(&self) -> f64 {
        (self.whole - MJD_ZERO_POINT) + self.fraction
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.whole, self.fraction + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// `self - other` in days, differencing like components first.
    pub fn difference_days(&self, other: &SplitJulianDate) -> f64 {
        (self.whole - other.whole) + (self.fraction - other.fraction)
    }

    pub fn difference_seconds(&self, other: &SplitJulianDate) -> f64 {
        self.difference_days(other) * SECONDS_PER_DAY_F64
    }

    /// Returns the same instant with `whole` on the nearest integer day and
    /// `|fraction| <= 0.5`, the split used by reference oracles.
    pub fn rebalanced(&self) -> Self {
        let (sum, sum_err) = two_sum(self.whole, self.fraction);
        let day = nearest_int(sum);
        let (extra, extra_err) = two_sum(sum, -day);
        let fraction = extra + (extra_err + sum_err);

        let carry = nearest_int(fraction);
        Self {
            whole: day + carry,
            fraction: fraction - carry,
        }
    }

    /// Builds a date from calendar components with the ERFA cal2jd + dtf2d
    /// arithmetic: `whole` is the Julian Date of 0h, `fraction` the day fraction.
    ///
    /// Every day is taken as 86400 s long; leap-second display (23:59:60) is a
    /// calendar-layer concern.
    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        let (jd1, mjd) = calendar_to_julian(year, month as i32, day as i32);
        let fraction =
            (60.0 * (60 * hour as i32 + minute as i32) as f64 + second) / SECONDS_PER_DAY_F64;
        Self::new(jd1 + mjd, fraction)
    }
}

/// Converts a Gregorian calendar date to `(MJD_ZERO_POINT, MJD at 0h)`.
pub fn calendar_to_julian(year: i32, month: i32, day: i32) -> (f64, f64) {
    let my = (month - 14) / 12;
    let iypmy = year + my;

    let modified_jd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2432076) as f64;

    (MJD_ZERO_POINT, modified_jd)
}

impl fmt::Display for SplitJulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {} + {:.15}", self.whole, self.fraction)
    }
}

impl From<f64> for SplitJulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<(f64, f64)> for SplitJulianDate {
    fn from((whole, fraction): (f64, f64)) -> Self {
        Self::new(whole, fraction)
    }
}
