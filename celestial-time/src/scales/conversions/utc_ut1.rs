//! Coordinated Universal Time (UTC) and Universal Time (UT1).
//!
//! UT1 follows the actual rotation of the Earth. Its offset from UTC, DUT1 =
//! UT1 - UTC, is measured and published by the IERS and stays within 0.9 s
//! because leap seconds are inserted into UTC whenever it would not:
//!
//! ```text
//! UT1 = UTC + DUT1(UTC)
//! ```
//!
//! DUT1 is indexed by UTC, so the inverse direction iterates: start from
//! UTC = UT1, look DUT1 up at the current UTC estimate, and re-solve. DUT1
//! drifts by a few milliseconds per day, so three passes reach the floating
//! point floor.
//!
//! Both directions return the [`Ut1Offset`] they used, letting callers see
//! whether the value was observed, predicted or carried across missing data.

use crate::eop::{Ut1Offset, Ut1Provider};
use crate::julian::SplitJulianDate;
use crate::TimeResult;

const UT1_TO_UTC_ITERATIONS: usize = 3;

pub fn utc_to_ut1(
    utc: SplitJulianDate,
    provider: &dyn Ut1Provider,
) -> TimeResult<(SplitJulianDate, Ut1Offset)> {
    let offset = provider.ut1_minus_utc(utc)?;
    Ok((utc.add_seconds(offset.seconds), offset))
}

pub fn ut1_to_utc(
    ut1: SplitJulianDate,
    provider: &dyn Ut1Provider,
) -> TimeResult<(SplitJulianDate, Ut1Offset)> {
    let mut utc = ut1;
    let mut offset = provider.ut1_minus_utc(utc)?;
    for _ in 0..UT1_TO_UTC_ITERATIONS {
        utc = ut1.add_seconds(-offset.seconds);
        offset = provider.ut1_minus_utc(utc)?;
    }
    Ok((ut1.add_seconds(-offset.seconds), offset))
}
