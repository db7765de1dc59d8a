//! Barycentric Dynamical Time (TDB) and Barycentric Coordinate Time (TCB).
//!
//! IAU 2006 Resolution B3 defines TDB as a linear function of TCB:
//!
//! ```text
//! TDB = TCB - L_B * (JD_TCB - T0) * 86400 + TDB_0
//! ```
//!
//! with `L_B = 1.550519768e-8`, `TDB_0 = -6.55e-5 s` and T0 = 1977-01-01 00:00:32.184.
//! TCB gains roughly 0.49 s per year on TDB, about 11.25 s by J2000.0.
//!
//! The forward direction divides out the rate with `L_B / (1 - L_B)` after removing
//! `TDB_0`, so the pair is an exact algebraic inverse.

use super::days_since_1977_tt;
use crate::constants::{SECONDS_TO_DAYS, TCB_RATE_LB, TCB_RATE_RATIO, TDB0_SECONDS};
use crate::julian::SplitJulianDate;

pub fn tdb_to_tcb(tdb: SplitJulianDate) -> SplitJulianDate {
    let shifted = SplitJulianDate::new(tdb.whole(), tdb.fraction() - TDB0_SECONDS * SECONDS_TO_DAYS);
    shifted.add_days(days_since_1977_tt(shifted) * TCB_RATE_RATIO)
}

pub fn tcb_to_tdb(tcb: SplitJulianDate) -> SplitJulianDate {
    let correction = TDB0_SECONDS * SECONDS_TO_DAYS - days_since_1977_tt(tcb) * TCB_RATE_LB;
    tcb.add_days(correction)
}
