//! Terrestrial Time (TT) and Barycentric Dynamical Time (TDB).
//!
//! TDB differs from TT by a small periodic term dominated by Earth's orbital
//! eccentricity: a 1.657 ms annual sinusoid plus lunar and planetary terms, with a
//! peak-to-peak spread of about 3.3 ms.
//!
//! # Algorithm
//!
//! The leading Fairhead & Bretagnon (1990) terms are summed in Julian millennia
//! since J2000.0:
//!
//! ```text
//! TDB - TT = sum(A0 sin(w0 t + p0)) + t sum(A1 sin(w1 t + p1)) + t^2 sum(A2 sin(w2 t + p2))
//! ```
//!
//! followed by the Jupiter/Saturn and secular adjustments of the full model. The
//! geocentric series is used (no topocentric diurnal terms), which agrees with the
//! full 787-term evaluation to a few hundred nanoseconds near the present era.
//!
//! The inverse solves `TT = TDB - (TDB - TT)(TT)` by fixed-point iteration. The
//! series changes by less than 1e-8 s per second, so three passes converge well
//! below a picosecond.
//!
//! # Precision
//!
//! The argument `t` is formed from `(whole - J2000) + fraction` and the correction
//! goes into `fraction`, so the millisecond offset is never rounded against the
//! 2.4 million day magnitude.

use crate::constants::{FAIRHEAD_T0, FAIRHEAD_T1, FAIRHEAD_T2};
use crate::julian::SplitJulianDate;
use celestial_core::constants::{DAYS_PER_JULIAN_MILLENNIUM, J2000_JD};

const TDB_TO_TT_ITERATIONS: usize = 3;

/// TDB - TT in seconds at the given date (TT or TDB; the difference is negligible).
pub fn tdb_minus_tt_seconds(date: SplitJulianDate) -> f64 {
    let t = ((date.whole() - J2000_JD) + date.fraction()) / DAYS_PER_JULIAN_MILLENNIUM;

    let w0 = sum_terms(&FAIRHEAD_T0, t);
    let w1 = sum_terms(&FAIRHEAD_T1, t);
    let w2 = sum_terms(&FAIRHEAD_T2, t);
    let wf = t * (t * w2 + w1) + w0;

    let wj = 0.00065e-6 * libm::sin(6069.776754 * t + 4.021194)
        + 0.00033e-6 * libm::sin(213.299095 * t + 5.543132)
        - 0.00196e-6 * libm::sin(6208.294251 * t + 5.696701)
        - 0.00173e-6 * libm::sin(74.781599 * t + 2.435900)
        + 0.03638e-6 * t * t;

    wf + wj
}

// Smallest terms first.
fn sum_terms(terms: &[(f64, f64, f64)], t: f64) -> f64 {
    terms
        .iter()
        .rev()
        .map(|&(amplitude, frequency, phase)| amplitude * libm::sin(frequency * t + phase))
        .sum()
}

pub fn tt_to_tdb(tt: SplitJulianDate) -> SplitJulianDate {
    tt.add_seconds(tdb_minus_tt_seconds(tt))
}

pub fn tdb_to_tt(tdb: SplitJulianDate) -> SplitJulianDate {
    let mut tt = tdb;
    for _ in 0..TDB_TO_TT_ITERATIONS {
        tt = tdb.add_seconds(-tdb_minus_tt_seconds(tt));
    }
    tt
}
