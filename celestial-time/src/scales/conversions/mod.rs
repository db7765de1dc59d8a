//! Time scale conversion along the static scale graph.
//!
//! [`TimeScaleConverter`] borrows a [`LeapSecondTable`] and, optionally, a
//! [`Ut1Provider`]. It holds no other state, so one converter (or many) can be
//! used from any number of threads at once.
//!
//! ```
//! use celestial_time::{LeapSecondTable, SplitJulianDate, TimeScale, TimeScaleConverter};
//!
//! let leap = LeapSecondTable::builtin();
//! let converter = TimeScaleConverter::without_eop(&leap);
//!
//! let utc = SplitJulianDate::from_calendar(2022, 1, 1, 12, 0, 0.0);
//! let tt = converter.convert(utc, TimeScale::UTC, TimeScale::TT).unwrap();
//! assert!((tt.difference_seconds(&utc) - 69.184).abs() < 1e-6);
//! ```
//!
//! Each hop applies one edge of [`graph::EDGES`](super::graph::EDGES) in the
//! forward or inverse direction:
//!
//! | Edge | Forward (child to parent) | Inverse |
//! |------|---------------------------|---------|
//! | UTC - TAI | leap-second table | 3-pass iteration |
//! | UT1 - UTC | 3-pass iteration on DUT1 | `UTC + DUT1` |
//! | TT - TAI | `- 32.184 s` | `+ 32.184 s` |
//! | TCG - TT | `- L_G (TCG - T0)` | `+ L_G/(1 - L_G) (TT - T0)` |
//! | TDB - TT | 3-pass iteration | Fairhead & Bretagnon series |
//! | TCB - TDB | `- L_B (TCB - T0) + TDB_0` | `+ L_B/(1 - L_B) (TDB - TDB_0 - T0)` |
//!
//! Any table lookup that fails aborts the whole conversion; nothing falls back to
//! an approximation.

pub mod tai_tt;
pub mod tdb_tcb;
pub mod tt_tcg;
pub mod tt_tdb;
pub mod utc_ut1;

use super::graph::{self, EdgeKind, Hop};
use super::TimeScale;
use crate::constants::{REFERENCE_EPOCH_1977_MJD, REFERENCE_EPOCH_1977_TT_FRACTION};
use crate::eop::{EopQuality, Ut1Provider};
use crate::julian::SplitJulianDate;
use crate::leap_seconds::LeapSecondTable;
use crate::{TimeError, TimeResult};
use celestial_core::constants::MJD_ZERO_POINT;
use std::fmt;
use tracing::{trace, warn};

/// Days elapsed since 1977-01-01 00:00:32.184, differencing like components.
pub(crate) fn days_since_1977_tt(date: SplitJulianDate) -> f64 {
    ((date.whole() - MJD_ZERO_POINT) - REFERENCE_EPOCH_1977_MJD)
        + (date.fraction() - REFERENCE_EPOCH_1977_TT_FRACTION)
}

/// Result of [`TimeScaleConverter::convert_detailed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub date: SplitJulianDate,
    /// Worst UT1-UTC quality used along the route; `None` if no hop needed UT1.
    pub ut1_quality: Option<EopQuality>,
    pub hops: Vec<Hop>,
}

impl Conversion {
    /// True when the result leaned on predicted or missing EOP data.
    pub fn is_degraded(&self) -> bool {
        self.ut1_quality.is_some_and(|q| !q.is_observed())
    }
}

#[derive(Clone, Copy)]
pub struct TimeScaleConverter<'a> {
    leap_seconds: &'a LeapSecondTable,
    ut1: Option<&'a dyn Ut1Provider>,
}

impl<'a> TimeScaleConverter<'a> {
    pub fn new(leap_seconds: &'a LeapSecondTable, ut1: &'a dyn Ut1Provider) -> Self {
        Self {
            leap_seconds,
            ut1: Some(ut1),
        }
    }

    /// A converter for routes that never touch UT1.
    pub fn without_eop(leap_seconds: &'a LeapSecondTable) -> Self {
        Self {
            leap_seconds,
            ut1: None,
        }
    }

    pub fn leap_seconds(&self) -> &'a LeapSecondTable {
        self.leap_seconds
    }

    pub fn has_eop(&self) -> bool {
        self.ut1.is_some()
    }

    pub fn convert(
        &self,
        date: SplitJulianDate,
        from: TimeScale,
        to: TimeScale,
    ) -> TimeResult<SplitJulianDate> {
        Ok(self.convert_detailed(date, from, to)?.date)
    }

    pub fn convert_detailed(
        &self,
        date: SplitJulianDate,
        from: TimeScale,
        to: TimeScale,
    ) -> TimeResult<Conversion> {
        let hops = graph::route(from, to);
        if self.ut1.is_none() && hops.iter().any(|hop| hop.kind == EdgeKind::Ut1MinusUtc) {
            return Err(TimeError::MissingEopProvider { from, to });
        }

        let mut current = date;
        let mut ut1_quality: Option<EopQuality> = None;
        for hop in &hops {
            let (next, quality) = self.apply(current, hop)?;
            trace!(from = %hop.from, to = %hop.to, shift_seconds = next.difference_seconds(&current), "hop");
            if let Some(quality) = quality {
                ut1_quality = Some(ut1_quality.map_or(quality, |worst| worst.min(quality)));
            }
            current = next;
        }

        if let Some(quality) = ut1_quality.filter(|q| !q.is_observed()) {
            warn!(
                %from,
                %to,
                %quality,
                provider = self.ut1.map_or("none", |p| p.name()),
                jd = date.to_f64(),
                "conversion used non-observed UT1-UTC"
            );
        }

        Ok(Conversion {
            date: current,
            ut1_quality,
            hops,
        })
    }

    fn apply(&self, date: SplitJulianDate, hop: &Hop) -> TimeResult<(SplitJulianDate, Option<EopQuality>)> {
        let converted = match (hop.kind, hop.towards_parent) {
            (EdgeKind::LeapSeconds, true) => self.leap_seconds.utc_to_tai(date)?,
            (EdgeKind::LeapSeconds, false) => self.leap_seconds.tai_to_utc(date)?,
            (EdgeKind::Ut1MinusUtc, towards_utc) => {
                let provider = self.ut1.ok_or(TimeError::MissingEopProvider {
                    from: hop.from,
                    to: hop.to,
                })?;
                let (converted, offset) = if towards_utc {
                    utc_ut1::ut1_to_utc(date, provider)?
                } else {
                    utc_ut1::utc_to_ut1(date, provider)?
                };
                return Ok((converted, Some(offset.quality)));
            }
            (EdgeKind::FixedOffset, true) => tai_tt::tt_to_tai(date),
            (EdgeKind::FixedOffset, false) => tai_tt::tai_to_tt(date),
            (EdgeKind::GeocentricRate, true) => tt_tcg::tcg_to_tt(date),
            (EdgeKind::GeocentricRate, false) => tt_tcg::tt_to_tcg(date),
            (EdgeKind::PeriodicSeries, true) => tt_tdb::tdb_to_tt(date),
            (EdgeKind::PeriodicSeries, false) => tt_tdb::tt_to_tdb(date),
            (EdgeKind::BarycentricRate, true) => tdb_tcb::tcb_to_tdb(date),
            (EdgeKind::BarycentricRate, false) => tdb_tcb::tdb_to_tcb(date),
        };
        Ok((converted, None))
    }
}

impl fmt::Debug for TimeScaleConverter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeScaleConverter")
            .field("leap_second_entries", &self.leap_seconds.len())
            .field("ut1", &self.ut1.map(|p| p.name()))
            .finish()
    }
}

/// One-shot conversion without building a converter.
pub fn convert(
    date: SplitJulianDate,
    from: TimeScale,
    to: TimeScale,
    leap_seconds: &LeapSecondTable,
    ut1: Option<&dyn Ut1Provider>,
) -> TimeResult<SplitJulianDate> {
    let converter = TimeScaleConverter {
        leap_seconds,
        ut1,
    };
    converter.convert(date, from, to)
}
