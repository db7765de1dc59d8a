//! TAI-UTC offsets from the leap-second table.
//!
//! Each [`LeapSecondEntry`] says from which UTC instant an offset applies. Since
//! 1972 the offsets are whole seconds that only ever grow. Between 1960 and 1971
//! UTC was steered with fractional steps plus a linear drift, so those entries carry
//! a [`LeapSecondDrift`]:
//!
//! ```text
//! TAI - UTC = base + (MJD - reference_MJD) * rate
//! ```
//!
//! UTC is treated as a continuous count of elapsed seconds plus the step table:
//! `TAI = UTC + (TAI - UTC)(UTC)`. A 23:59:60 label is a calendar-layer concern.
//!
//! ```
//! use celestial_time::{LeapSecondTable, SplitJulianDate};
//!
//! let table = LeapSecondTable::builtin();
//! let utc = SplitJulianDate::from_calendar(2022, 1, 1, 12, 0, 0.0);
//! assert_eq!(table.tai_minus_utc(utc).unwrap(), 37.0);
//! ```

use crate::constants::{PRE_LEAP_SECOND_ENTRIES, TAI_UTC_OFFSETS, UTC_DRIFT_CORRECTIONS};
use crate::julian::{calendar_to_julian, SplitJulianDate};
use crate::{TimeError, TimeResult};
use tracing::debug;

const TAI_TO_UTC_ITERATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapSecondDrift {
    pub reference_mjd: f64,
    pub rate_seconds_per_day: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeapSecondEntry {
    pub effective_utc_epoch: SplitJulianDate,
    pub tai_minus_utc_seconds: f64,
    pub drift: Option<LeapSecondDrift>,
}

impl LeapSecondEntry {
    pub fn stepped(effective_utc_epoch: SplitJulianDate, tai_minus_utc_seconds: f64) -> Self {
        Self {
            effective_utc_epoch,
            tai_minus_utc_seconds,
            drift: None,
        }
    }

    pub fn drifting(
        effective_utc_epoch: SplitJulianDate,
        tai_minus_utc_seconds: f64,
        drift: LeapSecondDrift,
    ) -> Self {
        Self {
            effective_utc_epoch,
            tai_minus_utc_seconds,
            drift: Some(drift),
        }
    }

    /// The offset this entry prescribes at `utc`, drift included.
    pub fn offset_at(&self, utc: SplitJulianDate) -> f64 {
        match self.drift {
            Some(drift) => {
                self.tai_minus_utc_seconds
                    + (utc.to_mjd() - drift.reference_mjd) * drift.rate_seconds_per_day
            }
            None => self.tai_minus_utc_seconds,
        }
    }

    fn is_valid(&self) -> bool {
        let drift_ok = self
            .drift
            .map_or(true, |d| d.reference_mjd.is_finite() && d.rate_seconds_per_day.is_finite());
        self.effective_utc_epoch.whole().is_finite()
            && self.effective_utc_epoch.fraction().is_finite()
            && self.tai_minus_utc_seconds.is_finite()
            && drift_ok
    }
}

/// Ordered, immutable TAI-UTC step table.
///
/// Shared by reference between any number of conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    entries: Vec<LeapSecondEntry>,
}

impl LeapSecondTable {
    /// Validates and wraps pre-parsed entries.
    ///
    /// Epochs must be strictly increasing. Offsets of consecutive stepped entries
    /// must not decrease; drift-era entries are exempt because UTC was stepped
    /// backwards twice in the 1960s.
    pub fn from_entries(entries: Vec<LeapSecondEntry>) -> TimeResult<Self> {
        if entries.is_empty() {
            return Err(TimeError::invalid_table("leap-second table is empty"));
        }

        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_valid() {
                return Err(TimeError::invalid_table(format!(
                    "leap-second entry {} has a non-finite field",
                    index
                )));
            }
        }

        for (index, pair) in entries.windows(2).enumerate() {
            let (earlier, later) = (&pair[0], &pair[1]);
            if later
                .effective_utc_epoch
                .difference_days(&earlier.effective_utc_epoch)
                <= 0.0
            {
                return Err(TimeError::invalid_table(format!(
                    "leap-second entry {} ({}) does not follow entry {} ({})",
                    index + 1,
                    later.effective_utc_epoch,
                    index,
                    earlier.effective_utc_epoch
                )));
            }
            if earlier.drift.is_none()
                && later.drift.is_none()
                && later.tai_minus_utc_seconds < earlier.tai_minus_utc_seconds
            {
                return Err(TimeError::invalid_table(format!(
                    "TAI-UTC decreases from {} s to {} s at {}",
                    earlier.tai_minus_utc_seconds,
                    later.tai_minus_utc_seconds,
                    later.effective_utc_epoch
                )));
            }
        }

        let table = Self { entries };
        table.log_span();
        Ok(table)
    }

    /// The IERS table from 1960-01-01, drift regime included.
    pub fn builtin() -> Self {
        let entries = TAI_UTC_OFFSETS
            .iter()
            .enumerate()
            .map(|(index, &(year, month, offset))| {
                let epoch = first_of_month(year, month);
                match UTC_DRIFT_CORRECTIONS.get(index) {
                    Some(&(reference_mjd, rate_seconds_per_day)) => LeapSecondEntry::drifting(
                        epoch,
                        offset,
                        LeapSecondDrift {
                            reference_mjd,
                            rate_seconds_per_day,
                        },
                    ),
                    None => LeapSecondEntry::stepped(epoch, offset),
                }
            })
            .collect();

        let table = Self { entries };
        table.log_span();
        table
    }

    /// The stepped regime only, starting 1972-01-01 with TAI-UTC = 10 s.
    ///
    /// Earlier epochs fail with [`TimeError::OutOfRange`].
    pub fn builtin_since_1972() -> Self {
        let entries = TAI_UTC_OFFSETS[PRE_LEAP_SECOND_ENTRIES..]
            .iter()
            .map(|&(year, month, offset)| LeapSecondEntry::stepped(first_of_month(year, month), offset))
            .collect();

        let table = Self { entries };
        table.log_span();
        table
    }

    pub fn entries(&self) -> &[LeapSecondEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_epoch(&self) -> Option<SplitJulianDate> {
        self.entries.first().map(|e| e.effective_utc_epoch)
    }

    pub fn last_epoch(&self) -> Option<SplitJulianDate> {
        self.entries.last().map(|e| e.effective_utc_epoch)
    }

    /// The entry in force at `utc`: the last one whose epoch is not after it.
    pub fn entry_at(&self, utc: SplitJulianDate) -> TimeResult<&LeapSecondEntry> {
        let count = self
            .entries
            .partition_point(|e| e.effective_utc_epoch.difference_days(&utc) <= 0.0);

        match count.checked_sub(1) {
            Some(index) => Ok(&self.entries[index]),
            None => Err(TimeError::out_of_range(
                "TAI-UTC",
                utc,
                self.first_epoch().map_or(f64::NAN, |e| e.to_f64()),
            )),
        }
    }

    pub fn tai_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<f64> {
        Ok(self.entry_at(utc)?.offset_at(utc))
    }

    pub fn utc_to_tai(&self, utc: SplitJulianDate) -> TimeResult<SplitJulianDate> {
        let offset = self.tai_minus_utc(utc)?;
        Ok(utc.add_seconds(offset))
    }

    /// Inverts [`Self::utc_to_tai`] by fixed-point iteration, starting from UTC = TAI.
    ///
    /// A TAI instant inside an inserted leap second has no continuous-UTC image;
    /// the result there is undefined and may be off by the full second.
    pub fn tai_to_utc(&self, tai: SplitJulianDate) -> TimeResult<SplitJulianDate> {
        let mut utc = tai;
        for _ in 0..TAI_TO_UTC_ITERATIONS {
            let guess = self.utc_to_tai(utc)?;
            utc = utc.add_days(tai.difference_days(&guess));
        }
        Ok(utc)
    }

    fn log_span(&self) {
        if let (Some(first), Some(last)) = (self.entries.first(), self.entries.last()) {
            debug!(
                entries = self.entries.len(),
                first_mjd = first.effective_utc_epoch.to_mjd(),
                last_mjd = last.effective_utc_epoch.to_mjd(),
                last_offset = last.tai_minus_utc_seconds,
                "leap-second table ready"
            );
        }
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn first_of_month(year: i32, month: u8) -> SplitJulianDate {
    let (_, mjd) = calendar_to_julian(year, month as i32, 1);
    SplitJulianDate::from_mjd(mjd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::SECONDS_PER_DAY_F64;

    fn utc(year: i32, month: u8, day: u8) -> SplitJulianDate {
        SplitJulianDate::from_calendar(year, month, day, 12, 0, 0.0)
    }

    #[test]
    fn test_stepped_offsets() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.tai_minus_utc(utc(1972, 1, 1)).unwrap(), 10.0);
        assert_eq!(table.tai_minus_utc(utc(1999, 6, 1)).unwrap(), 32.0);
        assert_eq!(table.tai_minus_utc(utc(2016, 12, 31)).unwrap(), 36.0);
        assert_eq!(table.tai_minus_utc(utc(2017, 1, 1)).unwrap(), 37.0);
        assert_eq!(table.tai_minus_utc(utc(2022, 1, 1)).unwrap(), 37.0);
    }

    #[test]
    fn test_step_takes_effect_at_midnight() {
        let table = LeapSecondTable::builtin();
        let midnight = SplitJulianDate::from_calendar(2017, 1, 1, 0, 0, 0.0);
        assert_eq!(table.tai_minus_utc(midnight).unwrap(), 37.0);
        assert_eq!(table.tai_minus_utc(midnight.add_seconds(-1e-3)).unwrap(), 36.0);
    }

    #[test]
    fn test_drift_regime_1964() {
        let table = LeapSecondTable::builtin();
        let instant = SplitJulianDate::from_calendar(1964, 6, 1, 0, 0, 0.0);
        // 1964-04-01 entry: 3.3401300 + (MJD - 38761) * 0.0012960, MJD 38547
        let expected = 3.3401300 + (38547.0 - 38761.0) * 0.0012960;
        let offset = table.tai_minus_utc(instant).unwrap();
        assert!(
            (offset - expected).abs() < 1e-9,
            "1964 TAI-UTC: got {}, expected {}",
            offset,
            expected
        );
    }

    #[test]
    fn test_before_table_is_out_of_range() {
        let table = LeapSecondTable::builtin();
        let err = table.tai_minus_utc(utc(1959, 12, 31)).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_since_1972_rejects_1964() {
        let table = LeapSecondTable::builtin_since_1972();
        assert_eq!(table.len(), TAI_UTC_OFFSETS.len() - PRE_LEAP_SECOND_ENTRIES);
        assert!(table.entries().iter().all(|e| e.drift.is_none()));

        let err = table.utc_to_tai(utc(1964, 6, 1)).unwrap_err();
        assert!(err.is_out_of_range(), "expected OutOfRange, got {:?}", err);
        assert_eq!(table.tai_minus_utc(utc(1972, 1, 1)).unwrap(), 10.0);
    }

    #[test]
    fn test_stepped_entries_never_decrease() {
        let table = LeapSecondTable::builtin();
        let stepped: Vec<_> = table.entries().iter().filter(|e| e.drift.is_none()).collect();
        assert_eq!(stepped.len(), 28);
        for pair in stepped.windows(2) {
            assert!(pair[1].tai_minus_utc_seconds >= pair[0].tai_minus_utc_seconds);
            assert!(pair[1].effective_utc_epoch.difference_days(&pair[0].effective_utc_epoch) > 0.0);
        }
    }

    #[test]
    fn test_only_two_drift_entries_step_backwards() {
        // UTC was set back on 1961-08-01 and 1968-02-01; every other change grows.
        let table = LeapSecondTable::builtin();
        let decreases: Vec<&LeapSecondEntry> = table
            .entries()
            .windows(2)
            .filter(|pair| pair[1].tai_minus_utc_seconds < pair[0].tai_minus_utc_seconds)
            .map(|pair| &pair[1])
            .collect();

        let mjds: Vec<f64> = decreases.iter().map(|e| e.effective_utc_epoch.to_mjd()).collect();
        assert_eq!(mjds, vec![37512.0, 39887.0]);
        assert!(decreases.iter().all(|e| e.drift.is_some()));
    }

    #[test]
    fn test_tai_to_utc_inside_inserted_second() {
        let table = LeapSecondTable::builtin();
        let midnight_2017 = SplitJulianDate::from_mjd(57754.0);

        // 00:00:36.5 TAI falls inside 2016-12-31 23:59:60 UTC.
        let inside = midnight_2017.add_seconds(36.5);
        let back = table.utc_to_tai(table.tai_to_utc(inside).unwrap()).unwrap();
        let error = back.difference_seconds(&inside).abs();
        assert!(error < 1.0 + 1e-6, "error inside leap second: {} s", error);

        for seconds in [35.5, 37.5] {
            let outside = midnight_2017.add_seconds(seconds);
            let back = table.utc_to_tai(table.tai_to_utc(outside).unwrap()).unwrap();
            assert!(
                back.difference_seconds(&outside).abs() < 1e-6,
                "TAI {} s after midnight did not round trip",
                seconds
            );
        }
    }

    #[test]
    fn test_builtin_passes_validation() {
        let table = LeapSecondTable::builtin();
        let rebuilt = LeapSecondTable::from_entries(table.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.first_epoch().unwrap().to_mjd(), 36934.0);
        assert_eq!(table.last_epoch().unwrap().to_mjd(), 57754.0);
    }

    #[test]
    fn test_invalid_tables_rejected() {
        assert!(matches!(
            LeapSecondTable::from_entries(Vec::new()),
            Err(TimeError::InvalidTable(_))
        ));

        let a = LeapSecondEntry::stepped(SplitJulianDate::from_mjd(41317.0), 10.0);
        let b = LeapSecondEntry::stepped(SplitJulianDate::from_mjd(41499.0), 11.0);

        let unordered = LeapSecondTable::from_entries(vec![b, a]);
        assert!(matches!(unordered, Err(TimeError::InvalidTable(_))));

        let duplicate = LeapSecondTable::from_entries(vec![a, a]);
        assert!(matches!(duplicate, Err(TimeError::InvalidTable(_))));

        let decreasing = LeapSecondEntry::stepped(SplitJulianDate::from_mjd(41683.0), 9.0);
        let result = LeapSecondTable::from_entries(vec![a, b, decreasing]);
        assert!(matches!(result, Err(TimeError::InvalidTable(_))));

        let nan = LeapSecondEntry::stepped(SplitJulianDate::from_mjd(41683.0), f64::NAN);
        assert!(LeapSecondTable::from_entries(vec![a, nan]).is_err());
    }

    #[test]
    fn test_utc_tai_round_trip() {
        let table = LeapSecondTable::builtin();
        let utc = SplitJulianDate::new(2459946.0, 0.017223645833333356);
        let tai = table.utc_to_tai(utc).unwrap();
        assert!((tai.difference_seconds(&utc) - 37.0).abs() < 1e-9);

        let back = table.tai_to_utc(tai).unwrap();
        assert!(
            back.difference_days(&utc).abs() < 1e-15,
            "round trip drifted by {:.3e} days",
            back.difference_days(&utc)
        );

        // Drift era round trip
        let utc = SplitJulianDate::from_calendar(1965, 5, 17, 6, 30, 0.0);
        let back = table.tai_to_utc(table.utc_to_tai(utc).unwrap()).unwrap();
        assert!(back.difference_days(&utc).abs() * SECONDS_PER_DAY_F64 < 1e-9);
    }
}
