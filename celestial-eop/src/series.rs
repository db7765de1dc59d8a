//! Interpolating lookup over an ordered run of [`EopRecord`]s.
//!
//! A query is answered from the nearest records with a value on either side:
//!
//! - before the first record: `OutOfRange`
//! - on a record: that record
//! - between two valued neighbours at most `max_gap_days` apart: linear
//!   interpolation by day fraction, with the worse of their two qualities
//! - across `Missing` records: the same interpolation, reported as `Missing`
//! - after the last valued record: that value held flat, `Predicted` past the end
//!   of the data and `Missing` inside a trailing hole
//!
//! Neighbours that straddle a leap second differ by close to a whole second. The
//! jump is removed before interpolating so the preceding day is not smeared.

use crate::record::EopRecord;
use crate::{EopError, EopResult};
use celestial_time::{EopQuality, SplitJulianDate, TimeError, TimeResult, Ut1Offset};
use tracing::debug;

/// Neighbours further apart than this are taken to straddle a leap second.
const LEAP_JUMP_THRESHOLD_SECONDS: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct EopSeries {
    label: String,
    records: Vec<EopRecord>,
    max_gap_days: f64,
}

impl EopSeries {
    pub fn new(label: impl Into<String>, mut records: Vec<EopRecord>, max_gap_days: f64) -> EopResult<Self> {
        let label = label.into();

        if records.is_empty() {
            return Err(EopError::no_data(format!("{} has no records", label)));
        }
        if !(max_gap_days.is_finite() && max_gap_days > 0.0) {
            return Err(EopError::invalid_record(format!(
                "{} max gap must be a positive number of days, got {}",
                label, max_gap_days
            )));
        }

        records.sort_by(|a, b| a.mjd().total_cmp(&b.mjd()));
        if let Some(pair) = records.windows(2).find(|pair| pair[0].mjd() == pair[1].mjd()) {
            return Err(EopError::invalid_record(format!(
                "{} lists MJD {:.2} twice",
                label,
                pair[0].mjd()
            )));
        }

        let series = Self {
            label,
            records,
            max_gap_days,
        };
        debug!(
            series = %series.label,
            records = series.records.len(),
            valued = series.records.iter().filter(|r| r.has_value()).count(),
            first_mjd = series.first_mjd(),
            last_mjd = series.last_mjd(),
            max_gap_days,
            "EOP series ready"
        );
        Ok(series)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn records(&self) -> &[EopRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_gap_days(&self) -> f64 {
        self.max_gap_days
    }

    pub fn first_mjd(&self) -> f64 {
        self.records.first().map_or(f64::NAN, EopRecord::mjd)
    }

    pub fn last_mjd(&self) -> f64 {
        self.records.last().map_or(f64::NAN, EopRecord::mjd)
    }

    /// MJD span covered, first to last record.
    pub fn span(&self) -> (f64, f64) {
        (self.first_mjd(), self.last_mjd())
    }

    /// Last record carrying a UT1 value.
    pub fn last_valued(&self) -> Option<&EopRecord> {
        self.records.iter().rev().find(|r| r.has_value())
    }

    pub fn lookup(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        let mjd = utc.to_mjd();
        let first_jd = self.records.first().map_or(f64::NAN, |r| r.epoch.to_f64());

        if mjd.is_nan() || mjd < self.first_mjd() {
            return Err(TimeError::out_of_range(self.label.as_str(), utc, first_jd));
        }

        let upper = self.records.partition_point(|r| r.mjd() <= mjd);
        let before = self.records[..upper].iter().rposition(EopRecord::has_value);
        let after = self.records[upper..]
            .iter()
            .position(EopRecord::has_value)
            .map(|offset| upper + offset);

        let Some(before) = before else {
            return Err(TimeError::out_of_range(
                format!("{} (no UT1 value at or before this epoch)", self.label),
                utc,
                first_jd,
            ));
        };
        let r1 = &self.records[before];

        if r1.mjd() == mjd {
            return Ok(Ut1Offset::new(r1.ut1_minus_utc, r1.quality));
        }

        let Some(after) = after else {
            let quality = if upper == self.records.len() {
                EopQuality::Predicted
            } else {
                EopQuality::Missing
            };
            debug!(
                series = %self.label,
                mjd,
                held_from_mjd = r1.mjd(),
                %quality,
                "holding last UT1-UTC value flat"
            );
            return Ok(Ut1Offset::new(r1.ut1_minus_utc, quality));
        };
        let r2 = &self.records[after];

        let gap = r2.mjd() - r1.mjd();
        if gap > self.max_gap_days {
            return Err(TimeError::out_of_range(
                format!(
                    "{} ({:.1}-day gap exceeds {:.1} days)",
                    self.label, gap, self.max_gap_days
                ),
                utc,
                first_jd,
            ));
        }

        let quality = if after - before > 1 {
            debug!(
                series = %self.label,
                mjd,
                from_mjd = r1.mjd(),
                to_mjd = r2.mjd(),
                "bridging missing UT1-UTC records"
            );
            EopQuality::Missing
        } else {
            r1.quality.min(r2.quality)
        };

        let v1 = r1.ut1_minus_utc;
        let mut v2 = r2.ut1_minus_utc;
        if (v2 - v1).abs() > LEAP_JUMP_THRESHOLD_SECONDS {
            v2 -= libm::round(v2 - v1);
        }

        let t = (mjd - r1.mjd()) / gap;
        Ok(Ut1Offset::new(v1 + t * (v2 - v1), quality))
    }
}
