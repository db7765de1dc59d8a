//! UT1-UTC providers backed by a single IERS bulletin.
//!
//! Bulletin A is the rapid service: daily values up to the present followed by
//! about a year of predictions. Bulletin B is the final, smoothed series; it
//! lags by a month or more but is the better value where both exist.

use crate::parse;
use crate::record::EopRecord;
use crate::series::EopSeries;
use crate::{EopError, EopResult};
use celestial_time::{SplitJulianDate, TimeResult, Ut1Offset, Ut1Provider};
use std::path::Path;

/// Bulletin A rows are daily; a wider hole means the file is damaged.
pub const BULLETIN_A_MAX_GAP_DAYS: f64 = 3.0;

/// Bulletin B has historically been published at 5 and 10 day spacing.
pub const BULLETIN_B_MAX_GAP_DAYS: f64 = 10.0;

pub(crate) fn read_file(path: &Path) -> EopResult<String> {
    std::fs::read_to_string(path).map_err(|e| EopError::io(path, &e))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletinAProvider {
    series: EopSeries,
}

impl BulletinAProvider {
    pub fn new(records: Vec<EopRecord>) -> EopResult<Self> {
        Self::with_max_gap(records, BULLETIN_A_MAX_GAP_DAYS)
    }

    pub fn with_max_gap(records: Vec<EopRecord>, max_gap_days: f64) -> EopResult<Self> {
        Ok(Self {
            series: EopSeries::new("Bulletin A", records, max_gap_days)?,
        })
    }

    /// Contents of a `finals2000A` file.
    pub fn from_finals(content: &str) -> EopResult<Self> {
        Self::new(parse::parse_finals_bulletin_a(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> EopResult<Self> {
        Self::from_finals(&read_file(path.as_ref())?)
    }

    pub fn series(&self) -> &EopSeries {
        &self.series
    }
}

impl Ut1Provider for BulletinAProvider {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        self.series.lookup(utc)
    }

    fn name(&self) -> &str {
        "bulletin-a"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletinBProvider {
    series: EopSeries,
}

impl BulletinBProvider {
    pub fn new(records: Vec<EopRecord>) -> EopResult<Self> {
        Self::with_max_gap(records, BULLETIN_B_MAX_GAP_DAYS)
    }

    pub fn with_max_gap(records: Vec<EopRecord>, max_gap_days: f64) -> EopResult<Self> {
        Ok(Self {
            series: EopSeries::new("Bulletin B", records, max_gap_days)?,
        })
    }

    /// Bulletin B columns of a `finals2000A` file.
    pub fn from_finals(content: &str) -> EopResult<Self> {
        Self::new(parse::parse_finals_bulletin_b(content)?)
    }

    pub fn from_c04(content: &str) -> EopResult<Self> {
        Self::new(parse::parse_c04(content)?)
    }

    /// Either a `finals2000A` file or a C04 series.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EopResult<Self> {
        Self::new(parse::parse_bulletin_b(&read_file(path.as_ref())?)?)
    }

    pub fn series(&self) -> &EopSeries {
        &self.series
    }
}

impl Ut1Provider for BulletinBProvider {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        self.series.lookup(utc)
    }

    fn name(&self) -> &str {
        "bulletin-b"
    }
}
