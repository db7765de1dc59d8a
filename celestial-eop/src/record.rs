use crate::{EopError, EopResult};
use celestial_time::{EopQuality, SplitJulianDate};

/// Largest |UT1-UTC| accepted. IERS keeps the offset under 0.9 s.
pub const MAX_UT1_MINUS_UTC_SECONDS: f64 = 1.0;

/// One UT1-UTC sample, usually one per UTC day at 0h.
///
/// `Missing` records mark days the bulletin lists without a UT1 value; their
/// `ut1_minus_utc` is 0.0 and never read.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EopRecord {
    pub epoch: SplitJulianDate,
    pub ut1_minus_utc: f64,
    pub quality: EopQuality,
}

impl EopRecord {
    pub fn new(epoch: SplitJulianDate, ut1_minus_utc: f64, quality: EopQuality) -> EopResult<Self> {
        if !epoch.whole().is_finite() || !epoch.fraction().is_finite() {
            return Err(EopError::invalid_record(format!("non-finite epoch {}", epoch)));
        }

        if quality == EopQuality::Missing {
            return Ok(Self::missing(epoch));
        }

        if !ut1_minus_utc.is_finite() || ut1_minus_utc.abs() > MAX_UT1_MINUS_UTC_SECONDS {
            return Err(EopError::invalid_record(format!(
                "UT1-UTC {} s at MJD {:.2} outside ±{} s",
                ut1_minus_utc,
                epoch.to_mjd(),
                MAX_UT1_MINUS_UTC_SECONDS
            )));
        }

        Ok(Self {
            epoch,
            ut1_minus_utc,
            quality,
        })
    }

    pub fn observed(mjd: f64, ut1_minus_utc: f64) -> EopResult<Self> {
        Self::new(SplitJulianDate::from_mjd(mjd), ut1_minus_utc, EopQuality::Observed)
    }

    pub fn predicted(mjd: f64, ut1_minus_utc: f64) -> EopResult<Self> {
        Self::new(SplitJulianDate::from_mjd(mjd), ut1_minus_utc, EopQuality::Predicted)
    }

    pub fn missing(epoch: SplitJulianDate) -> Self {
        Self {
            epoch,
            ut1_minus_utc: 0.0,
            quality: EopQuality::Missing,
        }
    }

    pub fn mjd(&self) -> f64 {
        self.epoch.to_mjd()
    }

    pub fn has_value(&self) -> bool {
        self.quality != EopQuality::Missing
    }
}
