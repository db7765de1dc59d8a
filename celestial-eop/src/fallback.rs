//! Chaining two UT1-UTC providers.
//!
//! The primary answers whenever it has an observed value. Otherwise the
//! secondary is consulted, and its value wins when the primary had no coverage
//! at all or when the secondary's quality is strictly better. Errors other than
//! `OutOfRange` stop the lookup.

use celestial_time::{SplitJulianDate, TimeResult, Ut1Offset, Ut1Provider};
use tracing::debug;

pub(crate) fn lookup_with_fallback(
    primary: &dyn Ut1Provider,
    secondary: &dyn Ut1Provider,
    utc: SplitJulianDate,
) -> TimeResult<Ut1Offset> {
    let first = match primary.ut1_minus_utc(utc) {
        Ok(offset) if offset.quality.is_observed() => return Ok(offset),
        Ok(offset) => Some(offset),
        Err(err) if err.is_out_of_range() => None,
        Err(err) => return Err(err),
    };

    match (first, secondary.ut1_minus_utc(utc)) {
        (None, second) => {
            debug!(
                primary = primary.name(),
                secondary = secondary.name(),
                mjd = utc.to_mjd(),
                "primary has no coverage, using secondary"
            );
            second
        }
        (Some(first), Ok(second)) if second.quality > first.quality => {
            debug!(
                primary = primary.name(),
                secondary = secondary.name(),
                mjd = utc.to_mjd(),
                primary_quality = %first.quality,
                secondary_quality = %second.quality,
                "secondary has better UT1-UTC"
            );
            Ok(second)
        }
        (Some(first), Ok(_)) => Ok(first),
        (Some(first), Err(err)) if err.is_out_of_range() => Ok(first),
        (Some(_), Err(err)) => Err(err),
    }
}

/// A [`Ut1Provider`] that consults `primary` first and `secondary` where the
/// primary is absent or weaker.
#[derive(Debug, Clone)]
pub struct FallbackProvider<P, S> {
    primary: P,
    secondary: S,
}

impl<P: Ut1Provider, S: Ut1Provider> FallbackProvider<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn secondary(&self) -> &S {
        &self.secondary
    }
}

impl<P: Ut1Provider, S: Ut1Provider> Ut1Provider for FallbackProvider<P, S> {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        lookup_with_fallback(&self.primary, &self.secondary, utc)
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::{EopQuality, TimeError};

    /// Answers from `start_mjd` on with a fixed value and quality.
    struct Fixed {
        start_mjd: f64,
        offset: Ut1Offset,
    }

    impl Ut1Provider for Fixed {
        fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
            if utc.to_mjd() < self.start_mjd {
                return Err(TimeError::out_of_range("fixed", utc, self.start_mjd + 2400000.5));
            }
            Ok(self.offset)
        }
    }

    struct Broken;

    impl Ut1Provider for Broken {
        fn ut1_minus_utc(&self, _utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
            Err(TimeError::invalid_table("corrupt"))
        }
    }

    fn fixed(start_mjd: f64, seconds: f64, quality: EopQuality) -> Fixed {
        Fixed {
            start_mjd,
            offset: Ut1Offset::new(seconds, quality),
        }
    }

    fn at(mjd: f64) -> SplitJulianDate {
        SplitJulianDate::from_mjd(mjd)
    }

    #[test]
    fn test_observed_primary_wins() {
        let p = FallbackProvider::new(
            fixed(50000.0, 0.1, EopQuality::Observed),
            fixed(40000.0, 0.2, EopQuality::Observed),
        );
        assert_eq!(p.ut1_minus_utc(at(60000.0)).unwrap().seconds, 0.1);
        assert_eq!(p.name(), "fallback");
    }

    #[test]
    fn test_secondary_covers_early_epochs() {
        let p = FallbackProvider::new(
            fixed(50000.0, 0.1, EopQuality::Observed),
            fixed(40000.0, 0.2, EopQuality::Observed),
        );
        assert_eq!(p.ut1_minus_utc(at(45000.0)).unwrap().seconds, 0.2);
        assert!(p.ut1_minus_utc(at(30000.0)).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_better_quality_secondary_wins() {
        let p = FallbackProvider::new(
            fixed(50000.0, 0.1, EopQuality::Predicted),
            fixed(40000.0, 0.2, EopQuality::Observed),
        );
        let offset = p.ut1_minus_utc(at(60000.0)).unwrap();
        assert_eq!(offset.seconds, 0.2);
        assert_eq!(offset.quality, EopQuality::Observed);
    }

    #[test]
    fn test_equal_quality_keeps_primary() {
        let p = FallbackProvider::new(
            fixed(50000.0, 0.1, EopQuality::Predicted),
            fixed(40000.0, 0.2, EopQuality::Predicted),
        );
        assert_eq!(p.ut1_minus_utc(at(60000.0)).unwrap().seconds, 0.1);

        // A secondary that starts after the query does not discard the primary value.
        let p = FallbackProvider::new(
            fixed(50000.0, 0.1, EopQuality::Missing),
            fixed(70000.0, 0.2, EopQuality::Observed),
        );
        let offset = p.ut1_minus_utc(at(60000.0)).unwrap();
        assert_eq!(offset.seconds, 0.1);
        assert_eq!(offset.quality, EopQuality::Missing);
    }

    #[test]
    fn test_other_errors_propagate() {
        let p = FallbackProvider::new(Broken, fixed(40000.0, 0.2, EopQuality::Observed));
        assert!(matches!(
            p.ut1_minus_utc(at(60000.0)),
            Err(TimeError::InvalidTable(_))
        ));

        let p = FallbackProvider::new(fixed(50000.0, 0.1, EopQuality::Predicted), Broken);
        assert!(p.ut1_minus_utc(at(60000.0)).is_err());
    }
}
