//! International Atomic Time (TAI) and Terrestrial Time (TT).
//!
//! `TT = TAI + 32.184 s`, exact by definition. The offset preserves continuity
//! with Ephemeris Time at the 1977 epoch and involves no table.

use crate::constants::TT_MINUS_TAI_SECONDS;
use crate::julian::SplitJulianDate;

pub fn tai_to_tt(tai: SplitJulianDate) -> SplitJulianDate {
    tai.add_seconds(TT_MINUS_TAI_SECONDS)
}

pub fn tt_to_tai(tt: SplitJulianDate) -> SplitJulianDate {
    tt.add_seconds(-TT_MINUS_TAI_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_offset() {
        let tai = SplitJulianDate::new(2459946.0, 0.017223645833333356);
        let tt = tai_to_tt(tai);
        assert_eq!(tt.whole(), 2459946.0);
        assert!(
            (tt.fraction() - 0.017596145833333358).abs() < 1e-15,
            "TAI->TT fraction: {:.18}",
            tt.fraction()
        );
        assert!((tt.difference_seconds(&tai) - 32.184).abs() < 1e-9);
    }

    #[test]
    fn test_offset_carries_across_midnight() {
        let tai = SplitJulianDate::new(2451545.0, 0.9999);
        let tt = tai_to_tt(tai);
        assert_eq!(tt.whole(), 2451546.0);
        assert!(tt.fraction() > 0.0 && tt.fraction() < 0.001);

        let back = tt_to_tai(tt);
        assert!(back.difference_days(&tai).abs() < 1e-15);
    }
}
