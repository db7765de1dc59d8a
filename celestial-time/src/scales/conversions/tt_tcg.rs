//! Terrestrial Time (TT) and Geocentric Coordinate Time (TCG).
//!
//! TCG is the coordinate time of the geocentric frame. TT runs slower by the
//! constant fraction L_G (IAU 2000 Resolution B1.9), and the two agreed at
//! 1977-01-01 00:00:32.184 TT:
//!
//! ```text
//! TCG - TT = L_G / (1 - L_G) * (TT - T0)     forward
//! TT - TCG = -L_G * (TCG - T0)               inverse
//! ```
//!
//! At J2000.0 TCG is about 0.506 s ahead of TT.
//!
//! Both corrections are applied to the `fraction` component; the elapsed time
//! since T0 is formed by differencing like components so no digits are lost.

use super::days_since_1977_tt;
use crate::constants::{TCG_RATE_LG, TCG_RATE_RATIO};
use crate::julian::SplitJulianDate;

pub fn tt_to_tcg(tt: SplitJulianDate) -> SplitJulianDate {
    tt.add_days(days_since_1977_tt(tt) * TCG_RATE_RATIO)
}

pub fn tcg_to_tt(tcg: SplitJulianDate) -> SplitJulianDate {
    tcg.add_days(-days_since_1977_tt(tcg) * TCG_RATE_LG)
}
