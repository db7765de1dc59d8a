use celestial_core::constants::SECONDS_PER_DAY_F64;

pub const SECONDS_TO_DAYS: f64 = 1.0 / SECONDS_PER_DAY_F64;

/// TT - TAI in seconds (exact by definition).
pub const TT_MINUS_TAI_SECONDS: f64 = 32.184;

/// L_G: TT/TCG rate difference (IAU 2000 Resolution B1.9, exact).
pub const TCG_RATE_LG: f64 = 6.969290134e-10;

/// L_G / (1 - L_G), the rate applied when going from TT to TCG.
pub const TCG_RATE_RATIO: f64 = TCG_RATE_LG / (1.0 - TCG_RATE_LG);

/// L_B: TDB/TCB rate difference (IAU 2006 Resolution B3, exact).
pub const TCB_RATE_LB: f64 = 1.550519768e-8;

/// L_B / (1 - L_B), the rate applied when going from TDB to TCB.
pub const TCB_RATE_RATIO: f64 = TCB_RATE_LB / (1.0 - TCB_RATE_LB);

/// TDB_0 in seconds (IAU 2006 Resolution B3).
pub const TDB0_SECONDS: f64 = -6.55e-5;

/// MJD of 1977-01-01 00:00:00 TAI, the epoch where TT, TCG and TCB coincide.
pub const REFERENCE_EPOCH_1977_MJD: f64 = 43144.0;

/// The 1977 reference epoch expressed in TT as a day fraction past `REFERENCE_EPOCH_1977_MJD`.
pub const REFERENCE_EPOCH_1977_TT_FRACTION: f64 = TT_MINUS_TAI_SECONDS * SECONDS_TO_DAYS;

/// Number of `TAI_UTC_OFFSETS` entries that belong to the pre-1972 drift regime.
pub const PRE_LEAP_SECOND_ENTRIES: usize = 14;

/// TAI-UTC changes as (year, month, TAI-UTC seconds), effective 0h UTC on day 1.
///
/// The first `PRE_LEAP_SECOND_ENTRIES` rows also carry a drift term from
/// `UTC_DRIFT_CORRECTIONS`.
pub const TAI_UTC_OFFSETS: [(i32, u8, f64); 42] = [
    (1960, 1, 1.4178180),
    (1961, 1, 1.4228180),
    (1961, 8, 1.3728180),
    (1962, 1, 1.8458580),
    (1963, 11, 1.9458580),
    (1964, 1, 3.2401300),
    (1964, 4, 3.3401300),
    (1964, 9, 3.4401300),
    (1965, 1, 3.5401300),
    (1965, 3, 3.6401300),
    (1965, 7, 3.7401300),
    (1965, 9, 3.8401300),
    (1966, 1, 4.3131700),
    (1968, 2, 4.2131700),
    (1972, 1, 10.0),
    (1972, 7, 11.0),
    (1973, 1, 12.0),
    (1974, 1, 13.0),
    (1975, 1, 14.0),
    (1976, 1, 15.0),
    (1977, 1, 16.0),
    (1978, 1, 17.0),
    (1979, 1, 18.0),
    (1980, 1, 19.0),
    (1981, 7, 20.0),
    (1982, 7, 21.0),
    (1983, 7, 22.0),
    (1985, 7, 23.0),
    (1988, 1, 24.0),
    (1990, 1, 25.0),
    (1991, 1, 26.0),
    (1992, 7, 27.0),
    (1993, 7, 28.0),
    (1994, 7, 29.0),
    (1996, 1, 30.0),
    (1997, 7, 31.0),
    (1999, 1, 32.0),
    (2006, 1, 33.0),
    (2009, 1, 34.0),
    (2012, 7, 35.0),
    (2015, 7, 36.0),
    (2017, 1, 37.0),
];

/// Pre-1972 drift terms as (reference MJD, seconds per day).
pub const UTC_DRIFT_CORRECTIONS: [(f64, f64); PRE_LEAP_SECOND_ENTRIES] = [
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37300.0, 0.0012960),
    (37665.0, 0.0011232),
    (37665.0, 0.0011232),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (38761.0, 0.0012960),
    (39126.0, 0.0025920),
    (39126.0, 0.0025920),
];

/// Leading Fairhead & Bretagnon (1990) terms of TDB-TT, as
/// (amplitude seconds, frequency radians per Julian millennium, phase radians).
///
/// `FAIRHEAD_T0` multiplies t^0, `FAIRHEAD_T1` t^1 and `FAIRHEAD_T2` t^2, with
/// t in Julian millennia of TDB since J2000.0.
pub const FAIRHEAD_T0: [(f64, f64, f64); 20] = [
    (1656.674564e-6, 6283.075849991, 6.240054195),
    (22.417471e-6, 5753.384884897, 4.296977442),
    (13.839792e-6, 12566.151699983, 6.196904410),
    (4.770086e-6, 529.690965095, 0.444401603),
    (4.676740e-6, 6069.776754553, 4.021195093),
    (2.256707e-6, 213.299095438, 5.543113262),
    (1.694205e-6, -3.523118349, 5.025132748),
    (1.554905e-6, 77713.771467920, 5.198467090),
    (1.276839e-6, 7860.419392439, 5.988822341),
    (1.193379e-6, 5223.693919802, 3.649823730),
    (1.115322e-6, 3930.209696220, 1.422745069),
    (0.794185e-6, 11506.769769794, 2.322313077),
    (0.447061e-6, 26.298319800, 3.615796498),
    (0.435206e-6, -398.149003408, 4.349338347),
    (0.600309e-6, 1577.343542448, 2.678271909),
    (0.496817e-6, 6208.294251424, 5.696701824),
    (0.486306e-6, 5884.926846583, 0.520007179),
    (0.432392e-6, 74.781598567, 2.435898309),
    (0.468597e-6, 6244.942814354, 5.866398759),
    (0.375510e-6, 5507.553238667, 4.103476804),
];

pub const FAIRHEAD_T1: [(f64, f64, f64); 2] = [
    (102.156724e-6, 6283.075849991, 4.249032005),
    (1.706807e-6, 12566.151699983, 4.205904248),
];

pub const FAIRHEAD_T2: [(f64, f64, f64); 1] = [(4.322990e-6, 6283.075849991, 2.642893748)];
