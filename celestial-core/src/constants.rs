pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365250.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// Julian Date of the Modified Julian Date origin (1858-11-17 00:00).
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
