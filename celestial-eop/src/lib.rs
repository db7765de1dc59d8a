//! UT1-UTC providers built from IERS Earth orientation bulletins.
//!
//! ```no_run
//! use celestial_eop::EopSet;
//! use celestial_time::{LeapSecondTable, SplitJulianDate, TimeScale};
//!
//! let eop = EopSet::builder()
//!     .bulletin_a_file("finals2000A.all")
//!     .build()?;
//! let leap = LeapSecondTable::builtin();
//! let converter = eop.converter(&leap);
//!
//! let utc = SplitJulianDate::from_calendar(2023, 1, 1, 12, 24, 48.123);
//! let tdb = converter.convert(utc, TimeScale::UT1, TimeScale::TDB)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bulletin;
pub mod errors;
pub mod fallback;
pub mod manager;
pub mod parse;
pub mod record;
pub mod series;

pub use bulletin::{
    BulletinAProvider, BulletinBProvider, BULLETIN_A_MAX_GAP_DAYS, BULLETIN_B_MAX_GAP_DAYS,
};
pub use errors::{EopError, EopResult};
pub use fallback::FallbackProvider;
pub use manager::{BulletinPreference, EopBuilder, EopConfig, EopSet};
pub use record::EopRecord;
pub use series::EopSeries;
