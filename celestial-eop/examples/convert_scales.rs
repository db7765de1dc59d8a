//! Converts one UTC instant to every supported time scale.
//!
//! ```text
//! cargo run -p celestial-eop --example convert_scales -- [finals2000A.all]
//! ```
//!
//! Without a file argument a constant UT1-UTC of -0.0199 s is used.

use celestial_eop::{EopRecord, EopSet};
use celestial_time::{LeapSecondTable, SplitJulianDate, TimeScale};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let eop = match std::env::args().nth(1) {
        Some(path) => EopSet::builder().bulletin_a_file(path).build()?,
        None => EopSet::builder()
            .bulletin_a_records(vec![
                EopRecord::observed(59945.0, -0.0199437)?,
                EopRecord::observed(59946.0, -0.0199437)?,
            ])
            .build()?,
    };

    let leap = LeapSecondTable::builtin();
    let converter = eop.converter(&leap);
    let utc = SplitJulianDate::from_calendar(2023, 1, 1, 12, 24, 48.123).rebalanced();

    println!("UTC  {}", utc);
    for scale in TimeScale::ALL {
        let result = converter.convert_detailed(utc, TimeScale::UTC, scale)?;
        let quality = result
            .ut1_quality
            .map_or(String::new(), |q| format!(" (UT1-UTC {})", q));
        println!(
            "{:<4} {}  {:+.6} s{}",
            scale,
            result.date,
            result.date.difference_seconds(&utc),
            quality
        );
    }

    Ok(())
}
