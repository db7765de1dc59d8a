use crate::bulletin::{
    read_file, BulletinAProvider, BulletinBProvider, BULLETIN_A_MAX_GAP_DAYS,
    BULLETIN_B_MAX_GAP_DAYS,
};
use crate::fallback::lookup_with_fallback;
use crate::parse;
use crate::record::EopRecord;
use crate::{EopError, EopResult};
use celestial_time::{
    LeapSecondTable, SplitJulianDate, TimeResult, TimeScaleConverter, Ut1Offset, Ut1Provider,
};
use std::path::PathBuf;
use tracing::info;

/// Which bulletin answers first when both are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BulletinPreference {
    /// Bulletin A first, Bulletin B where A is absent or weaker.
    #[default]
    PreferA,
    PreferB,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EopConfig {
    pub preference: BulletinPreference,

    pub bulletin_a_max_gap_days: f64,

    pub bulletin_b_max_gap_days: f64,

    /// A `finals2000A` file.
    pub bulletin_a_path: Option<PathBuf>,

    /// A `finals2000A` file or an EOP C04 series.
    pub bulletin_b_path: Option<PathBuf>,
}

impl Default for EopConfig {
    fn default() -> Self {
        Self {
            preference: BulletinPreference::PreferA,
            bulletin_a_max_gap_days: BULLETIN_A_MAX_GAP_DAYS,
            bulletin_b_max_gap_days: BULLETIN_B_MAX_GAP_DAYS,
            bulletin_a_path: None,
            bulletin_b_path: None,
        }
    }
}

/// The loaded bulletins, answering UT1-UTC queries according to the configured
/// preference.
#[derive(Debug, Clone)]
pub struct EopSet {
    bulletin_a: Option<BulletinAProvider>,
    bulletin_b: Option<BulletinBProvider>,
    preference: BulletinPreference,
}

impl EopSet {
    pub fn builder() -> EopBuilder {
        EopBuilder::new()
    }

    pub fn bulletin_a(&self) -> Option<&BulletinAProvider> {
        self.bulletin_a.as_ref()
    }

    pub fn bulletin_b(&self) -> Option<&BulletinBProvider> {
        self.bulletin_b.as_ref()
    }

    pub fn preference(&self) -> BulletinPreference {
        self.preference
    }

    /// Converter using `leap_seconds` and this set for UT1-UTC.
    pub fn converter<'a>(&'a self, leap_seconds: &'a LeapSecondTable) -> TimeScaleConverter<'a> {
        TimeScaleConverter::new(leap_seconds, self)
    }
}

impl Ut1Provider for EopSet {
    fn ut1_minus_utc(&self, utc: SplitJulianDate) -> TimeResult<Ut1Offset> {
        match (&self.bulletin_a, &self.bulletin_b, self.preference) {
            (Some(a), Some(b), BulletinPreference::PreferA) => lookup_with_fallback(a, b, utc),
            (Some(a), Some(b), BulletinPreference::PreferB) => lookup_with_fallback(b, a, utc),
            (Some(a), None, _) => a.ut1_minus_utc(utc),
            (None, Some(b), _) => b.ut1_minus_utc(utc),
            // The builder refuses to produce an empty set.
            (None, None, _) => Err(celestial_time::TimeError::out_of_range(
                "EOP set (no bulletins loaded)",
                utc,
                f64::NAN,
            )),
        }
    }

    fn name(&self) -> &str {
        "eop-set"
    }
}

#[derive(Debug, Default)]
pub struct EopBuilder {
    config: EopConfig,
    bulletin_a_records: Option<Vec<EopRecord>>,
    bulletin_b_records: Option<Vec<EopRecord>>,
}

impl EopBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a config; its file paths are loaded by [`Self::build`].
    pub fn config(mut self, config: EopConfig) -> Self {
        self.config = config;
        self
    }

    pub fn preference(mut self, preference: BulletinPreference) -> Self {
        self.config.preference = preference;
        self
    }

    pub fn bulletin_a_max_gap(mut self, days: f64) -> Self {
        self.config.bulletin_a_max_gap_days = days;
        self
    }

    pub fn bulletin_b_max_gap(mut self, days: f64) -> Self {
        self.config.bulletin_b_max_gap_days = days;
        self
    }

    /// In-memory Bulletin A records. Take precedence over a configured path.
    pub fn bulletin_a_records(mut self, records: Vec<EopRecord>) -> Self {
        self.bulletin_a_records = Some(records);
        self
    }

    pub fn bulletin_b_records(mut self, records: Vec<EopRecord>) -> Self {
        self.bulletin_b_records = Some(records);
        self
    }

    pub fn bulletin_a_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.bulletin_a_path = Some(path.into());
        self
    }

    pub fn bulletin_b_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.bulletin_b_path = Some(path.into());
        self
    }

    pub fn build(self) -> EopResult<EopSet> {
        let EopBuilder {
            config,
            bulletin_a_records,
            bulletin_b_records,
        } = self;

        let bulletin_a_records = match (bulletin_a_records, &config.bulletin_a_path) {
            (Some(records), _) => Some(records),
            (None, Some(path)) => Some(parse::parse_finals_bulletin_a(&read_file(path)?)?),
            (None, None) => None,
        };
        let bulletin_b_records = match (bulletin_b_records, &config.bulletin_b_path) {
            (Some(records), _) => Some(records),
            (None, Some(path)) => Some(parse::parse_bulletin_b(&read_file(path)?)?),
            (None, None) => None,
        };

        if bulletin_a_records.is_none() && bulletin_b_records.is_none() {
            return Err(EopError::no_data(
                "neither Bulletin A nor Bulletin B data was configured",
            ));
        }

        let bulletin_a = bulletin_a_records
            .map(|records| BulletinAProvider::with_max_gap(records, config.bulletin_a_max_gap_days))
            .transpose()?;
        let bulletin_b = bulletin_b_records
            .map(|records| BulletinBProvider::with_max_gap(records, config.bulletin_b_max_gap_days))
            .transpose()?;

        info!(
            bulletin_a = bulletin_a.as_ref().map_or(0, |p| p.series().len()),
            bulletin_b = bulletin_b.as_ref().map_or(0, |p| p.series().len()),
            preference = ?config.preference,
            "EOP data loaded"
        );

        Ok(EopSet {
            bulletin_a,
            bulletin_b,
            preference: config.preference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_time::{EopQuality, TimeScale};

    fn unique_temp_path(prefix: &str, suffix: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let unique = format!(
            "{}_{}_{}{}",
            prefix,
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            suffix
        );
        path.push(unique);
        path
    }

    fn a_records() -> Vec<EopRecord> {
        vec![
            EopRecord::observed(59945.0, -0.0170).unwrap(),
            EopRecord::predicted(59946.0, -0.0180).unwrap(),
        ]
    }

    fn b_records() -> Vec<EopRecord> {
        vec![
            EopRecord::observed(59940.0, -0.0150).unwrap(),
            EopRecord::observed(59950.0, -0.0200).unwrap(),
        ]
    }

    #[test]
    fn test_config_defaults() {
        let config = EopConfig::default();
        assert_eq!(config.preference, BulletinPreference::PreferA);
        assert_eq!(config.bulletin_a_max_gap_days, 3.0);
        assert_eq!(config.bulletin_b_max_gap_days, 10.0);
        assert!(config.bulletin_a_path.is_none());
    }

    #[test]
    fn test_empty_builder_fails() {
        assert!(matches!(EopSet::builder().build(), Err(EopError::NoData(_))));
    }

    #[test]
    fn test_prefer_a_falls_back_on_quality() {
        let set = EopSet::builder()
            .bulletin_a_records(a_records())
            .bulletin_b_records(b_records())
            .build()
            .unwrap();
        assert_eq!(set.preference(), BulletinPreference::PreferA);

        let observed = set.ut1_minus_utc(SplitJulianDate::from_mjd(59945.0)).unwrap();
        assert_eq!(observed.seconds, -0.0170);

        // A is only predicted here, B has an observed interpolation.
        let upgraded = set.ut1_minus_utc(SplitJulianDate::from_mjd(59946.0)).unwrap();
        assert_eq!(upgraded.quality, EopQuality::Observed);
        assert!((upgraded.seconds + 0.018).abs() < 1e-12);

        // Before A starts, B answers.
        let early = set.ut1_minus_utc(SplitJulianDate::from_mjd(59941.0)).unwrap();
        assert!((early.seconds + 0.0155).abs() < 1e-12);
    }

    #[test]
    fn test_prefer_b() {
        let set = EopSet::builder()
            .bulletin_a_records(a_records())
            .bulletin_b_records(b_records())
            .preference(BulletinPreference::PreferB)
            .build()
            .unwrap();
        let offset = set.ut1_minus_utc(SplitJulianDate::from_mjd(59945.0)).unwrap();
        assert!((offset.seconds + 0.0175).abs() < 1e-12);
    }

    #[test]
    fn test_single_bulletin() {
        let set = EopSet::builder().bulletin_b_records(b_records()).build().unwrap();
        assert!(set.bulletin_a().is_none());
        assert!(set.bulletin_b().is_some());
        assert!(set
            .ut1_minus_utc(SplitJulianDate::from_mjd(59930.0))
            .unwrap_err()
            .is_out_of_range());
    }

    #[test]
    fn test_gap_limits_from_config() {
        let set = EopSet::builder()
            .bulletin_b_records(b_records())
            .bulletin_b_max_gap(5.0)
            .build()
            .unwrap();
        assert!(set.ut1_minus_utc(SplitJulianDate::from_mjd(59945.0)).is_err());
    }

    #[test]
    fn test_converter_uses_set() {
        let set = EopSet::builder().bulletin_a_records(a_records()).build().unwrap();
        let leap = LeapSecondTable::builtin();
        let converter = set.converter(&leap);
        assert!(converter.has_eop());

        let utc = SplitJulianDate::from_mjd(59945.0);
        let ut1 = converter.convert(utc, TimeScale::UTC, TimeScale::UT1).unwrap();
        assert!((ut1.difference_seconds(&utc) + 0.0170).abs() < 1e-9);
    }

    #[test]
    fn test_load_from_files() {
        let path = unique_temp_path("c04", ".txt");
        std::fs::write(
            &path,
            "2023  1  1  0 59945.00  0.076000  0.245000 -0.0173000\n\
             2023  1  2  0 59946.00  0.075000  0.246000 -0.0180000\n",
        )
        .unwrap();

        let set = EopSet::builder().bulletin_b_file(&path).build().unwrap();
        assert_eq!(set.bulletin_b().unwrap().series().len(), 2);
        std::fs::remove_file(&path).ok();

        let missing = EopSet::builder()
            .bulletin_a_file(unique_temp_path("missing", ".all"))
            .build();
        assert!(matches!(missing, Err(EopError::Io { .. })));
    }

    #[test]
    fn test_bulletin_b_file_without_b_columns_fails() {
        let path = unique_temp_path("finals_daily", ".txt");
        std::fs::write(
            &path,
            "23 1 1 59945.00 I  0.076207 0.000091  0.245000 0.000100  I-0.0172890 0.0000101\n\
             23 1 2 59946.00 I  0.075100 0.000090  0.246100 0.000100  I-0.0180000 0.0000101\n",
        )
        .unwrap();

        let result = EopSet::builder().bulletin_b_file(&path).build();
        let as_a = EopSet::builder().bulletin_a_file(&path).build();
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(EopError::NoData(_))), "got {:?}", result);
        let offset = as_a
            .unwrap()
            .ut1_minus_utc(SplitJulianDate::from_mjd(59945.0))
            .unwrap();
        assert!((offset.seconds + 0.017289).abs() < 1e-12);
    }
}
