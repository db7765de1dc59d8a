//! The seven supported time scales and scale-tagged epochs.
//!
//! Scales form a tree rooted at TAI (see [`graph`]):
//!
//! ```text
//! UT1 -> UTC -> TAI <- TT <- TCG
//!                      ^
//!                      TDB <- TCB
//! ```
//!
//! Every conversion walks this tree through [`conversions::TimeScaleConverter`].

pub mod conversions;
pub mod graph;

use crate::julian::SplitJulianDate;
use crate::{TimeError, TimeResult};
use conversions::TimeScaleConverter;
use std::fmt;
use std::str::FromStr;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeScale {
    /// Coordinated Universal Time.
    UTC,
    /// Earth rotation time.
    UT1,
    /// International Atomic Time.
    TAI,
    /// Terrestrial Time.
    TT,
    /// Geocentric Coordinate Time.
    TCG,
    /// Barycentric Dynamical Time.
    TDB,
    /// Barycentric Coordinate Time.
    TCB,
}

impl TimeScale {
    pub const ALL: [TimeScale; 7] = [
        TimeScale::UTC,
        TimeScale::UT1,
        TimeScale::TAI,
        TimeScale::TT,
        TimeScale::TCG,
        TimeScale::TDB,
        TimeScale::TCB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeScale::UTC => "UTC",
            TimeScale::UT1 => "UT1",
            TimeScale::TAI => "TAI",
            TimeScale::TT => "TT",
            TimeScale::TCG => "TCG",
            TimeScale::TDB => "TDB",
            TimeScale::TCB => "TCB",
        }
    }

    /// The next scale towards TAI, or `None` for TAI itself.
    pub fn parent(self) -> Option<TimeScale> {
        graph::edge_to_parent(self).map(|edge| edge.parent)
    }

    /// Number of edges between this scale and TAI.
    pub fn depth(self) -> usize {
        let mut depth = 0;
        let mut scale = self;
        while let Some(parent) = scale.parent() {
            depth += 1;
            scale = parent;
        }
        depth
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for TimeScale {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeScale::ALL
            .into_iter()
            .find(|scale| scale.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TimeError::ParseError(format!("Unknown time scale: '{}'", trimmed)))
    }
}

/// A split Julian Date tagged with the scale it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epoch {
    pub date: SplitJulianDate,
    pub scale: TimeScale,
}

impl Epoch {
    pub fn new(date: SplitJulianDate, scale: TimeScale) -> Self {
        Self { date, scale }
    }

    pub fn to_scale(&self, target: TimeScale, converter: &TimeScaleConverter<'_>) -> TimeResult<Epoch> {
        let date = converter.convert(self.date, self.scale, target)?;
        Ok(Epoch::new(date, target))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.scale)
    }
}
