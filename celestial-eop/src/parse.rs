//! IERS bulletin text formats.
//!
//! - `finals2000A` (fixed columns): Bulletin A UT1-UTC with its I/P flag in
//!   columns 58-68, Bulletin B UT1-UTC in columns 155-165.
//! - EOP C04 (whitespace separated): the 14 series `YR MM DD MJD x y UT1-UTC ...`
//!   and the 20 series `YR MM DD HH MJD x y UT1-UTC ...`.
//!
//! Lines that carry no MJD (blank lines, headers, comments) are skipped. A line
//! with an MJD but a malformed UT1-UTC field is an error.

use crate::record::EopRecord;
use crate::{EopError, EopResult};
use celestial_time::{EopQuality, SplitJulianDate};
use tracing::debug;

const FINALS_MJD: (usize, usize) = (7, 15);
const FINALS_UT1_FLAG: usize = 57;
const FINALS_UT1_A: (usize, usize) = (58, 68);
const FINALS_UT1_B: (usize, usize) = (154, 165);

/// Bulletin A UT1-UTC from `finals2000A.all` / `finals2000A.data`.
///
/// Flag `I` rows are `Observed`, `P` rows `Predicted`, and rows whose UT1-UTC
/// columns are blank become `Missing` records.
pub fn parse_finals_bulletin_a(content: &str) -> EopResult<Vec<EopRecord>> {
    collect("finals2000A Bulletin A", content, parse_finals_bulletin_a_line)
}

/// Bulletin B UT1-UTC from the same `finals2000A` file. Rows without a
/// Bulletin B value are skipped.
pub fn parse_finals_bulletin_b(content: &str) -> EopResult<Vec<EopRecord>> {
    collect("finals2000A Bulletin B", content, parse_finals_bulletin_b_line)
}

/// IERS EOP C04 series, 14 or 20 layout. Every row is `Observed`.
pub fn parse_c04(content: &str) -> EopResult<Vec<EopRecord>> {
    collect("EOP C04", content, parse_c04_line)
}

/// Bulletin B values from either a `finals2000A` file or a C04 file.
///
/// Text with any row carrying an MJD in the finals columns is read as
/// `finals2000A` only. A finals file without Bulletin B values (such as
/// `finals2000A.daily`) is `NoData`, never re-read as C04.
pub fn parse_bulletin_b(content: &str) -> EopResult<Vec<EopRecord>> {
    if !looks_like_finals(content) {
        return parse_c04(content);
    }
    parse_finals_bulletin_b(content).map_err(|e| match e {
        EopError::NoData(_) => EopError::no_data("finals2000A file has no Bulletin B values"),
        other => other,
    })
}

fn looks_like_finals(content: &str) -> bool {
    content.lines().any(|line| finals_mjd(line).is_some())
}

pub fn parse_finals_bulletin_a_line(line: &str, line_number: usize) -> EopResult<Option<EopRecord>> {
    let Some(mjd) = finals_mjd(line) else {
        return Ok(None);
    };
    let epoch = SplitJulianDate::from_mjd(mjd);

    let Some(value) = number(line, FINALS_UT1_A, line_number, "UT1-UTC")? else {
        return Ok(Some(EopRecord::missing(epoch)));
    };

    let quality = match line.as_bytes().get(FINALS_UT1_FLAG) {
        Some(b'P') => EopQuality::Predicted,
        _ => EopQuality::Observed,
    };

    EopRecord::new(epoch, value, quality)
        .map(Some)
        .map_err(|e| EopError::parse(line_number, e.to_string()))
}

pub fn parse_finals_bulletin_b_line(line: &str, line_number: usize) -> EopResult<Option<EopRecord>> {
    let Some(mjd) = finals_mjd(line) else {
        return Ok(None);
    };

    match number(line, FINALS_UT1_B, line_number, "Bulletin B UT1-UTC")? {
        Some(value) => EopRecord::observed(mjd, value)
            .map(Some)
            .map_err(|e| EopError::parse(line_number, e.to_string())),
        None => Ok(None),
    }
}

pub fn parse_c04_line(line: &str, line_number: usize) -> EopResult<Option<EopRecord>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 7 || line.trim_start().starts_with('#') {
        return Ok(None);
    }
    // Header rows do not start with a numeric year.
    if fields[0].parse::<i32>().is_err() {
        return Ok(None);
    }

    let Ok(fourth) = fields[3].parse::<f64>() else {
        return Ok(None);
    };
    let (mjd, ut1_index) = if fourth < 24.0 {
        match fields[4].parse::<f64>() {
            Ok(mjd) => (mjd, 7),
            Err(_) => return Ok(None),
        }
    } else {
        (fourth, 6)
    };

    let Some(raw) = fields.get(ut1_index) else {
        return Err(EopError::parse(line_number, "C04 row has no UT1-UTC column"));
    };
    let value = raw
        .parse::<f64>()
        .map_err(|_| EopError::parse(line_number, format!("invalid UT1-UTC '{}'", raw)))?;

    EopRecord::observed(mjd, value)
        .map(Some)
        .map_err(|e| EopError::parse(line_number, e.to_string()))
}

fn collect(
    format: &str,
    content: &str,
    parse_line: fn(&str, usize) -> EopResult<Option<EopRecord>>,
) -> EopResult<Vec<EopRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        match parse_line(line, index + 1)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(format, records = records.len(), skipped, "parsed EOP data");

    if records.is_empty() {
        return Err(EopError::no_data(format!("no {} rows found", format)));
    }
    Ok(records)
}

fn field(line: &str, (start, end): (usize, usize)) -> Option<&str> {
    let end = end.min(line.len());
    let text = line.get(start..end)?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn finals_mjd(line: &str) -> Option<f64> {
    field(line, FINALS_MJD)?.parse::<f64>().ok()
}

fn number(
    line: &str,
    columns: (usize, usize),
    line_number: usize,
    what: &str,
) -> EopResult<Option<f64>> {
    match field(line, columns) {
        None => Ok(None),
        Some(text) => text
            .parse::<f64>()
            .map(Some)
            .map_err(|_| EopError::parse(line_number, format!("invalid {} '{}'", what, text))),
    }
}
