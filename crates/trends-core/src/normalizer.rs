//! Daily-delta derivation from cumulative count series.
//!
//! The disease.sh historical payload reports running totals keyed by date
//! label, with no guaranteed key order. This module recovers chronology by
//! parsing and sorting the labels as calendar dates, then differences the
//! cumulative values into per-day deltas. Reported totals occasionally go
//! *down* when the source corrects earlier data; the resulting negative
//! delta is clamped to 0 while the next day's delta is still computed
//! against the corrected (lower) total.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, TrendsError};
use crate::models::{CumulativeRecord, DailyRecord, NormalizedSeries, Timeline};

/// Date label format used by the disease.sh timeline keys, e.g. `"1/22/20"`.
pub const DATE_LABEL_FORMAT: &str = "%m/%d/%y";

/// Parse a timeline date label into a calendar date.
///
/// # Examples
///
/// ```
/// use trends_core::normalizer::parse_date_label;
/// use chrono::NaiveDate;
///
/// let date = parse_date_label("1/22/20").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 22).unwrap());
/// ```
pub fn parse_date_label(label: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(label, DATE_LABEL_FORMAT)
        .map_err(|_| TrendsError::DateParse(label.to_string()))
}

/// Convert the raw cumulative timeline into ordered daily deltas.
///
/// Fails with [`TrendsError::SchemaMismatch`] when the cases and deaths maps
/// do not share the same key set, and with [`TrendsError::DateParse`] when a
/// label does not parse or two labels collapse onto the same calendar date.
///
/// Pure function of its input: normalizing the same timeline twice yields
/// identical output.
pub fn normalize(timeline: &Timeline) -> Result<NormalizedSeries> {
    check_key_sets(timeline)?;

    // Parse every label up front and let the BTreeMap order the dates by
    // calendar value. A string sort on %m/%d/%y would not be chronological.
    let mut by_date: BTreeMap<NaiveDate, (u64, u64)> = BTreeMap::new();
    for (label, &cases) in &timeline.cases {
        let date = parse_date_label(label)?;
        let deaths = *timeline
            .deaths
            .get(label)
            .ok_or_else(|| TrendsError::SchemaMismatch(format!("deaths missing {label}")))?;
        if by_date.insert(date, (cases, deaths)).is_some() {
            return Err(TrendsError::DateParse(format!(
                "{label} duplicates an earlier label for {date}"
            )));
        }
    }

    let mut records = Vec::with_capacity(by_date.len());
    let mut prev_cases: u64 = 0;
    let mut prev_deaths: u64 = 0;

    for (date, (cases, deaths)) in by_date {
        let new_cases = cases.saturating_sub(prev_cases);
        let new_deaths = deaths.saturating_sub(prev_deaths);

        // Advance the baseline to the raw value even when the delta was
        // clamped, so the day after a correction differences against the
        // corrected total, not the pre-correction peak.
        prev_cases = cases;
        prev_deaths = deaths;

        records.push(DailyRecord {
            date,
            new_cases,
            new_deaths,
        });
    }

    Ok(NormalizedSeries { records })
}

/// Derive running totals from an ordered delta series.
///
/// `total[i] = total[i-1] + new[i]` with an explicit initial total of 0.
pub fn cumulative(records: &[DailyRecord]) -> Vec<CumulativeRecord> {
    let mut total_cases: u64 = 0;
    let mut total_deaths: u64 = 0;

    records
        .iter()
        .map(|r| {
            total_cases += r.new_cases;
            total_deaths += r.new_deaths;
            CumulativeRecord {
                date: r.date,
                total_cases,
                total_deaths,
            }
        })
        .collect()
}

/// Fail fast when the two series do not cover the same dates.
fn check_key_sets(timeline: &Timeline) -> Result<()> {
    if timeline.cases.len() != timeline.deaths.len() {
        return Err(TrendsError::SchemaMismatch(format!(
            "cases has {} dates, deaths has {}",
            timeline.cases.len(),
            timeline.deaths.len()
        )));
    }
    if let Some(label) = timeline
        .cases
        .keys()
        .find(|k| !timeline.deaths.contains_key(*k))
    {
        return Err(TrendsError::SchemaMismatch(format!(
            "deaths missing {label}"
        )));
    }
    Ok(())
}
