use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The `timeline` object of a disease.sh historical response.
///
/// Both maps go from a date label (e.g. `"1/22/20"`, `%m/%d/%y`) to the
/// cumulative count reported as of that date. The maps arrive unordered;
/// chronology is recovered by the normalizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Cumulative case counts by date label.
    #[serde(default)]
    pub cases: HashMap<String, u64>,
    /// Cumulative death counts by date label.
    #[serde(default)]
    pub deaths: HashMap<String, u64>,
}

impl Timeline {
    /// Number of dates in the cases series.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when the cases series holds no dates.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

/// Top-level shape of `GET /v3/covid-19/historical/{country}`.
///
/// `timeline` is optional on purpose: the API answers unknown countries
/// with a message document that carries no `timeline` key, and that absence
/// is the signal for [`TrendsError::DataUnavailable`].
///
/// [`TrendsError::DataUnavailable`]: crate::error::TrendsError::DataUnavailable
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalResponse {
    /// Canonical country name echoed back by the API.
    #[serde(default)]
    pub country: Option<String>,
    /// The historical series, absent for unknown countries.
    #[serde(default)]
    pub timeline: Option<Timeline>,
}

/// One day of derived deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    /// Calendar date the counts were reported for.
    pub date: NaiveDate,
    /// New cases reported on this date (clamped to 0 on corrections).
    pub new_cases: u64,
    /// New deaths reported on this date (clamped to 0 on corrections).
    pub new_deaths: u64,
}

/// One day of running totals, derived from [`DailyRecord`]s in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CumulativeRecord {
    /// Calendar date the totals apply to.
    pub date: NaiveDate,
    /// Sum of `new_cases` up to and including this date.
    pub total_cases: u64,
    /// Sum of `new_deaths` up to and including this date.
    pub total_deaths: u64,
}

/// The normalizer's output: per-day deltas in strictly ascending date order,
/// one record per date present in the raw series.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSeries {
    /// Daily delta records, strictly ascending by date.
    pub records: Vec<DailyRecord>,
}

impl NormalizedSeries {
    /// Number of days in the series.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the series holds no days.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sorted calendar dates of the series.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_len_tracks_cases() {
        let mut tl = Timeline::default();
        assert!(tl.is_empty());
        tl.cases.insert("1/1/21".to_string(), 10);
        tl.cases.insert("1/2/21".to_string(), 20);
        assert_eq!(tl.len(), 2);
        assert!(!tl.is_empty());
    }

    #[test]
    fn test_historical_response_with_timeline() {
        let body = r#"{
            "country": "USA",
            "timeline": {
                "cases": {"1/22/20": 1},
                "deaths": {"1/22/20": 0}
            }
        }"#;
        let resp: HistoricalResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.country.as_deref(), Some("USA"));
        let tl = resp.timeline.unwrap();
        assert_eq!(tl.cases.get("1/22/20"), Some(&1));
        assert_eq!(tl.deaths.get("1/22/20"), Some(&0));
    }

    #[test]
    fn test_historical_response_missing_timeline() {
        // Unknown countries come back as a message document.
        let body = r#"{"message": "Country not found or doesn't have any historical data"}"#;
        let resp: HistoricalResponse = serde_json::from_str(body).unwrap();
        assert!(resp.timeline.is_none());
        assert!(resp.country.is_none());
    }

    #[test]
    fn test_normalized_series_dates() {
        let series = NormalizedSeries {
            records: vec![
                DailyRecord {
                    date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                    new_cases: 5,
                    new_deaths: 0,
                },
                DailyRecord {
                    date: NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
                    new_cases: 3,
                    new_deaths: 1,
                },
            ],
        };
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.dates(),
            vec![
                NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            ]
        );
    }
}
