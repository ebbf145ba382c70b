//! Three-panel chart dashboard for a country's COVID-19 history.
//!
//! Panel one plots daily new cases, panel two daily new deaths, panel three
//! the cumulative totals of both metrics together. All three share the same
//! date axis.

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use trends_core::formatting::{compact_count, short_date};
use trends_core::models::{CumulativeRecord, NormalizedSeries};

use crate::themes::Theme;

// ── DashboardData ─────────────────────────────────────────────────────────────

/// Everything the dashboard needs, as parallel vectors over the same dates.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Country name as entered by the user.
    pub country: String,
    /// Sorted calendar dates, one per day of recorded history.
    pub dates: Vec<NaiveDate>,
    /// New cases per day.
    pub daily_cases: Vec<u64>,
    /// New deaths per day.
    pub daily_deaths: Vec<u64>,
    /// Running case totals per day.
    pub total_cases: Vec<u64>,
    /// Running death totals per day.
    pub total_deaths: Vec<u64>,
}

impl DashboardData {
    /// Build dashboard vectors from the normalized and cumulative series.
    pub fn from_series(
        country: &str,
        series: &NormalizedSeries,
        totals: &[CumulativeRecord],
    ) -> Self {
        Self {
            country: country.to_string(),
            dates: series.dates(),
            daily_cases: series.records.iter().map(|r| r.new_cases).collect(),
            daily_deaths: series.records.iter().map(|r| r.new_deaths).collect(),
            total_cases: totals.iter().map(|r| r.total_cases).collect(),
            total_deaths: totals.iter().map(|r| r.total_deaths).collect(),
        }
    }
}

// ── Axis helpers ──────────────────────────────────────────────────────────────

/// Turn a value series into `(day_index, value)` chart points.
fn series_points(values: &[u64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v as f64))
        .collect()
}

/// Largest value across the given series, minimum 1 so the y-axis always
/// has a positive extent.
fn max_value(series: &[&[u64]]) -> u64 {
    series
        .iter()
        .flat_map(|s| s.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1)
}

/// First, middle, and last date rendered as axis labels.
fn x_label_strings(dates: &[NaiveDate]) -> Vec<String> {
    match dates {
        [] => vec![],
        [only] => vec![short_date(*only)],
        _ => vec![
            short_date(dates[0]),
            short_date(dates[dates.len() / 2]),
            short_date(dates[dates.len() - 1]),
        ],
    }
}

/// Zero, midpoint, and maximum count rendered as axis labels.
fn y_label_strings(max: u64) -> Vec<String> {
    vec![
        "0".to_string(),
        compact_count(max / 2),
        compact_count(max),
    ]
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render one chart panel with the shared date axis.
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: String,
    datasets: Vec<Dataset>,
    dates: &[NaiveDate],
    y_max: u64,
    theme: &Theme,
) {
    let x_labels: Vec<Line> = x_label_strings(dates)
        .into_iter()
        .map(|s| Line::styled(s, theme.axis_label))
        .collect();
    let y_labels: Vec<Line> = y_label_strings(y_max)
        .into_iter()
        .map(|s| Line::styled(s, theme.axis_label))
        .collect();

    let x_max = (dates.len().saturating_sub(1)).max(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border)
                .title(Line::styled(title, theme.title)),
        )
        .x_axis(
            Axis::default()
                .style(theme.axis)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.axis)
                .bounds([0.0, y_max as f64])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Render the full three-panel dashboard into `area`.
pub fn render_dashboard(frame: &mut Frame, area: Rect, data: &DashboardData, theme: &Theme) {
    if data.dates.is_empty() {
        render_no_data(frame, area, theme);
        return;
    }

    let [header_area, cases_area, deaths_area, totals_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);

    let header = Paragraph::new(Line::styled(
        format!("COVID-19 in {} — press q to quit", data.country),
        theme.text,
    ));
    frame.render_widget(header, header_area);

    let daily_cases_pts = series_points(&data.daily_cases);
    let daily_deaths_pts = series_points(&data.daily_deaths);
    let total_cases_pts = series_points(&data.total_cases);
    let total_deaths_pts = series_points(&data.total_deaths);

    render_panel(
        frame,
        cases_area,
        format!("Daily COVID-19 Cases in {}", data.country),
        vec![Dataset::default()
            .name("Daily New Cases")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.daily_cases)
            .data(&daily_cases_pts)],
        &data.dates,
        max_value(&[&data.daily_cases]),
        theme,
    );

    render_panel(
        frame,
        deaths_area,
        format!("Daily COVID-19 Deaths in {}", data.country),
        vec![Dataset::default()
            .name("Daily New Deaths")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme.daily_deaths)
            .data(&daily_deaths_pts)],
        &data.dates,
        max_value(&[&data.daily_deaths]),
        theme,
    );

    // Both totals share one panel so their scales are directly comparable.
    render_panel(
        frame,
        totals_area,
        format!("Total COVID-19 Impact in {}", data.country),
        vec![
            Dataset::default()
                .name("Total Cases")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.total_cases)
                .data(&total_cases_pts),
            Dataset::default()
                .name("Total Deaths")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme.total_deaths)
                .data(&total_deaths_pts),
        ],
        &data.dates,
        max_value(&[&data.total_cases, &data.total_deaths]),
        theme,
    );
}

/// Fallback screen when the fetched series contains no days.
pub fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new(Line::styled(
        "No historical data to display — press q to quit",
        theme.dim,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    );
    frame.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use trends_core::models::DailyRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── DashboardData ─────────────────────────────────────────────────────

    #[test]
    fn test_from_series_parallel_vectors() {
        let series = NormalizedSeries {
            records: vec![
                DailyRecord {
                    date: date(2021, 1, 1),
                    new_cases: 100,
                    new_deaths: 2,
                },
                DailyRecord {
                    date: date(2021, 1, 2),
                    new_cases: 50,
                    new_deaths: 1,
                },
            ],
        };
        let totals = trends_core::normalizer::cumulative(&series.records);
        let data = DashboardData::from_series("USA", &series, &totals);

        assert_eq!(data.country, "USA");
        assert_eq!(data.dates, vec![date(2021, 1, 1), date(2021, 1, 2)]);
        assert_eq!(data.daily_cases, vec![100, 50]);
        assert_eq!(data.daily_deaths, vec![2, 1]);
        assert_eq!(data.total_cases, vec![100, 150]);
        assert_eq!(data.total_deaths, vec![2, 3]);
    }

    // ── series_points ─────────────────────────────────────────────────────

    #[test]
    fn test_series_points_indexes_days() {
        let pts = series_points(&[5, 0, 9]);
        assert_eq!(pts, vec![(0.0, 5.0), (1.0, 0.0), (2.0, 9.0)]);
    }

    // ── max_value ─────────────────────────────────────────────────────────

    #[test]
    fn test_max_value_across_series() {
        assert_eq!(max_value(&[&[1, 2], &[7, 3]]), 7);
    }

    #[test]
    fn test_max_value_empty_is_one() {
        assert_eq!(max_value(&[&[]]), 1);
        assert_eq!(max_value(&[&[0, 0]]), 1);
    }

    // ── axis labels ───────────────────────────────────────────────────────

    #[test]
    fn test_x_labels_first_middle_last() {
        let dates = vec![
            date(2020, 1, 22),
            date(2020, 1, 23),
            date(2020, 1, 24),
            date(2020, 1, 25),
            date(2020, 1, 26),
        ];
        assert_eq!(
            x_label_strings(&dates),
            vec!["1/22/20", "1/24/20", "1/26/20"]
        );
    }

    #[test]
    fn test_x_labels_single_date() {
        assert_eq!(x_label_strings(&[date(2021, 3, 1)]), vec!["3/1/21"]);
    }

    #[test]
    fn test_x_labels_empty() {
        assert!(x_label_strings(&[]).is_empty());
    }

    #[test]
    fn test_y_labels_span_zero_to_max() {
        assert_eq!(y_label_strings(2_000_000), vec!["0", "1.0M", "2.0M"]);
    }
}
