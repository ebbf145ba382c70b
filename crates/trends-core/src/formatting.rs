use chrono::NaiveDate;

/// Format a count with thousands separators.
///
/// # Examples
///
/// ```
/// use trends_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(1234), "1,234");
/// assert_eq!(format_count(1234567), "1,234,567");
/// ```
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a count compactly for chart axis labels.
///
/// * `< 1,000` → plain digits
/// * `< 1,000,000` → `"12.3K"`
/// * otherwise → `"4.5M"`
///
/// # Examples
///
/// ```
/// use trends_core::formatting::compact_count;
///
/// assert_eq!(compact_count(950), "950");
/// assert_eq!(compact_count(12_300), "12.3K");
/// assert_eq!(compact_count(4_500_000), "4.5M");
/// ```
pub fn compact_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Render a date the way the source labels it, without zero padding.
///
/// # Examples
///
/// ```
/// use trends_core::formatting::short_date;
/// use chrono::NaiveDate;
///
/// let d = NaiveDate::from_ymd_opt(2020, 1, 22).unwrap();
/// assert_eq!(short_date(d), "1/22/20");
/// ```
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%y").to_string()
}
