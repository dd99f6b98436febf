use chrono::NaiveDate;

/// Builds a calendar date for the mock records. Out-of-range parts fall back
/// to the epoch rather than panicking.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Long feed format, e.g. "Jan 15, 2024".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Compact list format, e.g. "1/15/2024".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Groups digits by thousands: 89234 -> "89,234".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Joins CSS class fragments, skipping the empty ones.
pub fn classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
