//! Display formatting for the ISO dates the data service stores.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Split the leading `YYYY-MM[-DD]` of an ISO date or timestamp.
fn parse_date(value: &str) -> Option<(u32, &'static str, Option<u32>)> {
    let mut parts = value.get(..10.min(value.len()))?.split('-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let month = *MONTHS.get(month.checked_sub(1)?)?;
    let day = parts.next().and_then(|d| d.parse().ok());
    Some((year, month, day))
}

/// "Jan 2024". Unparseable input is returned unchanged.
pub fn format_month(value: &str) -> String {
    match parse_date(value.trim()) {
        Some((year, month, _)) => format!("{month} {year}"),
        None => value.to_string(),
    }
}

/// "Jan 5, 2024". Unparseable input is returned unchanged.
pub fn format_day(value: &str) -> String {
    match parse_date(value.trim()) {
        Some((year, month, Some(day))) => format!("{month} {day}, {year}"),
        Some((year, month, None)) => format!("{month} {year}"),
        None => value.to_string(),
    }
}

/// "Jan 2020 - Present" for an open-ended range.
pub fn date_range(start: &str, end: &str) -> String {
    let end = if end.trim().is_empty() {
        "Present".to_string()
    } else {
        format_month(end)
    };
    format!("{} - {end}", format_month(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-01-15"), "Jan 2024");
        assert_eq!(format_month("2023-12"), "Dec 2023");
        assert_eq!(format_month("sometime"), "sometime");
        assert_eq!(format_month("2023-13-01"), "2023-13-01");
    }

    #[test]
    fn test_format_day_from_timestamp() {
        assert_eq!(format_day("2024-03-05T10:00:00+00:00"), "Mar 5, 2024");
    }

    #[test]
    fn test_open_ended_range_is_present() {
        assert_eq!(date_range("2020-06-01", ""), "Jun 2020 - Present");
        assert_eq!(date_range("2018-09", "2022-05"), "Sep 2018 - May 2022");
    }
}
