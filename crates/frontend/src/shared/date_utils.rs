/// Utilities for date formatting in filter bars and tables
use chrono::{DateTime, NaiveDate, Utc};

/// Format a calendar day for display
/// Example: 2024-03-15 -> "15 Mar 2024"
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format an inclusive date range; a single day is shown once
/// Example: 2024-03-01..2024-03-15 -> "01 Mar 2024 – 15 Mar 2024"
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        format_day(start)
    } else {
        format!("{} – {}", format_day(start), format_day(end))
    }
}

/// Format an order timestamp as "DD.MM.YYYY HH:MM"
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(day(2024, 3, 15)), "15 Mar 2024");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(
            format_range(day(2024, 3, 1), day(2024, 3, 15)),
            "01 Mar 2024 – 15 Mar 2024"
        );
        assert_eq!(format_range(day(2024, 3, 1), day(2024, 3, 1)), "01 Mar 2024");
    }

    #[test]
    fn test_format_timestamp() {
        let dt = "2024-03-15T14:02:26Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_timestamp(dt), "15.03.2024 14:02");
    }
}
