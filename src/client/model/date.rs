use chrono::{DateTime, Utc};

/// Formats a date the way cards and the hero display it, e.g. `Jan 1, 2026`.
pub fn format_display_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Day-of-month and upper-case month abbreviation for the event date badge.
pub fn date_badge(date: &DateTime<Utc>) -> (String, String) {
    (
        date.format("%-d").to_string(),
        date.format("%b").to_string().to_uppercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_short_month_date() {
        let date = Utc.with_ymd_and_hms(2026, 1, 1, 18, 30, 0).unwrap();

        assert_eq!(format_display_date(&date), "Jan 1, 2026");
        assert_eq!(date_badge(&date), ("1".to_string(), "JAN".to_string()));
    }
}
