use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Inclusive day count between `start` and `end`; zero when `end` precedes `start`.
pub fn days_taken(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(0)
}

pub fn days_taken_between(start: &str, end: &str) -> u32 {
    match (parse_date(start), parse_date(end)) {
        (Some(start), Some(end)) => days_taken(start, end),
        _ => 0,
    }
}

pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|ts| ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_days(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_taken_counts_both_ends() {
        assert_eq!(days_taken(date(2024, 1, 1), date(2024, 1, 3)), 3);
        assert_eq!(days_taken(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(days_taken(date(2024, 2, 27), date(2024, 3, 1)), 4);
    }

    #[test]
    fn days_taken_is_zero_when_end_precedes_start() {
        assert_eq!(days_taken(date(2024, 1, 3), date(2024, 1, 2)), 0);
        assert_eq!(days_taken(date(2024, 1, 3), date(2023, 12, 1)), 0);
    }

    #[test]
    fn days_taken_matches_inclusive_count_over_a_range() {
        let start = date(2024, 1, 1);
        for offset in 0..400 {
            let end = start + chrono::Duration::days(offset);
            assert_eq!(days_taken(start, end), offset as u32 + 1);
        }
    }

    #[test]
    fn days_taken_between_ignores_unparsable_input() {
        assert_eq!(days_taken_between("2024-01-01", "2024-01-03"), 3);
        assert_eq!(days_taken_between("", "2024-01-03"), 0);
        assert_eq!(days_taken_between("2024-01-01", "03/01/2024"), 0);
    }

    #[test]
    fn format_days_drops_zero_fraction() {
        assert_eq!(format_days(3.0), "3");
        assert_eq!(format_days(1.5), "1.50");
    }

    #[test]
    fn format_timestamp_handles_missing_values() {
        assert_eq!(format_timestamp(None), "-");
    }
}
