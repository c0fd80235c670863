use chrono::{Datelike, Duration, NaiveDate};

const PICKER_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Parses a date as typed into the range inputs (`M/D/YYYY` or `YYYY-MM-DD`).
pub fn parse_picker_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    PICKER_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

pub fn format_picker_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Counts month boundaries between `start` and `end`, floored at zero.
///
/// This is not elapsed months: Jan 31 to Feb 1 is 0, Jan 1 to Mar 31 is 1.
pub fn month_diff(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 - (start.month0() as i32 + 1)
        + end.month0() as i32;
    months.max(0) as u32
}

pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(365), today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn picker_dates_accept_unpadded_and_iso() {
        assert_eq!(parse_picker_date("1/5/2026"), Some(date(2026, 1, 5)));
        assert_eq!(parse_picker_date(" 10/16/2025 "), Some(date(2025, 10, 16)));
        assert_eq!(parse_picker_date("2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(parse_picker_date("13/1/2026"), None);
        assert_eq!(parse_picker_date("yesterday"), None);
    }

    #[test]
    fn picker_format_has_no_padding() {
        assert_eq!(format_picker_date(date(2026, 1, 5)), "1/5/2026");
        assert_eq!(format_picker_date(date(2025, 10, 16)), "10/16/2025");
    }

    #[test]
    fn month_diff_counts_boundaries() {
        assert_eq!(month_diff(date(2025, 10, 16), date(2026, 10, 16)), 11);
        assert_eq!(month_diff(date(2026, 1, 1), date(2026, 3, 31)), 1);
        assert_eq!(month_diff(date(2026, 1, 31), date(2026, 2, 1)), 0);
        assert_eq!(month_diff(date(2026, 5, 1), date(2026, 5, 20)), 0);
    }

    #[test]
    fn month_diff_floors_reversed_ranges() {
        assert_eq!(month_diff(date(2026, 6, 1), date(2025, 1, 1)), 0);
    }

    #[test]
    fn default_range_spans_365_days() {
        let (from, to) = default_range(date(2026, 10, 16));
        assert_eq!(from, date(2025, 10, 16));
        assert_eq!(to, date(2026, 10, 16));
    }
}
