use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

/// GDS month codes, January first.
pub const MONTH_CODES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Day-of-week codes indexed from Sunday, matching terminal display order.
pub const DAY_CODES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// 1-based month number for a GDS month code.
pub fn month_number(code: &str) -> Option<u32> {
    MONTH_CODES
        .iter()
        .position(|m| *m == code)
        .map(|i| i as u32 + 1)
}

/// GDS month code for a 1-based month number.
pub fn month_code(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_CODES.get(i as usize))
        .copied()
}

/// Split a `DDMON` string into (day, 1-based month). The day is not
/// range-checked beyond what the month table implies; grammar validators do
/// their own staged checks to produce field-specific messages.
pub fn parse_ddmon(date: &str) -> Option<(u32, u32)> {
    if date.len() < 4 || !date.is_ascii() {
        return None;
    }
    let (day_part, month_part) = date.split_at(date.len() - 3);
    let day = day_part.parse::<u32>().ok()?;
    let month = month_number(month_part)?;
    Some((day, month))
}

/// Zero-padded `DDMON` string from a day and month code.
pub fn format_ddmon(day: u32, month: &str) -> String {
    format!("{:02}{}", day, month)
}

/// Day-of-week code for a `DDMON` date resolved against the given year.
/// Empty string when the date does not exist in that year.
pub fn day_of_week_in_year(date: &str, year: i32) -> &'static str {
    let (day, month) = match parse_ddmon(date) {
        Some(parts) => parts,
        None => return "",
    };
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => DAY_CODES[d.weekday().num_days_from_sunday() as usize],
        None => "",
    }
}

/// Day-of-week code for a `DDMON` date in the current year.
pub fn day_of_week(date: &str) -> &'static str {
    day_of_week_in_year(date, Utc::now().year())
}

/// `DDMONYY` rendering, e.g. `22SEP25`.
pub fn ddmonyy(date: DateTime<Utc>) -> String {
    let month = MONTH_CODES[date.month0() as usize];
    format!("{:02}{}{:02}", date.day(), month, date.year() % 100)
}

/// `HHMM` rendering of a timestamp, e.g. `0825`.
pub fn hhmm(date: DateTime<Utc>) -> String {
    format!("{:02}{:02}", date.hour(), date.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_lookup() {
        assert_eq!(month_number("JAN"), Some(1));
        assert_eq!(month_number("DEC"), Some(12));
        assert_eq!(month_number("XXX"), None);
        assert_eq!(month_code(6), Some("JUN"));
        assert_eq!(month_code(0), None);
        assert_eq!(month_code(13), None);
    }

    #[test]
    fn test_parse_ddmon() {
        assert_eq!(parse_ddmon("15JUN"), Some((15, 6)));
        assert_eq!(parse_ddmon("05JAN"), Some((5, 1)));
        assert_eq!(parse_ddmon("5JUN"), Some((5, 6)));
        assert_eq!(parse_ddmon("15XYZ"), None);
        assert_eq!(parse_ddmon("JUN"), None);
    }

    #[test]
    fn test_format_ddmon_pads_day() {
        assert_eq!(format_ddmon(5, "JUN"), "05JUN");
        assert_eq!(format_ddmon(15, "JUN"), "15JUN");
    }

    #[test]
    fn test_day_of_week_pinned_year() {
        // 2024-06-15 was a Saturday, 2024-01-01 a Monday.
        assert_eq!(day_of_week_in_year("15JUN", 2024), "SAT");
        assert_eq!(day_of_week_in_year("01JAN", 2024), "MON");
        // 30FEB does not exist in any year.
        assert_eq!(day_of_week_in_year("30FEB", 2024), "");
    }

    #[test]
    fn test_ddmonyy_and_hhmm() {
        let ts = Utc.with_ymd_and_hms(2025, 9, 22, 8, 5, 0).unwrap();
        assert_eq!(ddmonyy(ts), "22SEP25");
        assert_eq!(hhmm(ts), "0805");
    }
}
