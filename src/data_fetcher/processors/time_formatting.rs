use crate::constants::REQUEST_DATE_FORMAT;
use crate::error::AppError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

static KICKOFF_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})h(\d{2})?$").expect("valid kickoff hour pattern"));

static SCRAPED_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\s*[:hH.]\s*(\d{2})?").expect("valid scraped hour pattern")
});

/// Resolves a kickoff from a `dd-mm-yyyy` date and an `<hours>h<minutes>?` hour string.
///
/// Minutes default to zero. The result is a local calendar date-time with no
/// timezone attached.
///
/// # Errors
///
/// `AppError::KickoffParse` when the date is not `dd-mm-yyyy` or the hour
/// string does not have the `21h30` / `21h` shape or is out of range.
///
/// # Examples
///
/// ```
/// use jogos_na_tv::data_fetcher::processors::parse_kickoff;
///
/// let kickoff = parse_kickoff("12-05-2024", "21h30").unwrap();
/// assert_eq!(kickoff.to_string(), "2024-05-12 21:30:00");
/// assert!(parse_kickoff("12-05-2024", "25x30").is_err());
/// ```
pub fn parse_kickoff(date: &str, hour: &str) -> Result<NaiveDateTime, AppError> {
    let parse_error = || AppError::kickoff_parse(date, hour);

    let day = NaiveDate::parse_from_str(date.trim(), REQUEST_DATE_FORMAT)
        .map_err(|_| parse_error())?;
    let captures = KICKOFF_HOUR.captures(hour.trim()).ok_or_else(parse_error)?;

    let hours: u32 = captures[1].parse().map_err(|_| parse_error())?;
    let minutes: u32 = match captures.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| parse_error())?,
        None => 0,
    };
    let time = NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(parse_error)?;

    Ok(day.and_time(time))
}

/// Formats a wall-clock time the way kickoff strings are rendered (`21h30`, `09h00`).
pub fn format_kickoff_hour(time: &NaiveTime) -> String {
    format!("{:02}h{:02}", time.hour(), time.minute())
}

/// Canonicalizes a kickoff time as printed by a broadcast guide.
///
/// `21:30`, `21H30`, `21.30` and `21h` all become `21h30` / `21h00`. Strings
/// that do not start with an hour are returned trimmed and otherwise untouched.
pub fn canonicalize_scraped_time(raw: &str) -> String {
    let trimmed = raw.trim();
    match SCRAPED_HOUR.captures(trimmed) {
        Some(captures) => {
            let hours: u32 = captures[1].parse().unwrap_or_default();
            let minutes: u32 = captures
                .get(2)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            format!("{hours:02}h{minutes:02}")
        }
        None => trimmed.to_string(),
    }
}

/// Removes whitespace and lower-cases a time string before comparison.
pub fn normalize_time_string(time: &str) -> String {
    time.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Leading hour component of a time string, i.e. its leading digits.
pub fn leading_hour(time: &str) -> Option<u32> {
    let digits: String = time
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_kickoff_valid_inputs() {
        assert_eq!(
            parse_kickoff("12-05-2024", "21h30").unwrap(),
            at(2024, 5, 12, 21, 30)
        );
        assert_eq!(
            parse_kickoff("01-01-2025", "9h").unwrap(),
            at(2025, 1, 1, 9, 0)
        );
        assert_eq!(
            parse_kickoff("31-12-2024", " 00h05 ").unwrap(),
            at(2024, 12, 31, 0, 5)
        );
    }

    #[test]
    fn test_parse_kickoff_rejects_malformed_hours() {
        for hour in ["25x30", "25h30", "21h75", "21:30", "", "h30", "21h3"] {
            let result = parse_kickoff("12-05-2024", hour);
            assert!(
                matches!(result, Err(AppError::KickoffParse { .. })),
                "'{hour}' should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_kickoff_rejects_malformed_dates() {
        assert!(parse_kickoff("2024-05-12", "21h30").is_err());
        assert!(parse_kickoff("32-05-2024", "21h30").is_err());
    }

    #[test]
    fn test_format_kickoff_hour_pads_and_roundtrips() {
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let formatted = format_kickoff_hour(&time);
        assert_eq!(formatted, "09h00");
        assert_eq!(formatted, canonicalize_scraped_time("9:00"));
        assert_eq!(
            parse_kickoff("12-05-2024", &formatted).unwrap().time(),
            time
        );
    }

    #[test]
    fn test_canonicalize_scraped_time() {
        assert_eq!(canonicalize_scraped_time("21:30"), "21h30");
        assert_eq!(canonicalize_scraped_time(" 21H30 "), "21h30");
        assert_eq!(canonicalize_scraped_time("9.15"), "09h15");
        assert_eq!(canonicalize_scraped_time("16h"), "16h00");
        assert_eq!(canonicalize_scraped_time("A definir"), "A definir");
    }

    #[test]
    fn test_normalize_and_leading_hour() {
        assert_eq!(normalize_time_string(" 21 H 30 "), "21h30");
        assert_eq!(leading_hour("21h30"), Some(21));
        assert_eq!(leading_hour("09h00"), Some(9));
        assert_eq!(leading_hour("tbd"), None);
    }
}
