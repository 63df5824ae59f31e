//! Request-date resolution and conversion between date formats

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::constants::{API_DATE_FORMAT, REQUEST_DATE_FORMAT};
use crate::error::AppError;

/// Parses a `dd-mm-yyyy` request date.
pub fn parse_request_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date.trim(), REQUEST_DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{date}', expected dd-mm-yyyy: {e}"))
    })
}

/// Formats a day as a `dd-mm-yyyy` request date.
pub fn format_request_date(date: NaiveDate) -> String {
    date.format(REQUEST_DATE_FORMAT).to_string()
}

/// Converts a `dd-mm-yyyy` request date to the `yyyy-mm-dd` form the fixtures API expects.
pub fn request_to_api_date(date: &str) -> Result<String, AppError> {
    Ok(parse_request_date(date)?.format(API_DATE_FORMAT).to_string())
}

/// Resolves the date a run is for, falling back to today's local date.
pub fn resolve_request_date(requested: Option<&str>) -> String {
    resolve_request_date_with_today(requested, Local::now().date_naive())
}

/// Same as [`resolve_request_date`] with an injected "today", for deterministic tests.
///
/// A valid date is returned in canonical zero-padded form (`1-5-2024` becomes
/// `01-05-2024`). A malformed date logs a warning and resolves to `today`.
pub fn resolve_request_date_with_today(requested: Option<&str>, today: NaiveDate) -> String {
    match requested.map(str::trim).filter(|date| !date.is_empty()) {
        Some(date) => match parse_request_date(date) {
            Ok(day) => format_request_date(day),
            Err(e) => {
                let fallback = format_request_date(today);
                warn!("Ignoring requested date: {e}. Using today's date {fallback}");
                fallback
            }
        },
        None => {
            let date = format_request_date(today);
            info!("Using today's date: {date}");
            date
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
    }

    #[test]
    fn test_resolve_valid_date() {
        assert_eq!(
            resolve_request_date_with_today(Some("25-12-2024"), today()),
            "25-12-2024"
        );
        assert_eq!(
            resolve_request_date_with_today(Some(" 1-5-2024 "), today()),
            "01-05-2024"
        );
    }

    #[test]
    fn test_resolve_absent_or_blank_date_is_today() {
        assert_eq!(resolve_request_date_with_today(None, today()), "12-05-2024");
        assert_eq!(resolve_request_date_with_today(Some("  "), today()), "12-05-2024");
    }

    #[test]
    fn test_resolve_malformed_date_falls_back_to_today() {
        for bad in ["2024-05-20", "31-02-2024", "amanhã", "20/05/2024"] {
            assert_eq!(
                resolve_request_date_with_today(Some(bad), today()),
                "12-05-2024",
                "'{bad}' should fall back to today"
            );
        }
    }

    #[test]
    fn test_request_to_api_date() {
        assert_eq!(request_to_api_date("12-05-2024").unwrap(), "2024-05-12");
        assert!(matches!(
            request_to_api_date("2024-05-12"),
            Err(AppError::DateTimeParse(_))
        ));
    }
}
