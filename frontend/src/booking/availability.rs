use chrono::{Datelike, NaiveDate, Weekday};

use super::error::{BookingError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses the value of an `<input type="date">`. The weekday of the result is
/// the weekday of the calendar date itself, not of any local-time instant.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| BookingError::InvalidDate {
        input: input.to_string(),
    })
}

/// Consultations are held Monday to Friday. Empty or unparsable dates are never
/// bookable.
pub fn is_bookable(date: &str) -> bool {
    match parse_date(date) {
        Ok(date) => !matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
        Err(e) => {
            if !date.is_empty() {
                log::debug!("{}", e);
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekdays_are_bookable() {
        // 2024-06-03 is a Monday
        for day in ["2024-06-03", "2024-06-04", "2024-06-05", "2024-06-06", "2024-06-07"] {
            assert!(is_bookable(day), "{day} should be bookable");
        }
    }

    #[test]
    fn test_weekends_are_not_bookable() {
        for day in ["2024-06-08", "2024-06-09", "2000-01-01", "2023-12-31"] {
            assert!(!is_bookable(day), "{day} should not be bookable");
        }
    }

    #[test]
    fn test_bookable_matches_weekday_over_a_year() {
        let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        while date < end {
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            assert_eq!(is_bookable(&date.format(DATE_FORMAT).to_string()), !weekend);
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_invalid_dates_are_not_bookable() {
        for input in ["", "tomorrow", "2024-02-30", "2024/06/03", "03-06-2024"] {
            assert!(!is_bookable(input), "{input:?} should not be bookable");
        }
    }

    #[test]
    fn test_parse_date_error() {
        assert_eq!(
            parse_date("not-a-date"),
            Err(BookingError::InvalidDate {
                input: "not-a-date".to_string()
            })
        );
        assert_eq!(
            parse_date("2024-06-03"),
            Ok(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap())
        );
    }
}
