use crate::utils::error::{RentalError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

// chrono 本身接受一位數的月份與日期，先用固定寬度的樣式擋掉
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(value) {
        return Err(RentalError::Format {
            field,
            expected: "date (YYYY-MM-DD)",
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| RentalError::Format {
        field,
        expected: "date (YYYY-MM-DD)",
        value: value.to_string(),
    })
}

pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime> {
    if !TIME_PATTERN.is_match(value) {
        return Err(RentalError::Format {
            field,
            expected: "time (HH:MM)",
            value: value.to_string(),
        });
    }

    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| RentalError::Format {
        field,
        expected: "time (HH:MM)",
        value: value.to_string(),
    })
}

pub fn parse_datetime(field: &'static str, date_value: &str, time_value: &str) -> Result<NaiveDateTime> {
    let date = parse_date(field, date_value)?;
    let time = parse_time(field, time_value)?;
    Ok(NaiveDateTime::new(date, time))
}

/// Naive local clock; no timezone handling anywhere in the crate.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
