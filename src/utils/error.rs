use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("{field} is not a valid {expected}: {value:?}")]
    Format {
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{field} cannot be in the future: {date}")]
    FutureDate { field: &'static str, date: NaiveDate },

    #[error("license date {license} cannot be before birth date {birth}")]
    LicenseBeforeBirth { birth: NaiveDate, license: NaiveDate },

    #[error("appointment cannot be in the past: {requested}")]
    PastAppointment { requested: NaiveDateTime },

    #[error("invalid value for {field}: {value:?} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl RentalError {
    /// 可恢復的輸入錯誤：重新提示即可，其餘視為中止
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RentalError::Format { .. }
                | RentalError::FutureDate { .. }
                | RentalError::LicenseBeforeBirth { .. }
                | RentalError::PastAppointment { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;
