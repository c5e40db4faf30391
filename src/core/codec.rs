use crate::domain::model::{Appointment, LicensedUser};
use crate::domain::temporal::{DATETIME_FORMAT, DATE_FORMAT};
use crate::utils::error::{RentalError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;

/// 舊檔案格式的欄位名稱照搬，欄位值一律保持字串；
/// 語義驗證在 Registry 重新建構時進行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Birth Date")]
    pub birth_date: String,
    #[serde(rename = "License Date")]
    pub license_date: String,
}

impl From<&LicensedUser> for UserRow {
    fn from(user: &LicensedUser) -> Self {
        Self {
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            birth_date: user.birth_date().format(DATE_FORMAT).to_string(),
            license_date: user.license_date().format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRow {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,
    #[serde(rename = "Appointment DateTime")]
    pub appointment_datetime: String,
}

impl From<&Appointment> for AppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            first_name: appointment.user().first_name().to_string(),
            last_name: appointment.user().last_name().to_string(),
            vehicle_type: appointment.vehicle().to_string(),
            appointment_datetime: appointment
                .scheduled_at()
                .format(DATETIME_FORMAT)
                .to_string(),
        }
    }
}

impl AppointmentRow {
    /// Recover the date and time parts from the single space-joined field.
    pub fn datetime_parts(&self) -> Result<(&str, &str)> {
        let mut parts = self.appointment_datetime.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(date), Some(time)) => Ok((date, time)),
            _ => Err(RentalError::Format {
                field: "appointment datetime",
                expected: "datetime (YYYY-MM-DD HH:MM)",
                value: self.appointment_datetime.clone(),
            }),
        }
    }
}

const USER_HEADERS: [&str; 4] = ["First Name", "Last Name", "Birth Date", "License Date"];
const APPOINTMENT_HEADERS: [&str; 4] =
    ["First Name", "Last Name", "Vehicle Type", "Appointment DateTime"];

// 標頭自己寫：serde 只在有資料列時才會輸出標頭，而空檔案也必須帶標頭
pub fn write_users(path: &Path, users: &[Rc<LicensedUser>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(USER_HEADERS)?;
    for user in users {
        writer.serialize(UserRow::from(user.as_ref()))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_users(path: &Path) -> Result<Vec<UserRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

pub fn write_appointments(path: &Path, appointments: &[Appointment]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(APPOINTMENT_HEADERS)?;
    for appointment in appointments {
        writer.serialize(AppointmentRow::from(appointment))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_appointments(path: &Path) -> Result<Vec<AppointmentRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
