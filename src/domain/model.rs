use crate::domain::temporal::{self, DATETIME_FORMAT, DATE_FORMAT};
use crate::utils::error::{RentalError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::rc::Rc;

/// 建構時完成全部驗證；之後欄位不可變
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, birth_date: &str) -> Result<Self> {
        let birth_date = temporal::parse_date("birth date", birth_date)?;
        if birth_date > temporal::today() {
            return Err(RentalError::FutureDate {
                field: "birth date",
                date: birth_date,
            });
        }

        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Birth Date: {}",
            self.first_name,
            self.last_name,
            self.birth_date.format(DATE_FORMAT)
        )
    }
}

/// A person holding a driving license. Composition, not inheritance: the
/// person part is validated first, then the license date is checked
/// against the clock and against the birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicensedUser {
    person: Person,
    license_date: NaiveDate,
}

impl LicensedUser {
    pub fn new(
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        license_date: &str,
    ) -> Result<Self> {
        let person = Person::new(first_name, last_name, birth_date)?;
        let license_date = temporal::parse_date("license date", license_date)?;
        if license_date > temporal::today() {
            return Err(RentalError::FutureDate {
                field: "license date",
                date: license_date,
            });
        }
        if license_date < person.birth_date() {
            return Err(RentalError::LicenseBeforeBirth {
                birth: person.birth_date(),
                license: license_date,
            });
        }

        Ok(Self {
            person,
            license_date,
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.person.birth_date()
    }

    pub fn license_date(&self) -> NaiveDate {
        self.license_date
    }
}

impl fmt::Display for LicensedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, License Date: {}",
            self.person,
            self.license_date.format(DATE_FORMAT)
        )
    }
}

/// A booked slot for one user and one vehicle descriptor. The descriptor
/// is opaque here; catalog membership is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    user: Rc<LicensedUser>,
    vehicle: String,
    scheduled_at: NaiveDateTime,
}

impl Appointment {
    pub fn new(
        user: Rc<LicensedUser>,
        vehicle: &str,
        date: &str,
        time: &str,
    ) -> Result<Self> {
        let scheduled_at = temporal::parse_datetime("appointment", date, time)?;
        if scheduled_at < temporal::now() {
            return Err(RentalError::PastAppointment {
                requested: scheduled_at,
            });
        }

        Ok(Self {
            user,
            vehicle: vehicle.to_string(),
            scheduled_at,
        })
    }

    pub fn user(&self) -> &Rc<LicensedUser> {
        &self.user
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_at
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment: {} - {} {} - Vehicle Type: {}",
            self.scheduled_at.format(DATETIME_FORMAT),
            self.user.first_name(),
            self.user.last_name(),
            self.vehicle
        )
    }
}
