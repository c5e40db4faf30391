use crate::core::codec;
use crate::domain::model::{Appointment, LicensedUser};
use crate::utils::error::Result;
use std::path::Path;
use std::rc::Rc;

/// The in-memory store of users and appointments, and the unit of
/// persistence. Caller-owned; create one per process and pass it around.
/// Collections are append-only.
#[derive(Debug, Default)]
pub struct Registry {
    users: Vec<Rc<LicensedUser>>,
    appointments: Vec<Appointment>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates, then appends. Order of insertion is preserved.
    pub fn add_user(
        &mut self,
        first_name: &str,
        last_name: &str,
        birth_date: &str,
        license_date: &str,
    ) -> Result<Rc<LicensedUser>> {
        let user = Rc::new(LicensedUser::new(
            first_name,
            last_name,
            birth_date,
            license_date,
        )?);
        self.users.push(Rc::clone(&user));
        Ok(user)
    }

    /// Validates, then appends. Membership of `user` in this registry is
    /// not checked; that is the caller's responsibility.
    pub fn add_appointment(
        &mut self,
        user: &Rc<LicensedUser>,
        vehicle: &str,
        date: &str,
        time: &str,
    ) -> Result<Appointment> {
        let appointment = Appointment::new(Rc::clone(user), vehicle, date, time)?;
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    pub fn users(&self) -> &[Rc<LicensedUser>] {
        &self.users
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// First user whose (first, last) name matches exactly.
    pub fn find_user(&self, first_name: &str, last_name: &str) -> Option<&Rc<LicensedUser>> {
        self.users
            .iter()
            .find(|user| user.first_name() == first_name && user.last_name() == last_name)
    }

    /// Truncates and rewrites both files. Output is deterministic, so
    /// saving the same state twice produces byte-identical files.
    pub fn save(&self, users_path: &Path, appointments_path: &Path) -> Result<()> {
        codec::write_users(users_path, &self.users)?;
        codec::write_appointments(appointments_path, &self.appointments)?;
        Ok(())
    }

    /// Clears both collections, then rebuilds them from the files,
    /// re-running full validation per row. Appointment rows are joined
    /// back to users by exact (first, last) name; the first match wins
    /// and rows without a match are dropped silently.
    ///
    /// Not transactional: a row that fails mid-way leaves the registry
    /// partially populated.
    pub fn load(&mut self, users_path: &Path, appointments_path: &Path) -> Result<()> {
        self.users.clear();
        self.appointments.clear();

        for row in codec::read_users(users_path)? {
            self.add_user(
                &row.first_name,
                &row.last_name,
                &row.birth_date,
                &row.license_date,
            )?;
        }

        for row in codec::read_appointments(appointments_path)? {
            let user = match self.find_user(&row.first_name, &row.last_name) {
                Some(user) => Rc::clone(user),
                None => continue,
            };
            let (date, time) = row.datetime_parts()?;
            self.add_appointment(&user, &row.vehicle_type, date, time)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::temporal::DATE_FORMAT;
    use crate::utils::error::RentalError;
    use chrono::{Duration, Local};
    use tempfile::TempDir;

    fn future_date() -> String {
        (Local::now().date_naive() + Duration::days(30))
            .format(DATE_FORMAT)
            .to_string()
    }

    #[test]
    fn test_add_user_appends_in_order() {
        let mut registry = Registry::new();
        registry
            .add_user("Alice", "Ammann", "1990-05-21", "2010-05-21")
            .unwrap();
        registry
            .add_user("Bob", "Berger", "1985-02-11", "2005-07-01")
            .unwrap();

        let names: Vec<&str> = registry.users().iter().map(|u| u.first_name()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_add_user_failure_leaves_registry_untouched() {
        let mut registry = Registry::new();
        let err = registry
            .add_user("Alice", "Ammann", "1990-05-21", "1980-01-01")
            .unwrap_err();
        assert!(matches!(err, RentalError::LicenseBeforeBirth { .. }));
        assert!(registry.users().is_empty());
    }

    #[test]
    fn test_add_appointment_does_not_require_membership() {
        let mut registry = Registry::new();
        // user constructed outside the registry on purpose
        let user =
            Rc::new(LicensedUser::new("Test", "User", "1990-05-21", "2010-05-21").unwrap());
        registry
            .add_appointment(&user, "Toyota Corolla", &future_date(), "12:00")
            .unwrap();
        assert!(registry.users().is_empty());
        assert_eq!(registry.appointments().len(), 1);
    }

    #[test]
    fn test_find_user_returns_first_exact_match() {
        let mut registry = Registry::new();
        let first = registry
            .add_user("Test", "User", "1990-05-21", "2010-05-21")
            .unwrap();
        registry
            .add_user("Test", "User", "1970-01-01", "1990-01-01")
            .unwrap();

        let found = registry.find_user("Test", "User").unwrap();
        assert!(Rc::ptr_eq(found, &first));
        assert!(registry.find_user("Test", "Nobody").is_none());
    }

    #[test]
    fn test_load_clears_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let users_path = temp_dir.path().join("users.csv");
        let appointments_path = temp_dir.path().join("appointments.csv");

        let mut registry = Registry::new();
        registry
            .add_user("Saved", "User", "1990-05-21", "2010-05-21")
            .unwrap();
        registry.save(&users_path, &appointments_path).unwrap();

        registry
            .add_user("Later", "User", "1991-01-01", "2011-01-01")
            .unwrap();
        registry.load(&users_path, &appointments_path).unwrap();

        assert_eq!(registry.users().len(), 1);
        assert_eq!(registry.users()[0].first_name(), "Saved");
    }

    #[test]
    fn test_load_skips_appointments_without_matching_user() {
        let temp_dir = TempDir::new().unwrap();
        let users_path = temp_dir.path().join("users.csv");
        let appointments_path = temp_dir.path().join("appointments.csv");

        let mut registry = Registry::new();
        let user = registry
            .add_user("Test", "User", "1990-05-21", "2010-05-21")
            .unwrap();
        registry
            .add_appointment(&user, "Toyota Corolla", &future_date(), "12:00")
            .unwrap();
        registry.save(&users_path, &appointments_path).unwrap();

        // an appointment row referencing nobody in the users file
        let orphan = format!("Ghost,Rider,Honda Civic,{} 09:00\n", future_date());
        let mut content = std::fs::read_to_string(&appointments_path).unwrap();
        content.push_str(&orphan);
        std::fs::write(&appointments_path, content).unwrap();

        let mut reloaded = Registry::new();
        reloaded.load(&users_path, &appointments_path).unwrap();
        assert_eq!(reloaded.appointments().len(), 1);
        assert_eq!(reloaded.appointments()[0].user().first_name(), "Test");
    }

    #[test]
    fn test_load_is_not_transactional_on_appointment_errors() {
        let temp_dir = TempDir::new().unwrap();
        let users_path = temp_dir.path().join("users.csv");
        let appointments_path = temp_dir.path().join("appointments.csv");

        let mut registry = Registry::new();
        registry
            .add_user("Test", "User", "1990-05-21", "2010-05-21")
            .unwrap();
        registry.save(&users_path, &appointments_path).unwrap();

        // datetime field missing its time part
        let mut content = std::fs::read_to_string(&appointments_path).unwrap();
        content.push_str("Test,User,Toyota Corolla,2030-01-01\n");
        std::fs::write(&appointments_path, content).unwrap();

        let mut reloaded = Registry::new();
        let err = reloaded.load(&users_path, &appointments_path).unwrap_err();
        assert!(matches!(err, RentalError::Format { .. }));
        // users survived the aborted appointment pass
        assert_eq!(reloaded.users().len(), 1);
        assert!(reloaded.appointments().is_empty());
    }

    #[test]
    fn test_load_revalidates_user_rows() {
        let temp_dir = TempDir::new().unwrap();
        let users_path = temp_dir.path().join("users.csv");
        let appointments_path = temp_dir.path().join("appointments.csv");

        let mut registry = Registry::new();
        registry.save(&users_path, &appointments_path).unwrap();

        let mut content = std::fs::read_to_string(&users_path).unwrap();
        content.push_str("Test,User,1990-05-21,1980-01-01\n");
        std::fs::write(&users_path, content).unwrap();

        let mut reloaded = Registry::new();
        let err = reloaded.load(&users_path, &appointments_path).unwrap_err();
        assert!(matches!(err, RentalError::LicenseBeforeBirth { .. }));
    }
}
