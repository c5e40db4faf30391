use crate::app::catalog::{VehicleCatalog, VehicleClass};
use crate::core::registry::Registry;
use crate::domain::model::{Appointment, LicensedUser};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::io::{BufRead, ErrorKind, Write};
use std::rc::Rc;

/// Line-oriented prompt loop over arbitrary streams, so tests can drive
/// it with in-memory buffers. Recoverable validation failures re-prompt;
/// stream errors and end of input abort the session.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "input stream closed").into());
        }
        Ok(line.trim().to_string())
    }

    fn prompt_non_empty(&mut self, field: &'static str, label: &str) -> Result<String> {
        loop {
            let value = self.prompt(label)?;
            match validate_non_empty_string(field, &value) {
                Ok(()) => return Ok(value),
                Err(err) => writeln!(self.output, "Invalid input: {}", err)?,
            }
        }
    }

    pub fn register_user(&mut self, registry: &mut Registry) -> Result<Rc<LicensedUser>> {
        let first_name = self.prompt_non_empty("first name", "First Name: ")?;
        let last_name = self.prompt_non_empty("last name", "Last Name: ")?;

        loop {
            let birth_date = self.prompt("Birth Date (YYYY-MM-DD): ")?;
            let license_date = self.prompt("License Date (YYYY-MM-DD): ")?;
            match registry.add_user(&first_name, &last_name, &birth_date, &license_date) {
                Ok(user) => return Ok(user),
                Err(err) if err.is_recoverable() => {
                    writeln!(self.output, "Invalid input: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn choose_vehicle(&mut self, catalog: &VehicleCatalog) -> Result<String> {
        loop {
            let choice = self.prompt("Select vehicle type (1: Car, 2: Motorcycle): ")?;
            let class = match choice.as_str() {
                "1" => VehicleClass::Car,
                "2" => VehicleClass::Motorcycle,
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };

            let brand_menu = catalog.brands(class).join(", ");
            let brand =
                self.prompt(&format!("Select {} brand ({}): ", class.noun(), brand_menu))?;
            let model_menu = match catalog.models(class, &brand) {
                Some(models) => models.join(", "),
                None => {
                    writeln!(self.output, "Invalid brand. Please try again.")?;
                    continue;
                }
            };

            let model = self.prompt(&format!("Select model ({}): ", model_menu))?;
            match catalog.descriptor(class, &brand, &model) {
                Some(descriptor) => return Ok(descriptor),
                None => writeln!(self.output, "Invalid model. Please try again.")?,
            }
        }
    }

    pub fn book_appointment(
        &mut self,
        registry: &mut Registry,
        user: &Rc<LicensedUser>,
        vehicle: &str,
    ) -> Result<Appointment> {
        loop {
            let date = self.prompt("Appointment Date (YYYY-MM-DD): ")?;
            let time = self.prompt("Appointment Time (HH:MM): ")?;
            match registry.add_appointment(user, vehicle, &date, &time) {
                Ok(appointment) => return Ok(appointment),
                Err(err) if err.is_recoverable() => {
                    writeln!(self.output, "Invalid input: {}", err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// register → select vehicle → book, echoing the booked slot.
    pub fn run(
        &mut self,
        registry: &mut Registry,
        catalog: &VehicleCatalog,
    ) -> Result<Appointment> {
        let user = self.register_user(registry)?;
        let vehicle = self.choose_vehicle(catalog)?;
        let appointment = self.book_appointment(registry, &user, &vehicle)?;
        writeln!(self.output, "{}", appointment)?;
        Ok(appointment)
    }
}
