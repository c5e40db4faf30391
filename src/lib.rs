pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::catalog::{VehicleCatalog, VehicleClass};
pub use app::session::Session;
pub use config::file::FileConfig;
pub use config::CliConfig;
pub use crate::core::registry::Registry;
pub use domain::model::{Appointment, LicensedUser, Person};
pub use utils::error::{RentalError, Result};
