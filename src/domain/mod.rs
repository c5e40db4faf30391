pub mod model;
pub mod ports;
pub mod temporal;

pub use model::{Appointment, LicensedUser, Person};
pub use ports::ConfigProvider;
