pub mod codec;
pub mod registry;

pub use crate::domain::model::{Appointment, LicensedUser, Person};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
pub use registry::Registry;
