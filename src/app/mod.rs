pub mod catalog;
pub mod session;

use crate::app::catalog::VehicleCatalog;
use crate::app::session::Session;
use crate::core::registry::Registry;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::Path;

/// One full desk shift: optionally reload what is on file, walk the
/// clerk through register → select vehicle → book, then persist.
pub fn run<C, R, W>(config: &C, registry: &mut Registry, input: R, output: W) -> Result<()>
where
    C: ConfigProvider,
    R: BufRead,
    W: Write,
{
    let users_path = Path::new(config.users_file());
    let appointments_path = Path::new(config.appointments_file());

    if config.resume() && users_path.exists() && appointments_path.exists() {
        registry.load(users_path, appointments_path)?;
        tracing::info!(
            "Resumed {} users and {} appointments from disk",
            registry.users().len(),
            registry.appointments().len()
        );
    }

    let catalog = VehicleCatalog::standard();
    let appointment = Session::new(input, output).run(registry, &catalog)?;
    tracing::debug!("Booked: {}", appointment);

    registry.save(users_path, appointments_path)?;
    Ok(())
}
