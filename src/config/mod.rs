pub mod file;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "wheelbook")]
#[command(about = "A rental desk for driving appointments, backed by CSV files")]
pub struct CliConfig {
    #[arg(long, default_value = "users.csv")]
    pub users_file: String,

    #[arg(long, default_value = "appointments.csv")]
    pub appointments_file: String,

    #[arg(long, help = "TOML file overriding the storage settings")]
    pub config: Option<String>,

    #[arg(long, help = "Reload existing CSV files before the session")]
    pub resume: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn users_file(&self) -> &str {
        &self.users_file
    }

    fn appointments_file(&self) -> &str {
        &self.appointments_file
    }

    fn resume(&self) -> bool {
        self.resume
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("users_file", &self.users_file)?;
        validation::validate_file_extension("users_file", &self.users_file, &["csv"])?;
        validation::validate_path("appointments_file", &self.appointments_file)?;
        validation::validate_file_extension(
            "appointments_file",
            &self.appointments_file,
            &["csv"],
        )?;
        Ok(())
    }
}
