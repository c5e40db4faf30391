use crate::config::CliConfig;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML overlay; every field is optional and only present
/// values override the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub storage: Option<StorageConfig>,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub users_file: Option<String>,
    pub appointments_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub resume: Option<bool>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply(&self, cli: &mut CliConfig) {
        if let Some(storage) = &self.storage {
            if let Some(users_file) = &storage.users_file {
                cli.users_file = users_file.clone();
            }
            if let Some(appointments_file) = &storage.appointments_file {
                cli.appointments_file = appointments_file.clone();
            }
        }
        if let Some(session) = &self.session {
            if let Some(resume) = session.resume {
                cli.resume = resume;
            }
        }
    }
}
