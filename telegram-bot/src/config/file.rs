//! Legacy JSON config file (`{"telegram_token": "..."}`).

use serde::Deserialize;
use std::path::Path;

use crate::core::{BotError, Result};

/// Settings read from a JSON config file. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub telegram_token: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            BotError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }
}
