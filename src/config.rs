/// Configuration for both utilities
///
/// Every field defaults to the embedded constants in [`crate::core::defaults`],
/// so an empty JSON object (or no file at all) reproduces a bare run.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::defaults;
use crate::error::{Result, SetupError};
use crate::utils::file_utils::read_text_file;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Settings for the setup script concatenator
    pub setup: ConcatSettings,
    /// Settings for the credential updater
    pub credentials: CredentialSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatSettings {
    /// SQL fragments, in the order they must run
    pub files: Vec<String>,
    /// Aggregate script path
    pub output: String,
}

impl Default for ConcatSettings {
    fn default() -> Self {
        Self {
            files: defaults::owned_list(defaults::SQL_FILES),
            output: defaults::OUTPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialSettings {
    pub new_url: String,
    pub new_key: String,
    pub old_url: String,
    /// Regular expression matching the key being replaced
    pub old_key_pattern: String,
    /// Source files rewritten in place
    pub files: Vec<String>,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            new_url: defaults::NEW_SUPABASE_URL.to_string(),
            new_key: defaults::NEW_SUPABASE_KEY.to_string(),
            old_url: defaults::OLD_SUPABASE_URL.to_string(),
            old_key_pattern: defaults::OLD_SUPABASE_KEY_PATTERN.to_string(),
            files: defaults::owned_list(defaults::FILES_TO_UPDATE),
        }
    }
}

/// Load configuration from file if provided
///
/// A path that cannot be read or parsed is an error; the embedded defaults
/// are only used when no path is given.
pub fn load_config(config_path: Option<&Path>) -> Result<SetupConfig> {
    let path = match config_path {
        Some(path) => path,
        None => return Ok(SetupConfig::default()),
    };

    let config_str = read_text_file(path)?;
    let config = serde_json::from_str(&config_str).map_err(|source| SetupError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded configuration from {}", path.display());

    Ok(config)
}
