//! Rename configuration loaded from a TOML file.
//!
//! Every field has a default, so kebabify works without a config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::exec::{CleanupMode, ExecuteOptions};
use crate::plan::scan::{Scanner, DEFAULT_OUTPUT_DIR};

/// Directory scanned when none is given on the command line.
pub const DEFAULT_SOURCE_DIR: &str = "Azure_Public_Service_Icons";

/// Top-level configuration.
///
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_read(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// A scanner mirroring into the configured output directory.
    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.general.output_dir.clone())
    }

    /// Executor options for this configuration.
    pub fn execute_options(&self, dry_run: bool) -> ExecuteOptions {
        ExecuteOptions {
            dry_run,
            cleanup: if self.cleanup.remove_empty_dirs {
                CleanupMode::Remove
            } else {
                CleanupMode::Inspect
            },
        }
    }
}

/// Where to read from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,
    /// Name of the sibling directory the normalised tree is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Post-rename cleanup of the original tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Delete original directories left empty after all files moved out.
    #[serde(default)]
    pub remove_empty_dirs: bool,
}

fn default_source_dir() -> String {
    DEFAULT_SOURCE_DIR.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}
