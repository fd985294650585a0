//! Configuration file support for npm-depviz.
//!
//! Provides the JSON schema of `config.json` and its resolution into the
//! settings a run needs. Reading the file from disk is done by the
//! filesystem adapter.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::DepVizError;
use crate::shared::Result;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILENAME: &str = "config.json";

/// Top-level configuration file schema.
///
/// Every key is optional at parse time; required keys are looked up by
/// [`ConfigFile::into_settings`].
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub max_depth: Option<u32>,
    pub output_file: Option<PathBuf>,
    pub visualization_program_path: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Resolved settings for one run, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSettings {
    pub package_name: String,
    pub max_depth: u32,
    pub output_file: PathBuf,
    pub visualization_program_path: PathBuf,
}

impl ConfigFile {
    /// Parses config JSON read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            DepVizError::ConfigParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Looks up every required key, failing on the first one that is missing.
    pub fn into_settings(self, path: &Path) -> Result<GraphSettings> {
        let missing = |key: &'static str| DepVizError::MissingConfigKey {
            key,
            path: path.to_path_buf(),
        };

        Ok(GraphSettings {
            package_name: self.package_name.ok_or_else(|| missing("package_name"))?,
            max_depth: self.max_depth.ok_or_else(|| missing("max_depth"))?,
            output_file: self.output_file.ok_or_else(|| missing("output_file"))?,
            visualization_program_path: self
                .visualization_program_path
                .ok_or_else(|| missing("visualization_program_path"))?,
        })
    }

    /// Unknown keys, sorted for stable warnings.
    pub fn unknown_field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.unknown_fields.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
