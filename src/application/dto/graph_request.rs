use crate::config::DEFAULT_CONFIG_FILENAME;
use std::path::PathBuf;

/// GraphRequest - Request DTO for the dependency graph use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    /// Path to the JSON config file
    pub config_path: PathBuf,
    /// Whether to invoke the renderer after writing the diagram text
    pub render: bool,
}

impl GraphRequest {
    pub fn new(config_path: PathBuf, render: bool) -> Self {
        Self {
            config_path,
            render,
        }
    }
}

impl Default for GraphRequest {
    /// `config.json` in the working directory, rendering enabled
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CONFIG_FILENAME), true)
    }
}
