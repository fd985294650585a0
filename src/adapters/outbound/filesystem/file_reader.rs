use crate::config::ConfigFile;
use crate::ports::outbound::ConfigReader;
use crate::shared::error::DepVizError;
use crate::shared::security::validate_readable_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading files from the file system
///
/// Implements the ConfigReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after rejecting non-regular and oversized files.
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_readable_file(path, file_type)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigReader for FileSystemReader {
    fn read_config(&self, path: &Path) -> Result<ConfigFile> {
        if !path.exists() {
            return Err(DepVizError::ConfigNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "config file")?;
        ConfigFile::parse(&content, path)
    }
}
