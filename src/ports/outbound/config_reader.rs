use crate::config::ConfigFile;
use crate::shared::Result;
use std::path::Path;

/// ConfigReader port for loading the tool configuration
pub trait ConfigReader {
    /// Reads and parses the configuration file at `path`
    ///
    /// No required-key validation happens here; lookups are done when the
    /// file is resolved into settings.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The content is not a valid JSON config object (`ConfigParseError`)
    fn read_config(&self, path: &Path) -> Result<ConfigFile>;
}
