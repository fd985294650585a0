use crate::graph_generation::domain::DiagramText;
use crate::ports::outbound::DiagramWriter;
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// FileSystemWriter adapter for writing diagram files
///
/// Implements the DiagramWriter port. Existing files are overwritten
/// without warning; a symlinked path writes through to its target.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(DepVizError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramWriter for FileSystemWriter {
    fn write_diagram(&self, path: &Path, diagram: &DiagramText) -> Result<()> {
        self.validate_parent_directory(path)?;

        let write_error = |e: std::io::Error| DepVizError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        };

        // The handle is dropped (and closed) at the end of this block
        {
            let mut file = File::create(path).map_err(write_error)?;
            file.write_all(diagram.as_str().as_bytes())
                .map_err(write_error)?;
            file.flush().map_err(write_error)?;
        }

        Ok(())
    }
}
