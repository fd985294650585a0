use crate::graph_generation::domain::DiagramText;
use crate::shared::Result;
use std::path::Path;

/// DiagramWriter port for persisting generated diagram text
pub trait DiagramWriter {
    /// Writes `diagram` verbatim to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The path is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn write_diagram(&self, path: &Path, diagram: &DiagramText) -> Result<()>;
}
