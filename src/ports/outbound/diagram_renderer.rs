use crate::shared::Result;
use std::path::{Path, PathBuf};

/// DiagramRenderer port for turning a diagram file into an image
pub trait DiagramRenderer {
    /// Renders `diagram_path` with the renderer at `program_path`
    ///
    /// # Returns
    /// The path of the image the renderer is expected to have produced
    ///
    /// # Errors
    /// Returns an error if:
    /// - The renderer cannot be found (`RendererNotFound`)
    /// - The renderer exits with a non-zero status (`RenderProcessError`)
    fn render(&self, program_path: &Path, diagram_path: &Path) -> Result<PathBuf>;
}
