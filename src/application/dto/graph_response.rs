use crate::config::GraphSettings;
use crate::graph_generation::domain::DiagramText;
use std::path::PathBuf;

/// GraphResponse - Response DTO from the dependency graph use case
#[derive(Debug, Clone)]
pub struct GraphResponse {
    /// Settings the run was performed with
    pub settings: GraphSettings,
    /// The diagram text that was written
    pub diagram: DiagramText,
    /// Where the diagram text was written
    pub diagram_path: PathBuf,
    /// Image produced by the renderer; `None` when rendering was skipped
    pub image_path: Option<PathBuf>,
    /// Number of packages in the flattened map
    pub package_count: usize,
    /// Number of edges in the diagram
    pub edge_count: usize,
}
