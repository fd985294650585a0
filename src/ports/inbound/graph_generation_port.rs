use crate::application::dto::{GraphRequest, GraphResponse};
use crate::shared::Result;

/// GraphGenerationPort - Inbound port for the dependency graph use case
///
/// This is the interface the CLI drives. One call runs the whole pipeline:
/// load config, fetch the report, flatten it, write and render the diagram.
pub trait GraphGenerationPort {
    /// Generates a dependency diagram as described by the request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config file is missing, malformed or lacks a required key
    /// - The dependency listing command cannot be run or fails
    /// - The diagram file cannot be written
    /// - The renderer cannot be found or fails (the diagram file is kept)
    fn generate_graph(&self, request: GraphRequest) -> Result<GraphResponse>;
}
