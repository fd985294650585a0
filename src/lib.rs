//! npm-depviz - dependency graph visualizer for npm projects
//!
//! This library lists a project's dependencies with `npm list --json`,
//! flattens the nested report into direct edges and writes them as a
//! PlantUML diagram, which can then be rendered with `plantuml.jar`.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_generation`): Dependency report model and pure transformations
//! - **Application Layer** (`application`): The graph generation use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, process and console implementations of ports
//! - **Shared** (`shared`): Error types and file-safety helpers
//!
//! # Example
//!
//! ```no_run
//! use npm_depviz::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateGraphUseCase::new(
//!     FileSystemReader::new(),
//!     NpmDependencyFetcher::new(SystemCommandRunner::new()),
//!     FileSystemWriter::new(),
//!     PlantUmlRenderer::new(SystemCommandRunner::new()),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = GraphRequest::new(PathBuf::from("config.json"), true);
//! let response = use_case.execute(request)?;
//! println!("{} edge(s) written to {}", response.edge_count, response.diagram_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod graph_generation;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::process::{
        NpmDependencyFetcher, PlantUmlRenderer, SystemCommandRunner,
    };
    pub use crate::application::dto::{GraphRequest, GraphResponse};
    pub use crate::application::use_cases::GenerateGraphUseCase;
    pub use crate::config::{ConfigFile, GraphSettings, DEFAULT_CONFIG_FILENAME};
    pub use crate::graph_generation::domain::{DependencyReport, DiagramText, FlatDependencyMap};
    pub use crate::graph_generation::services::{DependencyFlattener, PlantUmlGenerator};
    pub use crate::ports::inbound::GraphGenerationPort;
    pub use crate::ports::outbound::{
        CommandOutput, CommandRunner, ConfigReader, DependencyFetcher, DiagramRenderer,
        DiagramWriter, ProgressReporter,
    };
    pub use crate::shared::error::{DepVizError, ExitCode};
    pub use crate::shared::Result;
}
