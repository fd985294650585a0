/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console).
pub mod command_runner;
pub mod config_reader;
pub mod dependency_fetcher;
pub mod diagram_renderer;
pub mod diagram_writer;
pub mod progress_reporter;

pub use command_runner::{CommandOutput, CommandRunner};
pub use config_reader::ConfigReader;
pub use dependency_fetcher::DependencyFetcher;
pub use diagram_renderer::DiagramRenderer;
pub use diagram_writer::DiagramWriter;
pub use progress_reporter::ProgressReporter;
