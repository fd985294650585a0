/// Process adapters wrapping external command-line tools
mod npm_dependency_fetcher;
mod plantuml_renderer;
mod system_command_runner;

pub use npm_dependency_fetcher::{NpmDependencyFetcher, NPM_PROGRAM};
pub use plantuml_renderer::{PlantUmlRenderer, JAVA_PROGRAM};
pub use system_command_runner::SystemCommandRunner;
