pub mod dependency_report;
pub mod diagram_text;
pub mod flat_dependency_map;

pub use dependency_report::DependencyReport;
pub use diagram_text::DiagramText;
pub use flat_dependency_map::FlatDependencyMap;
