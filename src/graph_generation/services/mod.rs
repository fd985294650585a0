mod dependency_flattener;
mod plantuml_generator;

pub use dependency_flattener::DependencyFlattener;
pub use plantuml_generator::PlantUmlGenerator;
