use crate::graph_generation::domain::{DiagramText, FlatDependencyMap};

const INDENT: &str = "    ";

/// Comment emitted in place of edges when there is nothing to draw
pub const EMPTY_GRAPH_COMMENT: &str = "' No dependencies to display";

/// PlantUmlGenerator service serializing a flat map into PlantUML text
pub struct PlantUmlGenerator;

impl PlantUmlGenerator {
    /// Generates the diagram text for `dependencies`
    ///
    /// One `"<parent>" --> "<child>"` line per edge. An empty map produces a
    /// single comment line instead. The markers are always present.
    pub fn generate(dependencies: &FlatDependencyMap) -> DiagramText {
        if dependencies.is_empty() {
            return DiagramText::from_body([format!("{}{}", INDENT, EMPTY_GRAPH_COMMENT)]);
        }

        DiagramText::from_body(dependencies.edges().map(|(parent, child)| {
            format!("{}{} --> {}", INDENT, quote(parent), quote(child))
        }))
    }
}

/// Wraps a package name in double quotes so scoped names (`@scope/pkg`)
/// survive PlantUML parsing. The name itself is emitted verbatim; npm
/// names never contain `"` or `\`.
fn quote(name: &str) -> String {
    format!("\"{}\"", name)
}
