use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Nested dependency report as emitted by `npm list --json`.
///
/// The root and every dependency node share this shape: a node may carry its
/// own `dependencies` map, which makes the type recursive. Fields the tool
/// does not interpret (`resolved`, `overridden`, `problems`, ...) are kept in
/// `other_fields` so that an empty report can be told apart from a report
/// that merely has no dependencies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DependencyReport {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, DependencyReport>>,
    #[serde(flatten)]
    pub other_fields: HashMap<String, serde_json::Value>,
}

impl DependencyReport {
    /// Parses a report from the JSON text printed by the package manager
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// A report with no fields at all (`{}`)
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.version.is_none()
            && self.dependencies.is_none()
            && self.other_fields.is_empty()
    }

    pub fn has_dependencies_field(&self) -> bool {
        self.dependencies.is_some()
    }

    /// Top-level dependency entries, in name order
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &DependencyReport)> {
        self.dependencies
            .iter()
            .flat_map(|deps| deps.iter().map(|(name, node)| (name.as_str(), node)))
    }

    pub fn direct_dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, BTreeMap::len)
    }
}
