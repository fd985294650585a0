use crate::graph_generation::domain::{DependencyReport, FlatDependencyMap};
use std::collections::BTreeSet;

/// DependencyFlattener service turning a nested report into direct edges
///
/// Pure business logic with no I/O dependencies.
pub struct DependencyFlattener;

impl DependencyFlattener {
    /// Flattens a dependency report into a [`FlatDependencyMap`]
    ///
    /// Every top-level entry of `report.dependencies` becomes a key, even when
    /// it has no dependencies of its own. When an entry carries a nested
    /// report, that report is flattened recursively and only the *keys* of the
    /// result become the entry's edges, so each call contributes one hop.
    /// Deeper levels are walked but not kept.
    ///
    /// The walk has no cycle detection; `npm list --depth` bounds the input.
    ///
    /// # Returns
    /// An empty map when the report has no `dependencies` field
    pub fn flatten(report: &DependencyReport) -> FlatDependencyMap {
        let mut flat = FlatDependencyMap::new();

        for (name, node) in report.dependencies() {
            let mut children = BTreeSet::new();
            if node.has_dependencies_field() {
                let nested = Self::flatten(node);
                children.extend(nested.package_names().cloned());
            }
            flat.insert(name.to_string(), children);
        }

        flat
    }
}
