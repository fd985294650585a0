use std::collections::{BTreeMap, BTreeSet};

/// Direct-edge adjacency derived from a [`DependencyReport`].
///
/// Maps a package name to the set of its sub-dependency names. Keys are
/// unique and duplicate edges collapse. Ordered collections keep iteration
/// stable between runs, although callers should not rely on any particular
/// order.
///
/// [`DependencyReport`]: super::DependencyReport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatDependencyMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl FlatDependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dependency set of `package`, replacing any previous entry
    pub fn insert(&mut self, package: String, dependencies: BTreeSet<String>) {
        self.entries.insert(package, dependencies);
    }

    pub fn get(&self, package: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(package)
    }

    pub fn contains_package(&self, package: &str) -> bool {
        self.entries.contains_key(package)
    }

    pub fn package_names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Every (parent, child) pair
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(parent, children)| {
            children
                .iter()
                .map(move |child| (parent.as_str(), child.as_str()))
        })
    }

    pub fn package_count(&self) -> usize {
        self.entries.len()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, D, S> FromIterator<(P, D)> for FlatDependencyMap
where
    P: Into<String>,
    D: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, D)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(package, deps)| {
                (
                    package.into(),
                    deps.into_iter().map(Into::into).collect::<BTreeSet<_>>(),
                )
            })
            .collect();
        Self { entries }
    }
}
