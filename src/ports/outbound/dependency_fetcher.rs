use crate::graph_generation::domain::DependencyReport;
use crate::shared::Result;

/// DependencyFetcher port for obtaining a nested dependency report
pub trait DependencyFetcher {
    /// Fetches the dependency report for `package_name`
    ///
    /// `max_depth` is handed to the underlying tool as is; the report is
    /// trusted to respect it.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The listing tool cannot be found (`ToolNotFound`)
    /// - The listing tool exits with a non-zero status (`FetchProcessError`)
    /// - Its output is not a valid report (`ReportParseError`)
    fn fetch_dependencies(&self, package_name: &str, max_depth: u32) -> Result<DependencyReport>;
}
