use crate::graph_generation::domain::DependencyReport;
use crate::ports::outbound::{CommandRunner, DependencyFetcher};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::io;

/// npm executable name; Windows ships it as a `.cmd` shim
#[cfg(windows)]
pub const NPM_PROGRAM: &str = "npm.cmd";
#[cfg(not(windows))]
pub const NPM_PROGRAM: &str = "npm";

/// NpmDependencyFetcher adapter running `npm list --depth <n> --json`
///
/// The command runs in the current working directory, so the listed project
/// is the one the tool is started from.
pub struct NpmDependencyFetcher<R> {
    runner: R,
}

impl<R: CommandRunner> NpmDependencyFetcher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    fn list_args(max_depth: u32) -> Vec<String> {
        vec![
            "list".to_string(),
            "--depth".to_string(),
            max_depth.to_string(),
            "--json".to_string(),
        ]
    }
}

impl<R: CommandRunner> DependencyFetcher for NpmDependencyFetcher<R> {
    fn fetch_dependencies(&self, package_name: &str, max_depth: u32) -> Result<DependencyReport> {
        let args = Self::list_args(max_depth);

        let output = match self.runner.run(NPM_PROGRAM, &args) {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DepVizError::ToolNotFound {
                    tool: NPM_PROGRAM.to_string(),
                    hint: "Install Node.js (it ships with npm) and make sure npm is on your PATH".to_string(),
                }
                .into());
            }
            Err(e) => anyhow::bail!("Failed to run {}: {}", NPM_PROGRAM, e),
        };

        if !output.success() {
            return Err(DepVizError::FetchProcessError {
                package: package_name.to_string(),
                command: format!("{} {}", NPM_PROGRAM, args.join(" ")),
                status: output.status_description(),
                stderr: output.stderr.trim().to_string(),
            }
            .into());
        }

        DependencyReport::from_json(&output.stdout).map_err(|e| {
            DepVizError::ReportParseError {
                details: e.to_string(),
            }
            .into()
        })
    }
}
