use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Diagram text written (and rendered)
    Success = 0,
    /// Any failure of the pipeline (config, npm, file I/O, renderer)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for dependency graph generation.
///
/// Every variant is terminal for the run: nothing is retried and no stage
/// resumes after one of these is raised.
#[derive(Debug, Error)]
pub enum DepVizError {
    #[error("Config file not found: {path}\n\n💡 Hint: Create a config.json with package_name, max_depth, output_file and visualization_program_path, or pass --config <PATH>")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains a valid JSON object")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Missing required config key '{key}' in {path}\n\n💡 Hint: Add \"{key}\" to the config file")]
    MissingConfigKey { key: &'static str, path: PathBuf },

    #[error("Failed to list dependencies of '{package}': `{command}` failed ({status})\nDetails: {stderr}")]
    FetchProcessError {
        package: String,
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{tool}` was not found\n\n💡 Hint: {hint}")]
    ToolNotFound { tool: String, hint: String },

    #[error("Failed to parse dependency report\nDetails: {details}")]
    ReportParseError { details: String },

    #[error("Failed to obtain dependency data: the dependency report is empty")]
    EmptyDependencyReport,

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to render diagram: {diagram}\nStatus: {status}\nDetails: {stderr}")]
    RenderProcessError {
        diagram: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("Renderer not found: {program}\n\n💡 Hint: {hint}")]
    RendererNotFound { program: String, hint: String },
}
