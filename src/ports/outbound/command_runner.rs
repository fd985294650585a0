use std::io;

/// Captured result of a finished external process
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human-readable exit status for error messages
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// CommandRunner port for synchronous external process execution
///
/// This is the only process boundary of the tool. Implementations block
/// until the process exits and capture both output streams in full.
pub trait CommandRunner {
    /// Runs `program` with `args` and waits for it to exit
    ///
    /// # Errors
    /// Returns the spawn error unchanged, so callers can tell a missing
    /// executable (`io::ErrorKind::NotFound`) from other failures. A non-zero
    /// exit is not an error at this level.
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}
