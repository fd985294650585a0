use npm_depviz::prelude::*;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner answering per program name and recording every call
#[derive(Default, Clone)]
pub struct MockCommandRunner {
    responses: Arc<Mutex<HashMap<String, CommandOutput>>>,
    missing: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, program: &str, code: i32, stdout: &str, stderr: &str) -> Self {
        self.responses.lock().unwrap().insert(
            program.to_string(),
            CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn with_missing_program(self, program: &str) -> Self {
        self.missing.lock().unwrap().push(program.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn programs_called(&self) -> Vec<String> {
        self.get_calls().into_iter().map(|(program, _)| program).collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));

        if self.missing.lock().unwrap().iter().any(|p| p == program) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(program)
            .cloned()
            .unwrap_or_default())
    }
}
