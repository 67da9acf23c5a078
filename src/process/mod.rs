//! Subprocess capability shared by the delegated summarizer and the session launcher.
//!
//! Both call sites go through [`ProcessRunner`]; they differ only in what they do with
//! a [`ProcessError`]. The summarizer treats it as a reason to fall back, the launcher
//! treats it as fatal.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// How the child's standard streams are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stdout is captured and returned; stdin is closed and stderr discarded
    Captured,
    /// All three streams are inherited from this process
    Inherited,
}

/// A fully described subprocess call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory override; `None` keeps the caller's directory
    pub cwd: Option<PathBuf>,
    pub stdio: StdioMode,
}

impl Invocation {
    pub fn new(program: impl Into<String>, stdio: StdioMode) -> Self {
        Self { program: program.into(), args: Vec::new(), cwd: None, stdio }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }
}

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {}", exit_description(.code))]
    NonZeroExit { program: String, code: Option<i32> },
    #[error("{program} produced output that is not valid UTF-8")]
    InvalidOutput { program: String },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Runs subprocesses synchronously
pub trait ProcessRunner {
    /// Run the invocation to completion
    ///
    /// Returns captured stdout for [`StdioMode::Captured`] and an empty string for
    /// [`StdioMode::Inherited`].
    fn run(&self, invocation: &Invocation) -> Result<String, ProcessError>;
}

/// [`ProcessRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<String, ProcessError> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }

        let spawn_error =
            |source| ProcessError::Spawn { program: invocation.program.clone(), source };

        match invocation.stdio {
            StdioMode::Captured => {
                let output = command
                    .stdin(Stdio::null())
                    .stderr(Stdio::null())
                    .output()
                    .map_err(spawn_error)?;
                if !output.status.success() {
                    return Err(ProcessError::NonZeroExit {
                        program: invocation.program.clone(),
                        code: output.status.code(),
                    });
                }
                String::from_utf8(output.stdout)
                    .map_err(|_| ProcessError::InvalidOutput { program: invocation.program.clone() })
            }
            StdioMode::Inherited => {
                let status = command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                if !status.success() {
                    return Err(ProcessError::NonZeroExit {
                        program: invocation.program.clone(),
                        code: status.code(),
                    });
                }
                Ok(String::new())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Records every invocation and replays queued results
    #[derive(Default)]
    pub struct FakeRunner {
        pub calls: RefCell<Vec<Invocation>>,
        responses: RefCell<VecDeque<Result<String, ProcessError>>>,
    }

    impl FakeRunner {
        pub fn returning(output: &str) -> Self {
            let runner = Self::default();
            runner.push(Ok(output.to_string()));
            runner
        }

        pub fn failing(error: ProcessError) -> Self {
            let runner = Self::default();
            runner.push(Err(error));
            runner
        }

        pub fn push(&self, response: Result<String, ProcessError>) {
            self.responses.borrow_mut().push_back(response);
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, invocation: &Invocation) -> Result<String, ProcessError> {
            self.calls.borrow_mut().push(invocation.clone());
            self.responses.borrow_mut().pop_front().unwrap_or_else(|| Ok(String::new()))
        }
    }
}
