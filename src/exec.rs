//! Process execution helpers.
//!
//! External tools (`chmod`, `chown`) are invoked through the
//! [`CommandRunner`] trait so the privileged file-creation path can be
//! unit-tested without root. Production code uses [`SystemRunner`]; tests
//! use the scripted [`MockRunner`].

use std::process::{Command, Output};

use anyhow::{Context as _, Result};

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Raw exit code, if the process exited normally.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Abstraction over external command invocation.
///
/// A non-zero exit is not an `Err`: it is reported through
/// [`ExecResult::success`] so callers can surface tool failures as domain
/// errors. `Err` means the program could not be spawned at all.
pub trait CommandRunner: std::fmt::Debug {
    /// Run `program` with `args` and capture its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be started.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult>;
}

/// Production [`CommandRunner`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(output))
    }
}

/// Scripted [`CommandRunner`] for unit tests.
///
/// Records every invocation and reports success or failure per program
/// name, defaulting to success.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRunner {
    failing: Vec<String>,
    unspawnable: Vec<String>,
    calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockRunner {
    /// Mock where every command succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` exit non-zero.
    #[must_use]
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.push(program.to_string());
        self
    }

    /// Make `program` fail to spawn entirely.
    #[must_use]
    pub fn unspawnable(mut self, program: &str) -> Self {
        self.unspawnable.push(program.to_string());
        self
    }

    /// Command lines recorded so far, as `"program arg1 arg2"` strings.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(format!("{program} {}", args.join(" ")));
        if self.unspawnable.iter().any(|p| p == program) {
            anyhow::bail!("failed to execute: {program}");
        }
        let success = !self.failing.iter().any(|p| p == program);
        Ok(ExecResult {
            stdout: String::new(),
            stderr: if success {
                String::new()
            } else {
                format!("{program}: scripted failure")
            },
            success,
            code: Some(i32::from(!success)),
        })
    }
}
