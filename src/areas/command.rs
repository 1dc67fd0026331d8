//! External git process boundary
//!
//! Everything the survey learns from git goes through [`CommandRunner`]: run a
//! program with some arguments inside a directory and hand back the exit status
//! together with the raw stdout bytes. Callers never look at stderr.

use derive_new::new;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Default program used when no override is configured
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Result of a finished external command
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandOutput {
    /// Whether the process exited with a zero status
    pub success: bool,
    /// Raw stdout bytes, untouched
    pub stdout: Vec<u8>,
}

/// Capability to run a version-control command in a working directory
///
/// An `Err` means the process could not be spawned at all. Every caller treats
/// it the same way as a non-zero exit.
pub trait CommandRunner {
    fn run(&self, dir: &Path, args: &[&str]) -> std::io::Result<CommandOutput>;
}

/// Runs the real git executable
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: OsString,
}

impl GitCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        GitCommand {
            program: program.into(),
        }
    }
}

impl CommandRunner for GitCommand {
    fn run(&self, dir: &Path, args: &[&str]) -> std::io::Result<CommandOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            // keep `status` from refreshing the index on disk
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        tracing::trace!(
            dir = %dir.display(),
            args = ?args,
            status = ?output.status.code(),
            stdout_len = output.stdout.len(),
            "ran git command"
        );

        Ok(CommandOutput::new(output.status.success(), output.stdout))
    }
}
