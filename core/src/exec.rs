//! Shell command execution for the external FSL/FreeSurfer tools

use crate::error::{QcError, Result};
use log::{debug, error, info};
use std::path::Path;
use std::process::Command;

/// Runs a shell command line and returns its standard output
pub trait CommandRunner {
    /// Executes `command`
    ///
    /// # Errors
    ///
    /// Returns [`QcError::CommandFailed`] when the command writes to its
    /// error stream, or an I/O error when it cannot be spawned.
    fn run(&self, command: &str) -> Result<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &str) -> Result<String> {
        (**self).run(command)
    }
}

/// Runs commands through `sh -c`, blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        debug!("{}", command);

        let output = Command::new("sh").arg("-c").arg(command).output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !stderr.trim().is_empty() {
            error!("{}", stderr.trim_end());
            return Err(QcError::CommandFailed {
                command: command.to_string(),
                stderr,
            });
        }
        if !stdout.is_empty() {
            info!("{}", stdout.trim_end());
        }

        Ok(stdout)
    }
}

/// Quotes a path as a single shell word
///
/// # Errors
///
/// Returns [`QcError::UnquotablePath`] when the path contains a nul byte.
pub fn quote_path(path: &Path) -> Result<String> {
    quote_word(&path.to_string_lossy())
        .map_err(|_| QcError::UnquotablePath(path.to_path_buf()))
}

/// Quotes arbitrary text as a single shell word
pub fn quote_word(word: &str) -> std::result::Result<String, shlex::QuoteError> {
    shlex::try_quote(word).map(|quoted| quoted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_shell_runner_stdout() {
        let out = ShellRunner::new().run("echo T1w,1,2").unwrap();
        assert_eq!(out, "T1w,1,2\n");
    }

    #[test]
    fn test_shell_runner_stderr_is_failure() {
        let err = ShellRunner::new().run("echo oops 1>&2").unwrap_err();
        match err {
            QcError::CommandFailed { command, stderr } => {
                assert_eq!(command, "echo oops 1>&2");
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_quoted_path_is_one_word() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("touched");
        let path = temp_dir
            .path()
            .join(format!("HCP01 T1w_MPR1;touch {};.nii", marker.display()));

        let cmd = format!("printf %s {}", quote_path(&path).unwrap());
        let out = ShellRunner::new().run(&cmd).unwrap();

        assert_eq!(out, path.to_string_lossy());
        assert!(!marker.exists());
    }

    #[test]
    fn test_quote_path_rejects_nul() {
        let path = Path::new("a\0b.nii");
        assert!(matches!(
            quote_path(path),
            Err(QcError::UnquotablePath(_))
        ));
    }
}
