//! Domain-specific error types for the unit file generator.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors, one enum per concern, and
//! command handlers at the CLI boundary convert them to
//! [`anyhow::Error`] via the standard `?` operator:
//!
//! ```text
//! OptionError — missing required command-line options
//! PrereqError — privilege and executable-lookup failures
//! WriteError  — unit file creation failures
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from the required-option gate.
#[derive(Error, Debug)]
pub enum OptionError {
    /// A required option has no user-supplied value. Defaults do not count:
    /// the gate checks what the caller actually typed.
    #[error("Missing required option: --{0}")]
    MissingRequiredOption(String),
}

/// Errors that arise from prerequisite checks performed before any file I/O.
#[derive(Error, Debug)]
pub enum PrereqError {
    /// Creating a system-scope unit requires an effective uid of 0.
    #[error("This command needs root. Please run it with '{hint}'.")]
    NotRoot {
        /// Command prefix the user should rerun with (e.g. `"sudo"`).
        hint: String,
    },

    /// The executable named by the caller is neither an existing path nor
    /// findable on `PATH`.
    #[error("Cannot find '{0}'")]
    ProgramNotFound(String),
}

/// Errors that arise while creating the unit file on disk.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The install directory for the requested scope could not be
    /// resolved, before any path was formed or file touched.
    #[error("Cannot determine the unit directory: {source}")]
    UnitDirUnavailable {
        /// Underlying lookup failure.
        source: std::io::Error,
    },

    /// The destination path already exists. Reported distinctly from
    /// generic I/O errors: the operation is idempotent-unsafe, not
    /// environmentally broken.
    #[error("A unit file already exists at {}", .0.display())]
    TargetAlreadyExists(PathBuf),

    /// Fixing ownership or permissions of a system-scope unit file failed.
    /// The partially created file has already been cleaned up.
    #[error("Failed to set permissions and ownership of {}", .0.display())]
    PrivilegedSetupFailed(PathBuf),

    /// Any other filesystem failure.
    #[error("IO error writing {path}: {source}")]
    Io {
        /// Path of the file being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl WriteError {
    /// Classify an I/O error for `path`: `AlreadyExists` becomes the
    /// distinct [`WriteError::TargetAlreadyExists`], everything else is
    /// wrapped with the path for context.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            Self::TargetAlreadyExists(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
