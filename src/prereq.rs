//! Prerequisite gates run by commands before any resolution or file I/O.
//!
//! These checks fail fast: the first unmet prerequisite aborts the whole
//! invocation with exit code 1, before anything is written to disk.

use std::path::{Path, PathBuf};

use crate::error::{OptionError, PrereqError};
use crate::resolve::ArgumentSet;

/// Check that the caller actually supplied `name` on the command line.
///
/// Schema defaults do not satisfy this gate; it exists for the one or two
/// options that gate the whole operation (the unit name, the service
/// executable).
///
/// # Errors
///
/// Returns [`OptionError::MissingRequiredOption`] naming the flag.
pub fn require_option(args: &ArgumentSet, name: &str) -> Result<String, OptionError> {
    args.get_single(name)
        .map(ToString::to_string)
        .ok_or_else(|| OptionError::MissingRequiredOption(name.to_string()))
}

/// Whether the current process runs with an effective uid of 0.
#[must_use]
pub fn running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Ensure the process runs as root, as required for system-scope units.
///
/// # Errors
///
/// Returns [`PrereqError::NotRoot`] with a rerun hint (`sudo`, extended
/// with an `scl enable` prefix when software collections are active).
pub fn ensure_root() -> Result<(), PrereqError> {
    if running_as_root() {
        Ok(())
    } else {
        Err(PrereqError::NotRoot {
            hint: sudo_hint(software_collections().as_deref()),
        })
    }
}

/// The `X_SCLS` environment variable, naming active software collections.
#[must_use]
pub fn software_collections() -> Option<String> {
    std::env::var("X_SCLS").ok().filter(|v| !v.is_empty())
}

fn sudo_hint(scls: Option<&str>) -> String {
    match scls {
        Some(scls) => format!("sudo scl enable {scls} --"),
        None => "sudo".to_string(),
    }
}

/// A user-supplied executable resolved into an absolute invocation.
#[derive(Debug, Clone)]
pub struct ResolvedApplication {
    /// Full invocation string to place in `ExecStart`. Usually the absolute
    /// executable path, wrapped in `scl enable <collections> --` when
    /// software collections are active.
    pub exec_start: String,
    /// Directory containing the resolved executable; feeds the
    /// `%execstartdir%` placeholder.
    pub exec_start_dir: PathBuf,
}

/// Resolve the executable the caller named into an absolute invocation.
///
/// An existing file is made absolute as-is; anything else is looked up on
/// `PATH`. Reads `X_SCLS` to decide on software-collection wrapping.
///
/// # Errors
///
/// Returns [`PrereqError::ProgramNotFound`] if the program is neither an
/// existing path nor on `PATH`.
pub fn resolve_application(program: &str) -> Result<ResolvedApplication, PrereqError> {
    resolve_application_with(program, software_collections().as_deref())
}

fn resolve_application_with(
    program: &str,
    scls: Option<&str>,
) -> Result<ResolvedApplication, PrereqError> {
    let path = locate(program)?;
    let exec_start_dir = path
        .parent()
        .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);

    let mut exec_start = path.display().to_string();
    if let Some(scls) = scls
        && let Ok(scl_path) = which::which("scl")
    {
        exec_start = format!("{} enable {scls} -- {exec_start}", scl_path.display());
    }

    Ok(ResolvedApplication {
        exec_start,
        exec_start_dir,
    })
}

/// Find the absolute path of `program`: existing files are absolutized,
/// anything else is searched on `PATH`. A directory never counts as the
/// executable, even if its path matches exactly.
fn locate(program: &str) -> Result<PathBuf, PrereqError> {
    let candidate = Path::new(program);
    if candidate.is_file() {
        return std::path::absolute(candidate)
            .map_err(|_| PrereqError::ProgramNotFound(program.to_string()));
    }
    which::which(program).map_err(|_| PrereqError::ProgramNotFound(program.to_string()))
}
