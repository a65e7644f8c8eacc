//! Unit file installation: scope-dependent paths and create-without-
//! overwrite semantics.
//!
//! System-scope units additionally get fixed ownership and permissions
//! before their content is written. That sequence is a scoped-resource
//! pattern: an empty placeholder file is created first, and a drop guard
//! deletes it again on every failure path, so no half-configured file is
//! ever left behind.

use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::exec::CommandRunner;

/// Directory for machine-wide units; writing here requires root.
pub const SYSTEM_UNIT_DIR: &str = "/etc/systemd/system";

/// Whether a unit is installed machine-wide or per-user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScope {
    /// Machine-wide unit under [`SYSTEM_UNIT_DIR`], privilege-gated.
    System,
    /// Per-user unit under `$XDG_CONFIG_HOME/systemd/user`.
    User,
}

impl UnitScope {
    /// Directory unit files of this scope are installed into.
    ///
    /// # Errors
    ///
    /// Fails for the user scope when neither `XDG_CONFIG_HOME` nor `HOME`
    /// is set.
    pub fn unit_dir(self) -> io::Result<PathBuf> {
        match self {
            Self::System => Ok(PathBuf::from(SYSTEM_UNIT_DIR)),
            Self::User => {
                let config_home = std::env::var("XDG_CONFIG_HOME").map(PathBuf::from).or_else(
                    |_| {
                        std::env::var("HOME")
                            .map(|home| PathBuf::from(home).join(".config"))
                            .map_err(|_| {
                                io::Error::new(
                                    io::ErrorKind::NotFound,
                                    "neither XDG_CONFIG_HOME nor HOME is set",
                                )
                            })
                    },
                )?;
                Ok(config_home.join("systemd").join("user"))
            }
        }
    }
}

/// Install a rendered unit document as `file_name` in the directory of
/// `scope`, returning the created path.
///
/// The user-scope directory is created if absent; the system directory is
/// expected to exist and system-scope files get their ownership and
/// permissions fixed through `runner` before content is written.
///
/// # Errors
///
/// Returns [`WriteError::UnitDirUnavailable`] when the scope's directory
/// cannot be resolved, [`WriteError::TargetAlreadyExists`] when the
/// destination path exists, [`WriteError::PrivilegedSetupFailed`] when
/// the system-scope fix-up fails (the placeholder file is removed
/// again), and [`WriteError::Io`] for any other filesystem failure.
pub fn install(
    scope: UnitScope,
    file_name: &str,
    content: &str,
    runner: &dyn CommandRunner,
) -> Result<PathBuf, WriteError> {
    let dir = scope
        .unit_dir()
        .map_err(|source| WriteError::UnitDirUnavailable { source })?;
    if scope == UnitScope::User {
        fs::create_dir_all(&dir).map_err(|e| WriteError::from_io(&dir, e))?;
    }
    let path = dir.join(file_name);
    match scope {
        UnitScope::System => create_privileged_unit_file(&path, content, runner)?,
        UnitScope::User => create_new_unit_file(&path, content)?,
    }
    Ok(path)
}

/// Create `path` exclusively and write `content` to it.
///
/// # Errors
///
/// Returns [`WriteError::TargetAlreadyExists`] when `path` exists, or
/// [`WriteError::Io`] for any other failure.
pub fn create_new_unit_file(path: &Path, content: &str) -> Result<(), WriteError> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| WriteError::from_io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| WriteError::from_io(path, e))
}

/// Create `path` exclusively for root, fix its mode and ownership through
/// external tools, then write `content`.
///
/// The empty placeholder created in the first step is deleted on every
/// subsequent failure; failures of that cleanup itself are swallowed since
/// the primary error dominates.
///
/// # Errors
///
/// Returns [`WriteError::TargetAlreadyExists`] when `path` exists,
/// [`WriteError::PrivilegedSetupFailed`] when `chmod`/`chown` fail, or
/// [`WriteError::Io`] for any other failure.
pub fn create_privileged_unit_file(
    path: &Path,
    content: &str,
    runner: &dyn CommandRunner,
) -> Result<(), WriteError> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| WriteError::from_io(path, e))?;
    let mut guard = PlaceholderGuard::new(path);

    let path_str = path.display().to_string();
    for (tool, arg) in [("chmod", "644"), ("chown", "root:root")] {
        let ok = runner
            .run(tool, &[arg, &path_str])
            .is_ok_and(|result| result.success);
        if !ok {
            return Err(WriteError::PrivilegedSetupFailed(path.to_path_buf()));
        }
    }

    fs::write(path, content).map_err(|e| WriteError::from_io(path, e))?;
    guard.disarm();
    Ok(())
}

/// Deletes the placeholder unit file on drop unless disarmed.
#[derive(Debug)]
struct PlaceholderGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> PlaceholderGuard<'a> {
    const fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PlaceholderGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            // Best effort: the primary error already dominates.
            let _ = fs::remove_file(self.path);
        }
    }
}
