//! Top-level subcommand orchestration (`create-service`, `create-socket`).

pub mod create_service;
pub mod create_socket;

use anyhow::Result;

use crate::exec::SystemRunner;
use crate::logging;
use crate::schema::UnitKind;
use crate::writer::{self, UnitScope};

/// Map the `--user` flag to the unit scope.
const fn scope_for(user: bool) -> UnitScope {
    if user { UnitScope::User } else { UnitScope::System }
}

/// Write the rendered document, or log it instead when `dry_run` is set.
///
/// The dry-run path performs no filesystem mutation and no privilege
/// check, so it works for system-scope units as an unprivileged user.
fn install_or_preview(
    kind: UnitKind,
    name: &str,
    scope: UnitScope,
    content: &str,
    dry_run: bool,
) -> Result<()> {
    let file_name = kind.file_name(name);

    if dry_run {
        logging::dry_run(&format!("would create {file_name}:"));
        for line in content.lines() {
            tracing::info!("{line}");
        }
        return Ok(());
    }

    logging::stage(&format!("Creating {kind} unit"));
    let path = writer::install(scope, &file_name, content, &SystemRunner)?;
    report_created(kind, name, scope, &path.display().to_string());
    Ok(())
}

/// Log the created path and the follow-up `systemctl` commands, adjusted
/// to scope.
fn report_created(kind: UnitKind, name: &str, scope: UnitScope, path: &str) {
    let user_option = match scope {
        UnitScope::User => " --user",
        UnitScope::System => "",
    };
    let sudo_prefix = match scope {
        UnitScope::User => "",
        UnitScope::System => "sudo ",
    };

    tracing::info!("Created {kind} file at: {path}");
    tracing::info!("");
    tracing::info!("The following commands may be handy:");
    tracing::info!(
        "{sudo_prefix}systemctl{user_option} daemon-reload # Notify systemd a new unit file exists"
    );
    if kind == UnitKind::Service {
        tracing::info!("{sudo_prefix}systemctl{user_option} start {name}  # Start the service");
        tracing::info!(
            "{sudo_prefix}systemctl{user_option} status {name} # Check the service status"
        );
        tracing::info!(
            "{sudo_prefix}systemctl{user_option} enable {name} # Automatically start the service"
        );
    }
}
