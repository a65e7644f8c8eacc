//! The `create-socket` subcommand.

use anyhow::Result;

use super::{install_or_preview, scope_for};
use crate::cli::SocketOpts;
use crate::document;
use crate::prereq;
use crate::resolve::Substitutions;
use crate::schema::UnitKind;
use crate::writer::UnitScope;

/// Run the `create-socket` command.
///
/// Only the unit name is gated; `ListenStream` is marked required in help
/// output but has no executable to resolve, so its absence simply leaves
/// the key out of the rendered document.
///
/// # Errors
///
/// Returns an error if the name is missing, the root prerequisite is not
/// met, or the unit file cannot be created.
pub fn run(opts: &SocketOpts, dry_run: bool) -> Result<()> {
    let args = opts.argument_set();
    let name = prereq::require_option(&args, "name")?;

    let scope = scope_for(opts.common.user);
    if scope == UnitScope::System && !dry_run {
        prereq::ensure_root()?;
    }

    let mut substitutions = Substitutions::new();
    substitutions.insert("%unitname%", &name);

    let content = document::build(UnitKind::Socket.options(), &args, &substitutions);
    install_or_preview(UnitKind::Socket, &name, scope, &content, dry_run)
}
