//! The `create-service` subcommand.

use anyhow::Result;

use super::{install_or_preview, scope_for};
use crate::cli::ServiceOpts;
use crate::document;
use crate::logging;
use crate::prereq;
use crate::resolve::Substitutions;
use crate::schema::UnitKind;
use crate::writer::UnitScope;

/// Run the `create-service` command.
///
/// # Errors
///
/// Returns an error if a required option is missing, a prerequisite is
/// not met, or the unit file cannot be created.
pub fn run(opts: &ServiceOpts, dry_run: bool) -> Result<()> {
    let mut args = opts.argument_set();
    let name = prereq::require_option(&args, "name")?;
    let execstart = prereq::require_option(&args, "execstart")?;

    let scope = scope_for(opts.common.user);
    if scope == UnitScope::System && !dry_run {
        prereq::ensure_root()?;
    }

    logging::stage("Resolving executable");
    let app = prereq::resolve_application(&execstart)?;
    tracing::debug!("resolved ExecStart: {}", app.exec_start);

    // Replace the raw user value with the resolved invocation string.
    args.set("execstart", app.exec_start);

    let mut substitutions = Substitutions::new();
    substitutions.insert("%unitname%", &name);
    substitutions.insert("%execstartdir%", &app.exec_start_dir.display().to_string());

    let content = document::build(UnitKind::Service.options(), &args, &substitutions);
    install_or_preview(UnitKind::Service, &name, scope, &content, dry_run)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::unreachable)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser as _;

    fn service_opts(argv: &[&str]) -> ServiceOpts {
        let mut full = vec!["unitgen", "create-service"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Command::CreateService(opts) => opts,
            Command::CreateSocket(_) => unreachable!("parsed create-service"),
        }
    }

    #[test]
    fn missing_name_aborts_before_anything_else() {
        let opts = service_opts(&["--execstart", "/bin/true"]);
        let err = run(&opts, true).unwrap_err();
        assert_eq!(err.to_string(), "Missing required option: --name");
    }

    #[test]
    fn missing_execstart_aborts_before_rendering() {
        let opts = service_opts(&["--name", "web"]);
        let err = run(&opts, true).unwrap_err();
        assert_eq!(err.to_string(), "Missing required option: --execstart");
    }

    #[test]
    fn unknown_executable_is_a_prerequisite_failure() {
        let opts = service_opts(&[
            "--name",
            "web",
            "--execstart",
            "this-program-does-not-exist-12345",
            "--user",
        ]);
        let err = run(&opts, true).unwrap_err();
        assert!(err.to_string().contains("Cannot find"));
    }

    #[test]
    fn dry_run_succeeds_with_resolvable_executable() {
        let opts = service_opts(&["--name", "unitgen-test-web", "--execstart", "sh", "--user"]);
        run(&opts, true).unwrap();
    }
}
