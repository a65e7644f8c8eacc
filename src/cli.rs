//! Command-line interface definitions.
//!
//! One flag per schema entry, long names derived from the lower-cased key.
//! The `--name` and `--execstart`/`--listenstream` gates are deliberately
//! *not* marked required at the clap level: the explicit required-option
//! gate in [`crate::prereq::require_option`] owns that failure so it is
//! reported uniformly and exits with status 1.

use clap::{Args, Parser, Subcommand};

use crate::resolve::ArgumentSet;

/// Top-level CLI entry point for the unit file generator.
#[derive(Parser, Debug)]
#[command(name = "unitgen", about = "Generates systemd unit files", version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preview the generated unit file without writing it
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates a service unit
    CreateService(ServiceOpts),
    /// Creates a socket unit
    CreateSocket(SocketOpts),
}

impl Command {
    /// Short name of the subcommand, used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateService(_) => "create-service",
            Self::CreateSocket(_) => "create-socket",
        }
    }
}

/// Options shared by every unit-creating subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonOpts {
    /// (required) Name of the unit
    #[arg(long)]
    pub name: Option<String>,

    /// Create a user unit
    #[arg(long)]
    pub user: bool,
}

/// Options for the `create-service` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ServiceOpts {
    /// Name and scope flags shared by every unit-creating subcommand.
    #[command(flatten)]
    pub common: CommonOpts,

    /// Sets `Description`
    #[arg(long)]
    pub description: Option<String>,

    /// Sets `Type` (simple, exec, forking, oneshot, dbus, notify, idle)
    #[arg(long = "type")]
    pub service_type: Option<String>,

    /// Sets `WorkingDirectory`, defaults to the resolved executable's directory
    #[arg(long = "workingdirectory")]
    pub working_directory: Option<String>,

    /// (required) Sets `ExecStart`
    #[arg(long)]
    pub execstart: Option<String>,

    /// Sets `Restart` (no, on-success, on-failure, on-abnormal, on-watchdog, on-abort, always)
    #[arg(long)]
    pub restart: Option<String>,

    /// Sets `SyslogIdentifier`
    #[arg(long = "syslogidentifier")]
    pub syslog_identifier: Option<String>,

    /// Sets `User`
    #[arg(long)]
    pub uid: Option<String>,

    /// Sets `Group`
    #[arg(long)]
    pub gid: Option<String>,

    /// Sets `Environment`, may be specified multiple times
    #[arg(short = 'e', long)]
    pub environment: Vec<String>,

    /// Sets `WantedBy`, defaults to 'multi-user.target'
    #[arg(long = "wantedby")]
    pub wanted_by: Option<String>,

    /// Sets `Also`
    #[arg(long)]
    pub also: Option<String>,
}

impl ServiceOpts {
    /// Collect the supplied values into an [`ArgumentSet`] keyed by
    /// schema key.
    #[must_use]
    pub fn argument_set(&self) -> ArgumentSet {
        let mut args = ArgumentSet::new();
        args.insert("name", self.common.name.as_deref());
        args.insert("description", self.description.as_deref());
        args.insert("type", self.service_type.as_deref());
        args.insert("workingdirectory", self.working_directory.as_deref());
        args.insert("execstart", self.execstart.as_deref());
        args.insert("restart", self.restart.as_deref());
        args.insert("syslogidentifier", self.syslog_identifier.as_deref());
        args.insert("user", self.uid.as_deref());
        args.insert("group", self.gid.as_deref());
        args.insert_all("environment", &self.environment);
        args.insert("wantedby", self.wanted_by.as_deref());
        args.insert("also", self.also.as_deref());
        args
    }
}

/// Options for the `create-socket` subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SocketOpts {
    /// Name and scope flags shared by every unit-creating subcommand.
    #[command(flatten)]
    pub common: CommonOpts,

    /// Sets `Description`
    #[arg(long)]
    pub description: Option<String>,

    /// (required) Sets `ListenStream`
    #[arg(long = "listenstream")]
    pub listen_stream: Option<String>,

    /// Sets `WantedBy`, defaults to 'sockets.target'
    #[arg(long = "wantedby")]
    pub wanted_by: Option<String>,
}

impl SocketOpts {
    /// Collect the supplied values into an [`ArgumentSet`] keyed by
    /// schema key.
    #[must_use]
    pub fn argument_set(&self) -> ArgumentSet {
        let mut args = ArgumentSet::new();
        args.insert("name", self.common.name.as_deref());
        args.insert("description", self.description.as_deref());
        args.insert("listenstream", self.listen_stream.as_deref());
        args.insert("wantedby", self.wanted_by.as_deref());
        args
    }
}
