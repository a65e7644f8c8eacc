//! CLI entry point for the unit file generator.

use anyhow::Result;
use clap::Parser;

use unitgen::cli::{Cli, Command};
use unitgen::{commands, logging};

fn main() -> Result<()> {
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, args.command.name());

    match args.command {
        Command::CreateService(opts) => commands::create_service::run(&opts, args.dry_run),
        Command::CreateSocket(opts) => commands::create_socket::run(&opts, args.dry_run),
    }
}
