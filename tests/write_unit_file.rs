#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing,
    clippy::panic
)]
//! Integration tests for unit-file installation and the command entry
//! points.
//!
//! These tests exercise the create-without-overwrite file semantics with
//! real temporary directories, the error taxonomy surfaced to callers, and
//! the dry-run command path end to end.

use std::fs;
use std::path::Path;

use clap::Parser;

use unitgen::cli::{Cli, Command};
use unitgen::commands::{create_service, create_socket};
use unitgen::error::WriteError;
use unitgen::writer;

// ---------------------------------------------------------------------------
// Create-without-overwrite semantics
// ---------------------------------------------------------------------------

/// A fresh target path receives exactly the rendered content.
#[test]
fn new_unit_file_receives_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("web.service");
    writer::create_new_unit_file(&path, "[Unit]\nDescription=web\n").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Unit]\nDescription=web\n"
    );
}

/// An existing target is reported distinctly and never overwritten.
#[test]
fn existing_unit_file_is_never_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("web.service");
    fs::write(&path, "hand-edited").unwrap();

    let err = writer::create_new_unit_file(&path, "[Unit]\n").unwrap_err();
    assert!(matches!(err, WriteError::TargetAlreadyExists(_)));
    assert_eq!(
        err.to_string(),
        format!("A unit file already exists at {}", path.display())
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "hand-edited");
}

/// Unrelated filesystem failures surface as the generic write error, not
/// the already-exists variant.
#[test]
fn unrelated_io_failures_are_generic() {
    let err = writer::create_new_unit_file(
        Path::new("/nonexistent-dir-for-tests/web.service"),
        "[Unit]\n",
    )
    .unwrap_err();
    assert!(matches!(err, WriteError::Io { .. }));
}

// ---------------------------------------------------------------------------
// Command entry points
// ---------------------------------------------------------------------------

fn parse_service(argv: &[&str]) -> unitgen::cli::ServiceOpts {
    let cli = Cli::parse_from(argv);
    let Command::CreateService(opts) = cli.command else {
        panic!("expected create-service");
    };
    opts
}

fn parse_socket(argv: &[&str]) -> unitgen::cli::SocketOpts {
    let cli = Cli::parse_from(argv);
    let Command::CreateSocket(opts) = cli.command else {
        panic!("expected create-socket");
    };
    opts
}

/// A service without a name fails the required-option gate with the exact
/// user-facing message.
#[test]
fn create_service_requires_name() {
    let opts = parse_service(&["unitgen", "create-service", "--execstart", "sh"]);
    let err = create_service::run(&opts, true).unwrap_err();
    assert_eq!(err.to_string(), "Missing required option: --name");
}

/// A service without an ExecStart value fails the required-option gate.
#[test]
fn create_service_requires_execstart() {
    let opts = parse_service(&["unitgen", "create-service", "--name", "web"]);
    let err = create_service::run(&opts, true).unwrap_err();
    assert_eq!(err.to_string(), "Missing required option: --execstart");
}

/// An executable that exists neither as a path nor on PATH is rejected
/// before anything is written.
#[test]
fn create_service_rejects_unknown_executable() {
    let opts = parse_service(&[
        "unitgen",
        "create-service",
        "--name",
        "web",
        "--execstart",
        "definitely-not-a-real-program-12345",
    ]);
    let err = create_service::run(&opts, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot find 'definitely-not-a-real-program-12345'"
    );
}

/// Dry-run renders the document without touching the filesystem or
/// requiring privileges, even for the system scope.
#[test]
fn create_service_dry_run_writes_nothing() {
    let opts = parse_service(&[
        "unitgen",
        "create-service",
        "--name",
        "dry-run-probe",
        "--execstart",
        "sh",
    ]);
    create_service::run(&opts, true).unwrap();
    assert!(!Path::new("/etc/systemd/system/dry-run-probe.service").exists());
}

/// A socket only gates on the unit name; ListenStream stays advisory.
#[test]
fn create_socket_requires_only_name() {
    let opts = parse_socket(&["unitgen", "create-socket"]);
    let err = create_socket::run(&opts, true).unwrap_err();
    assert_eq!(err.to_string(), "Missing required option: --name");

    let opts = parse_socket(&["unitgen", "create-socket", "--name", "web"]);
    create_socket::run(&opts, true).unwrap();
}
