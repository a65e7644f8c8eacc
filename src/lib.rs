//! Systemd unit file generator.
//!
//! Generates `.service` and `.socket` unit files from named, typed
//! command-line options. The core is the option-resolution and
//! document-generation engine; everything else is CLI and OS glue.
//!
//! The public API is organised into five layers:
//!
//! - **[`schema`]** — static, ordered option schemas per unit type
//! - **[`resolve`]** — merge user values with defaults, apply placeholders
//! - **[`document`]** — render resolved values into `[Section]`/`Key=Value` text
//! - **[`writer`]** — create the unit file with scope-dependent path and permissions
//! - **[`commands`]** — top-level subcommand orchestration
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod document;
pub mod error;
pub mod exec;
pub mod logging;
pub mod prereq;
pub mod resolve;
pub mod schema;
pub mod writer;
