//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the
//! `clap` crate. It specifies the available subcommands, arguments, and
//! flags for the application.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "cargo xtask")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Developer toolkit for the Fossa workspace")]
pub struct Cli {
    /// The main subcommand to execute.
    #[command(subcommand)]
    pub command: AppCommands,
}

/// Enumeration of available application subcommands.
#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Work with entitlement wire records
    #[command(alias = "ent")]
    Entitlements {
        #[command(subcommand)]
        action: EntitlementsAction,
    },
}

/// Entitlement kind a record belongs to.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    /// System-scoped entitlements
    System,
    /// Company-scoped entitlements
    Company,
}

/// Operations over entitlement wire records.
#[derive(Debug, Subcommand)]
pub enum EntitlementsAction {
    /// Validate a JSON wire record and list every defect
    Validate {
        /// Entitlement kind of the record
        #[arg(short, long, value_enum)]
        kind: Kind,
        /// Path to the JSON record
        path: PathBuf,
    },
    /// Validate a JSON wire record and pack it into the binary form
    Pack {
        /// Entitlement kind of the record
        #[arg(short, long, value_enum)]
        kind: Kind,
        /// Path to the JSON record
        path: PathBuf,
        /// Output path (defaults to the input path with a `.bin` extension)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Decode a packed binary record and print a readable summary
    Inspect {
        /// Entitlement kind of the record
        #[arg(short, long, value_enum)]
        kind: Kind,
        /// Path to the packed record
        path: PathBuf,
    },
}
