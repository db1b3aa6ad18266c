#![warn(rust_2018_idioms, unused_lifetimes)]
#![allow(clippy::print_stderr, clippy::print_stdout)]

mod handlers;
mod models;

use crate::handlers::entitlements;
use crate::models::args::{AppCommands, Cli, EntitlementsAction};

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        AppCommands::Entitlements { action } => match action {
            EntitlementsAction::Validate { kind, path } => entitlements::validate(kind, &path)?,
            EntitlementsAction::Pack { kind, path, out } => {
                entitlements::pack(kind, &path, out.as_deref())?;
            },
            EntitlementsAction::Inspect { kind, path } => entitlements::inspect(kind, &path)?,
        },
    }

    Ok(())
}
