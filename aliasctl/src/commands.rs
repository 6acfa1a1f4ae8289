//! Command dispatch
//!
//! Maps each parsed subcommand onto one store operation. Mutating commands
//! print nothing on success.

use anyhow::{Context, Result};
use std::io::Write;

use aliasctl_core::{Alias, AliasStore};

use crate::cli::Command;

pub fn execute<W: Write>(store: &AliasStore, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Add {
            alias_email,
            username,
        } => {
            store
                .upsert(&alias_email, &username)
                .with_context(|| format!("failed to add alias {alias_email}"))?;
        }
        Command::Del { alias_email } => {
            let removed = store
                .delete(&alias_email)
                .with_context(|| format!("failed to delete alias {alias_email}"))?;
            if !removed {
                tracing::info!(alias = %alias_email, "No such alias, nothing deleted");
            }
        }
        Command::Disable { alias_email } => {
            let updated = store
                .disable(&alias_email)
                .with_context(|| format!("failed to disable alias {alias_email}"))?;
            if !updated {
                tracing::info!(alias = %alias_email, "No such alias, nothing disabled");
            }
        }
        Command::List { user, json } => {
            let aliases = store
                .list(user.as_deref())
                .context("failed to list aliases")?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &aliases)?;
                writeln!(out)?;
            } else {
                for alias in &aliases {
                    writeln!(out, "{}", format_row(alias))?;
                }
            }
        }
        Command::Owner { alias_email } => {
            if let Some(owner) = store
                .owner(&alias_email)
                .with_context(|| format!("failed to look up alias {alias_email}"))?
            {
                writeln!(out, "{owner}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// `alias_email<TAB>username<TAB>enabled|disabled<TAB>updated_at`
pub fn format_row(alias: &Alias) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        alias.alias_email,
        alias.username,
        alias.status(),
        alias.updated_at
    )
}
