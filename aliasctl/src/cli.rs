//! CLI argument definitions using clap
//!
//! Commands:
//! - aliasctl add <alias_email> <username>
//! - aliasctl del <alias_email>
//! - aliasctl disable <alias_email>
//! - aliasctl list [--user <username>] [--json]
//! - aliasctl owner <alias_email>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage email alias records in a local SQLite database
#[derive(Parser, Debug)]
#[command(name = "aliasctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the alias database [default: /var/lib/kc-policy/aliases.db]
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Diagnostic log filter written to stderr (e.g. "debug") [default: warn]
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add an alias, or reassign and re-enable an existing one
    Add {
        #[arg(value_parser = non_blank)]
        alias_email: String,
        #[arg(value_parser = non_blank)]
        username: String,
    },

    /// Delete an alias (no-op if it does not exist)
    Del {
        #[arg(value_parser = non_blank)]
        alias_email: String,
    },

    /// Disable an alias, keeping its owner
    Disable {
        #[arg(value_parser = non_blank)]
        alias_email: String,
    },

    /// List aliases as tab-separated lines
    List {
        /// Only list aliases owned by this user (exact match)
        #[arg(long, value_name = "USERNAME")]
        user: Option<String>,

        /// Print a JSON array instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },

    /// Print the owner of an enabled alias
    Owner {
        #[arg(value_parser = non_blank)]
        alias_email: String,
    },
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value cannot be blank".to_string())
    } else {
        Ok(value.to_string())
    }
}
