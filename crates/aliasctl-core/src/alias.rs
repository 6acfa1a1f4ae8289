//! Alias records
//!
//! An alias row moves between two states:
//! ```text
//! (absent) --add--> Enabled --disable--> Disabled
//!                      ^                     |
//!                      +--------add----------+
//! ```
//! `del` removes the row from either state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Normalized address, primary key
    pub alias_email: String,
    /// Owning user
    pub username: String,
    pub enabled: bool,
    /// Unix epoch seconds of the last add or disable
    pub updated_at: i64,
}

impl Alias {
    pub fn status(&self) -> AliasStatus {
        AliasStatus::from_enabled(self.enabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasStatus {
    /// Alias resolves to its owner
    Enabled,
    /// Alias is kept but no longer resolves
    Disabled,
}

impl AliasStatus {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            AliasStatus::Enabled
        } else {
            AliasStatus::Disabled
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AliasStatus::Enabled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AliasStatus::Enabled => "enabled",
            AliasStatus::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for AliasStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AliasStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enabled" => Ok(AliasStatus::Enabled),
            "disabled" => Ok(AliasStatus::Disabled),
            _ => Err(format!("Unknown alias status: {}", s)),
        }
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Usernames are trimmed but keep their case.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_string()
}
