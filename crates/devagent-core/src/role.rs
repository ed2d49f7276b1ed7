// ABOUTME: Defines the Role enum selecting which response handler processes a task.
// ABOUTME: Parsing from strings is the only fallible step in the pure layer.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error returned when a role string is not one of the known personas.
/// Surfaced to the caller immediately; never retried.
#[derive(Debug, thiserror::Error)]
#[error("invalid role: {0} (expected architect, developer, or reviewer)")]
pub struct InvalidRoleError(pub String);

/// The persona lens a task is processed through. Dispatch over this enum is
/// exhaustive, so an unknown role can only enter through a string surface
/// and fails there in `from_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Architect,
    Developer,
    Reviewer,
}

impl Role {
    /// Return a lowercase label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Architect => "architect",
            Role::Developer => "developer",
            Role::Reviewer => "reviewer",
        }
    }

    /// All roles, in display order.
    pub fn all() -> [Role; 3] {
        [Role::Architect, Role::Developer, Role::Reviewer]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "architect" => Ok(Role::Architect),
            "developer" => Ok(Role::Developer),
            "reviewer" => Ok(Role::Reviewer),
            other => Err(InvalidRoleError(other.to_string())),
        }
    }
}
