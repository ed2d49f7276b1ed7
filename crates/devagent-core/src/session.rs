// ABOUTME: Append-only in-memory session log of processed tasks.
// ABOUTME: Owned by the presentation shell; records (role, task, response) per submission.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ulid::Ulid;

use crate::role::Role;

/// One processed task submission. Ephemeral: lives only as long as the
/// session log holding it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEntry {
    pub entry_id: Ulid,
    pub role: Role,
    pub task: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only ordered sequence of past submissions. No other component
/// reads or mutates this; the shell appends after each response and iterates
/// for display.
#[derive(Debug, Default)]
pub struct SessionLog {
    entries: Vec<SessionEntry>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its assigned id.
    pub fn append(&mut self, role: Role, task: String, response: String) -> Ulid {
        let entry_id = Ulid::new();
        self.entries.push(SessionEntry {
            entry_id,
            role,
            task,
            response,
            created_at: Utc::now(),
        });
        entry_id
    }

    /// Entries newest-first, for display.
    pub fn newest_first(&self) -> impl Iterator<Item = &SessionEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
