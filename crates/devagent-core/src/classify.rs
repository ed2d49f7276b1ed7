// ABOUTME: Keyword classifier mapping free-text tasks to boolean feature flags.
// ABOUTME: A flag is set iff the lower-cased task contains one of its trigger substrings.

use serde::Serialize;

const STORAGE_TRIGGERS: &[&str] = &["document", "file", "content", "storage", "upload"];
const AUTH_TRIGGERS: &[&str] = &["user", "auth", "login", "authentication", "security"];
const API_TRIGGERS: &[&str] = &["api", "rest", "service", "endpoint", "interface"];
const SEARCH_TRIGGERS: &[&str] = &["search", "query", "find", "filter", "index"];
const REALTIME_TRIGGERS: &[&str] = &["realtime", "websocket", "live", "streaming"];
const WORKFLOW_TRIGGERS: &[&str] = &["workflow", "pipeline", "approval", "orchestrat", "automation"];
const INTEGRATION_TRIGGERS: &[&str] = &["integrat", "webhook", "third-party", "external", "sync"];

/// Boolean requirements derived once per task and read-only afterward.
/// Flags are independent; several may be set for the same task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub needs_storage: bool,
    pub needs_auth: bool,
    pub needs_api: bool,
    pub needs_search: bool,
    pub needs_realtime: bool,
    pub needs_workflow: bool,
    pub needs_integration: bool,
}

impl FeatureFlags {
    /// Classify a task description. Pure and total: a task matching no
    /// trigger list yields all-false flags.
    pub fn from_task(task: &str) -> Self {
        let task_lower = task.to_lowercase();
        let contains_any = |triggers: &[&str]| triggers.iter().any(|t| task_lower.contains(t));

        Self {
            needs_storage: contains_any(STORAGE_TRIGGERS),
            needs_auth: contains_any(AUTH_TRIGGERS),
            needs_api: contains_any(API_TRIGGERS),
            needs_search: contains_any(SEARCH_TRIGGERS),
            needs_realtime: contains_any(REALTIME_TRIGGERS),
            needs_workflow: contains_any(WORKFLOW_TRIGGERS),
            needs_integration: contains_any(INTEGRATION_TRIGGERS),
        }
    }
}
