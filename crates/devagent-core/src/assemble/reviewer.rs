// ABOUTME: Reviewer assembler producing bullet-point review feedback.
// ABOUTME: Flag-gated sections first, then an unconditional performance section.

use std::fmt::Write;

use crate::classify::FeatureFlags;

/// Assemble the review response. Always ends with the performance section,
/// so output is never just the header.
pub fn assemble_review(task: &str) -> String {
    let flags = FeatureFlags::from_task(task);

    let mut out = String::new();
    writeln!(out, "## Code Review Feedback").unwrap();

    if flags.needs_auth {
        writeln!(out).unwrap();
        writeln!(out, "### Security:").unwrap();
        writeln!(out, "✅ Authentication implementation").unwrap();
        writeln!(out, "⚠️ Add rate limiting").unwrap();
        writeln!(out, "⚠️ Implement request validation").unwrap();
    }

    if flags.needs_storage {
        writeln!(out).unwrap();
        writeln!(out, "### Data Handling:").unwrap();
        writeln!(out, "✅ Proper error handling").unwrap();
        writeln!(out, "⚠️ Add connection pooling").unwrap();
        writeln!(out, "⚠️ Implement caching strategy").unwrap();
    }

    if flags.needs_realtime {
        writeln!(out).unwrap();
        writeln!(out, "### Realtime:").unwrap();
        writeln!(out, "✅ WebSocket lifecycle handled").unwrap();
        writeln!(out, "⚠️ Add reconnection backoff on the client").unwrap();
        writeln!(out, "⚠️ Bound message queue growth").unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "### Performance:").unwrap();
    writeln!(out, "✅ Async operations used appropriately").unwrap();
    writeln!(out, "⚠️ Optimize database queries").unwrap();
    writeln!(out, "⚠️ Add monitoring and logging").unwrap();

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_section_is_always_present() {
        let response = assemble_review("tiny script");
        assert!(response.contains("### Performance:"));
        assert!(response.contains("✅ Async operations used appropriately"));
    }

    #[test]
    fn auth_task_gets_security_section() {
        let response = assemble_review("login flow for users");
        assert!(response.contains("### Security:"));
        assert!(response.contains("⚠️ Add rate limiting"));
    }

    #[test]
    fn storage_task_gets_data_handling_section() {
        let response = assemble_review("file storage layer");
        assert!(response.contains("### Data Handling:"));
        assert!(response.contains("⚠️ Implement caching strategy"));
    }

    #[test]
    fn plain_task_omits_gated_sections() {
        let response = assemble_review("tiny script");
        assert!(!response.contains("### Security:"));
        assert!(!response.contains("### Data Handling:"));
        assert!(!response.contains("### Realtime:"));
    }

    #[test]
    fn starts_with_feedback_header() {
        let response = assemble_review("anything");
        assert!(response.starts_with("## Code Review Feedback"));
    }
}
