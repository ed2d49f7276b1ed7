// ABOUTME: Architect assembler producing a Mermaid system diagram plus component notes.
// ABOUTME: Diagram nodes and detail fragments are gated by the task's feature flags.

use std::fmt::Write;

use crate::classify::FeatureFlags;
use crate::diagram::Diagram;
use crate::tech::{TechCategory, TechnologyMentions};

/// Build the architecture diagram for a set of feature flags. The client
/// node is always present; everything else is conditional. Storage and
/// integration edges reference the `API` node id even when `needs_api` is
/// false, matching the canonical demo layout.
pub fn build_diagram(flags: &FeatureFlags) -> Diagram {
    let mut diagram = Diagram::new();
    diagram.node("Client[Client Application]:::frontend");

    if flags.needs_auth {
        diagram.node("Auth[Auth Service]:::backend");
        diagram.edge("Client", "Auth");
    }
    if flags.needs_api {
        diagram.node("API[API Gateway]:::backend");
        diagram.edge("Client", "API");
    }
    if flags.needs_storage {
        diagram.node("Storage[Storage Service]:::backend");
        diagram.node("DB[(Database)]:::database");
        diagram.edge("API", "Storage");
        diagram.edge("Storage", "DB");
    }
    if flags.needs_search {
        diagram.node("Search[Search Engine]:::backend");
        diagram.edge("API", "Search");
    }
    if flags.needs_realtime {
        diagram.node("RT[Realtime Channel]:::backend");
        diagram.edge("Client", "RT");
    }
    if flags.needs_workflow {
        diagram.node("Queue[(Task Queue)]:::database");
        diagram.node("Worker[Workflow Engine]:::backend");
        diagram.edge("API", "Queue");
        diagram.edge("Queue", "Worker");
    }
    if flags.needs_integration {
        diagram.node("Ext[External Services]:::backend");
        diagram.edge("API", "Ext");
    }

    diagram
}

fn backend_services(flags: &FeatureFlags) -> String {
    let mut services = vec!["RESTful API with FastAPI"];
    if flags.needs_auth {
        services.push("JWT Authentication");
    }
    if flags.needs_storage {
        services.push("File Management Service");
    }
    if flags.needs_search {
        services.push("Search Service with Elasticsearch");
    }
    if flags.needs_realtime {
        services.push("WebSocket Gateway");
    }
    if flags.needs_workflow {
        services.push("Workflow Orchestration Service");
    }
    if flags.needs_integration {
        services.push("Third-Party Integration Layer");
    }
    services.join("\n   - ")
}

fn storage_details(flags: &FeatureFlags) -> &'static str {
    if flags.needs_storage {
        "PostgreSQL for metadata\n   - S3 for file storage\n   - Redis for caching"
    } else {
        "PostgreSQL for application data"
    }
}

fn technology_stack(mentions: &TechnologyMentions) -> String {
    if mentions.is_empty() {
        return "- No specific technologies mentioned; defaults above apply".to_string();
    }

    let mut out = String::new();
    for category in TechCategory::all() {
        let found = mentions.for_category(category);
        if !found.is_empty() {
            writeln!(out, "- {}: {}", category.label(), found.join(", ")).unwrap();
        }
    }
    out.truncate(out.trim_end().len());
    out
}

/// Assemble the full architect response: header, fenced diagram, component
/// details, detected technology stack, and design patterns.
pub fn assemble_architecture(task: &str) -> String {
    let flags = FeatureFlags::from_task(task);
    let mentions = TechnologyMentions::from_task(task);
    let diagram = build_diagram(&flags);

    let mut out = String::new();
    writeln!(out, "# System Architecture for: {task}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "```mermaid").unwrap();
    writeln!(out, "{}", diagram.render()).unwrap();
    writeln!(out, "```").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "## Component Details").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "1. Frontend Layer:").unwrap();
    writeln!(out, "   - Modern SPA using React.js").unwrap();
    writeln!(out, "   - Material UI components").unwrap();
    writeln!(out, "   - Redux state management").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "2. Backend Services:").unwrap();
    writeln!(out, "   - {}", backend_services(&flags)).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "3. Storage Layer:").unwrap();
    writeln!(out, "   - {}", storage_details(&flags)).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "## Technology Stack").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", technology_stack(&mentions)).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "## Design Patterns:").unwrap();
    writeln!(out, "- Repository Pattern for data access").unwrap();
    writeln!(out, "- Factory Pattern for service creation").unwrap();
    writeln!(out, "- Observer Pattern for event handling").unwrap();

    out
}
