// ABOUTME: Builder for the textual Mermaid graph description embedded in architect responses.
// ABOUTME: Collects node and edge declarations and renders a deterministic `graph TD` block.

use std::fmt::Write;

/// A directed-graph description in the Mermaid mini-language: node
/// declarations (`Id[Label]:::class`, `Id[(Label)]:::class`) and arrow edges
/// (`A --> B`). This textual shape is the wire format the presentation shell
/// renders, so `render` must keep it stable.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: Vec<String>,
    edges: Vec<String>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node declaration, e.g. `Auth[Auth Service]:::backend`.
    pub fn node(&mut self, declaration: &str) {
        self.nodes.push(declaration.to_string());
    }

    /// Add an edge, e.g. `Client --> Auth`.
    pub fn edge(&mut self, from: &str, to: &str) {
        self.edges.push(format!("{from} --> {to}"));
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Render the full `graph TD` body: classDefs, then nodes, then edges,
    /// in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "graph TD").unwrap();
        writeln!(out, "    classDef frontend fill:#bbf,stroke:#333,stroke-width:2px").unwrap();
        writeln!(out, "    classDef backend fill:#f9f,stroke:#333,stroke-width:2px").unwrap();
        writeln!(out, "    classDef database fill:#bfb,stroke:#333,stroke-width:2px").unwrap();
        writeln!(out).unwrap();

        for node in &self.nodes {
            writeln!(out, "    {node}").unwrap();
        }
        for edge in &self.edges {
            writeln!(out, "    {edge}").unwrap();
        }

        // No trailing newline; callers embed this inside a fenced block.
        out.truncate(out.trim_end().len());
        out
    }
}
