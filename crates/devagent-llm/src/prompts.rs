// ABOUTME: Fixed per-role prompt templates for the generation delegate.
// ABOUTME: Each template has a single {task} placeholder substituted at render time.

use devagent_core::Role;

const ARCHITECT_TEMPLATE: &str = "You are a senior software architect. Design a system architecture for the following requirements:

Requirements: {task}

Focus on:
1. Component relationships
2. Technology stack
3. Design patterns
4. Scalability considerations

Response should include a Mermaid diagram and detailed explanations.";

const DEVELOPER_TEMPLATE: &str = "You are a senior developer. Write clean, production-ready code for the following task:

Task: {task}

Requirements:
1. Error handling
2. Input validation
3. Documentation
4. Best practices

Provide complete, working code with comments.";

const REVIEWER_TEMPLATE: &str = "You are a code reviewer. Review the following implementation:

Implementation: {task}

Focus on:
1. Security issues
2. Performance optimizations
3. Code quality
4. Best practices

Provide specific, actionable feedback.";

/// Return the fixed template for a role.
pub fn template_for_role(role: Role) -> &'static str {
    match role {
        Role::Architect => ARCHITECT_TEMPLATE,
        Role::Developer => DEVELOPER_TEMPLATE,
        Role::Reviewer => REVIEWER_TEMPLATE,
    }
}

/// Render the prompt for a role by substituting the task text into the
/// template's single placeholder.
pub fn render_prompt(role: Role, task: &str) -> String {
    template_for_role(role).replace("{task}", task)
}
