// ABOUTME: Response assemblers, one per role, concatenating fixed fragments by feature flag.
// ABOUTME: Dispatch is an exhaustive match on Role; output is deterministic per (task, role).

mod architect;
mod developer;
mod reviewer;

pub use architect::assemble_architecture;
pub use developer::assemble_development;
pub use reviewer::assemble_review;

use crate::role::Role;

/// Assemble the template response for a task under the given role.
/// Total: always produces output, possibly only the preamble and defaults.
pub fn respond(task: &str, role: Role) -> String {
    match role {
        Role::Architect => assemble_architecture(task),
        Role::Developer => assemble_development(task),
        Role::Reviewer => assemble_review(task),
    }
}
