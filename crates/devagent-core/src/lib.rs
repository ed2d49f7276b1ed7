// ABOUTME: Core library for devagent, containing the role enum, keyword classifier,
// ABOUTME: technology extractor, response assemblers, and the in-memory session log.

pub mod assemble;
pub mod classify;
pub mod diagram;
pub mod markdown;
pub mod role;
pub mod session;
pub mod tech;

pub use assemble::respond;
pub use classify::FeatureFlags;
pub use markdown::{extract_mermaid, split_mermaid, strip_code_fences};
pub use role::{InvalidRoleError, Role};
pub use session::{SessionEntry, SessionLog};
pub use tech::{TechCategory, TechnologyMentions};
