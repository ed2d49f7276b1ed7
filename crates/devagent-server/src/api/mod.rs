// ABOUTME: JSON API module for devagent.
// ABOUTME: Task submission and history endpoints live in the tasks sub-module.

pub mod tasks;
