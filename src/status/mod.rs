//! Status workflow management for projects and tasks.
//!
//! Every project and task owns an ordered set of status definitions and a
//! status pointer. This module edits those sets, normalizes free-text
//! statuses into canonical buckets for theming and board columns, and drives
//! the task board with optimistic moves. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
