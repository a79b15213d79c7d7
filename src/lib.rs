//! Camp Workflow: status workflows for project and task dashboards.
//!
//! This crate provides the status model shared by projects and tasks: the
//! per-item status sets users edit, the canonical buckets used to theme
//! status badges, and the four-column task board.
//!
//! # Architecture
//!
//! Camp Workflow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`status`]: Status sets, normalization, and board orchestration

pub mod status;
