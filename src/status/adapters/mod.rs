//! Adapter implementations for work item ports.

pub mod memory;
