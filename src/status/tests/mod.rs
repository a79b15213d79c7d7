//! Unit tests for the status workflow module.
