//! Small shared utilities for the CLI.
//!
//! Helpers used by argument parsing and reporting that don't belong to the
//! higher-level orchestration in [`crate::process`].

pub(crate) mod bytes;
pub mod size;
