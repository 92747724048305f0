//! Shared helpers used across the configuration modules.

pub mod validate;
