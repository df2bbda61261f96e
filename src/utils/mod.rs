//! Shared helpers

pub mod files;
