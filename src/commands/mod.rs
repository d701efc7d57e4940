//! CLI commands

pub mod import;
pub mod render;
