//! CLI commands

pub mod inject;
pub mod knowledge;
pub mod types;
