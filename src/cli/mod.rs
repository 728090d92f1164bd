//! CLI command handlers.
//!
//! Testable command handlers invoked by main.rs. Each handler implements the
//! logic of one subcommand and returns the process exit code.

mod check;
mod generate;

pub use check::run_check;
pub use generate::run_generate;

// Re-export config types used by handlers
pub use crate::config::{CheckConfig, GenerateConfig};
