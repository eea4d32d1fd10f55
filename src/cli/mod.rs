// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod prompt;
pub mod validation;

// Re-export main types for convenience
pub use args::{Cli, Command, OrganelleArgs, PrepareCommand, RunArgs};
pub use config::{EngineOptions, PipelineConfig};
pub use merge::{resolve_run, Resolved};
pub use prompt::{AssumeYes, StdinConfirm};
pub use validation::{validate_config, validate_options};
