// mod.rs - Core logic module

pub mod engine;
pub mod novoplasty;
pub mod organelle;

// Re-export main types for convenience
pub use engine::{resolved_config_path, WorkflowEngine};
pub use novoplasty::NovoplastyInput;
pub use organelle::{Confirm, OrganelleDatabase, OrganellePreparer, PrepareReport};
