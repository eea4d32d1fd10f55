// mod.rs - Startup defaults and key/value documents

pub mod defaults;
pub mod loaders;
pub mod value;

// Re-export main types for convenience
pub use defaults::{AppInfo, Defaults};
pub use loaders::{load_document, DocumentFormat, Entries};
