// lib.rs - fastmito library root

//! # fastmito - configuration front-end for the FastMitoAssembler workflow
//!
//! Resolves the `config` and `options` mappings of a mitochondrial genome
//! assembly run and hands them to Snakemake, which drives GetOrganelle,
//! MEANGS, NOVOPlasty and MitoZ.
//!
//! Values are merged with increasing precedence:
//!
//! 1. bundled defaults (`assets/config.yaml`, `assets/options.yaml`)
//! 2. `--configfile` / `--optionfile` (YAML, JSON or TOML), blank values ignored
//! 3. explicit command line flags
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use fastmito::prelude::*;
//!
//! let defaults = Defaults::load()?;
//! let args = RunArgs {
//!     reads_dir: Some("reads".to_string()),
//!     samples: vec!["sample_1".to_string()],
//!     ..Default::default()
//! };
//! let resolved = resolve_run(&args, &defaults)?;
//! let status = resolved.launch(&SystemRunner)?;
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;
pub mod process;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{resolve_run, EngineOptions, PipelineConfig, Resolved, RunArgs};
    pub use crate::core::{NovoplastyInput, OrganelleDatabase, OrganellePreparer, WorkflowEngine};
    pub use crate::data::{AppInfo, Defaults};
    pub use crate::process::{CommandOutput, CommandRunner, CommandSpec, SystemRunner};
}

pub use cli::{EngineOptions, PipelineConfig, Resolved};
pub use data::{AppInfo, Defaults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "fastmito v{} - FastMitoAssembler workflow front-end",
        VERSION
    )
}
