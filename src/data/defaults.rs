// defaults.rs - Bundled defaults, banner and version, loaded once at startup

use std::env;
use std::path::PathBuf;

use crate::cli::config::{EngineOptions, PipelineConfig};
use crate::data::loaders::yaml_loader;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("../../assets/config.yaml");
pub const DEFAULT_OPTION_FILE: &str = include_str!("../../assets/options.yaml");
const BANNER_TEMPLATE: &str = include_str!("../../assets/banner.txt");

pub const PROG_NAME: &str = "fastmito";

/// Software path read as the default of --meangs-path
pub const MEANGS_PATH_ENV: &str = "MEANGS_PATH";
pub const SNAKEFILE_ENV: &str = "FASTMITO_SNAKEFILE";

#[derive(Debug, Clone)]
pub struct AppInfo {
    pub prog: &'static str,
    pub version: &'static str,
    pub banner: String,
}

impl AppInfo {
    pub fn load() -> Self {
        let version = crate::VERSION;
        Self {
            prog: PROG_NAME,
            version,
            banner: BANNER_TEMPLATE.replace("{version}", version),
        }
    }
}

/// Lowest-precedence layer of the resolver
#[derive(Debug, Clone)]
pub struct Defaults {
    pub config: PipelineConfig,
    pub options: EngineOptions,
    pub snakefile: PathBuf,
}

impl Defaults {
    /// Bundled defaults plus the software-path environment variables
    pub fn load() -> Result<Self, String> {
        let mut defaults = Self::bundled()?;

        if let Some(path) = env_value(MEANGS_PATH_ENV) {
            defaults.config.meangs_path = Some(path);
        }
        if let Some(path) = env_value(SNAKEFILE_ENV) {
            defaults.snakefile = PathBuf::from(path);
        }

        Ok(defaults)
    }

    /// Bundled defaults only, independent of the environment
    pub fn bundled() -> Result<Self, String> {
        let mut config = PipelineConfig::default();
        let entries = yaml_loader::parse(DEFAULT_CONFIG_FILE)
            .map_err(|e| format!("Bundled default config is invalid: {}", e))?;
        config.apply_entries(entries)?;

        let mut options = EngineOptions::default();
        let entries = yaml_loader::parse(DEFAULT_OPTION_FILE)
            .map_err(|e| format!("Bundled default options are invalid: {}", e))?;
        options.apply_entries(entries)?;

        Ok(Self {
            config,
            options,
            snakefile: default_snakefile(),
        })
    }
}

fn env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// `smk/main.smk` next to the executable
fn default_snakefile() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("smk").join("main.smk")))
        .unwrap_or_else(|| PathBuf::from("smk").join("main.smk"))
}
