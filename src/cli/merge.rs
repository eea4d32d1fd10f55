// merge.rs - Merge bundled defaults, config/option files and CLI arguments
//
// Precedence, lowest to highest: bundled defaults, --configfile (or
// --optionfile), explicit command line flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::cli::config::{EngineOptions, PipelineConfig};
use crate::cli::validation::{validate_config, validate_options};
use crate::data::defaults::Defaults;
use crate::data::loaders::{load_document, Entries};

/// Final mappings for one workflow invocation
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: PipelineConfig,
    pub options: EngineOptions,
    pub snakefile: PathBuf,
}

impl PipelineConfig {
    /// Overlay a higher-precedence layer: every field it sets wins
    pub fn merge(self, higher: PipelineConfig) -> Self {
        let mut extra = self.extra;
        extra.extend(higher.extra);

        Self {
            reads_dir: higher.reads_dir.or(self.reads_dir),
            result_dir: higher.result_dir.or(self.result_dir),
            samples: higher.samples.or(self.samples),
            fq_path_pattern: higher.fq_path_pattern.or(self.fq_path_pattern),
            organelle_database: higher.organelle_database.or(self.organelle_database),
            genetic_code: higher.genetic_code.or(self.genetic_code),
            genome_min_size: higher.genome_min_size.or(self.genome_min_size),
            genome_max_size: higher.genome_max_size.or(self.genome_max_size),
            insert_size: higher.insert_size.or(self.insert_size),
            kmer_size: higher.kmer_size.or(self.kmer_size),
            read_length: higher.read_length.or(self.read_length),
            max_mem_gb: higher.max_mem_gb.or(self.max_mem_gb),
            seed_input: higher.seed_input.or(self.seed_input),
            genes: higher.genes.or(self.genes),
            meangs_path: higher.meangs_path.or(self.meangs_path),
            extra,
        }
    }
}

impl EngineOptions {
    pub fn merge(self, higher: EngineOptions) -> Self {
        let mut extra = self.extra;
        extra.extend(higher.extra);

        Self {
            cores: higher.cores.or(self.cores),
            dryrun: higher.dryrun.or(self.dryrun),
            printshellcmds: higher.printshellcmds.or(self.printshellcmds),
            extra,
        }
    }
}

impl RunArgs {
    /// Config values given on the command line; falsy values stay unset
    pub fn config_layer(&self) -> PipelineConfig {
        PipelineConfig {
            reads_dir: non_empty(&self.reads_dir),
            result_dir: non_empty(&self.result_dir),
            samples: if self.samples.is_empty() {
                None
            } else {
                Some(self.samples.clone())
            },
            fq_path_pattern: non_empty(&self.fq_path_pattern),
            organelle_database: self.organelle_database.map(|db| db.as_str().to_string()),
            genetic_code: non_zero(self.genetic_code),
            genome_min_size: non_zero(self.genome_min_size),
            genome_max_size: non_zero(self.genome_max_size),
            insert_size: non_zero(self.insert_size),
            kmer_size: non_zero(self.kmer_size),
            read_length: non_zero(self.read_length),
            max_mem_gb: non_zero(self.max_mem_gb),
            seed_input: non_empty(&self.seed_input).or_else(|| non_empty(&self.reference)),
            genes: non_empty(&self.genes),
            meangs_path: non_empty(&self.meangs_path),
            extra: BTreeMap::new(),
        }
    }

    pub fn options_layer(&self) -> EngineOptions {
        EngineOptions {
            cores: non_zero(self.cores),
            dryrun: self.dryrun.then_some(true),
            printshellcmds: None,
            extra: BTreeMap::new(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.trim().is_empty()).cloned()
}

fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v != 0)
}

/// Load an optional key/value file; a path that does not exist is skipped
pub fn load_layer(path: Option<&str>, kind: &str) -> Result<Option<Entries>, String> {
    let path = match path {
        Some(path) => Path::new(path),
        None => return Ok(None),
    };

    if !path.exists() {
        log::warn!("{} file not found, skipping: {}", kind, path.display());
        return Ok(None);
    }

    log::info!(">>> reading {} from file: {}", kind, path.display());
    load_document(path).map(Some)
}

pub fn resolve_config(args: &RunArgs, defaults: &Defaults) -> Result<PipelineConfig, String> {
    let mut file_layer = PipelineConfig::default();
    if let Some(entries) = load_layer(args.configfile.as_deref(), "config")? {
        file_layer.apply_entries(entries)?;
    }

    let config = defaults
        .config
        .clone()
        .merge(file_layer)
        .merge(args.config_layer());

    log::info!(">>> Configs:\n{}", config.to_pretty_json()?);
    validate_config(&config)?;
    Ok(config)
}

pub fn resolve_options(args: &RunArgs, defaults: &Defaults) -> Result<EngineOptions, String> {
    let mut file_layer = EngineOptions::default();
    if let Some(entries) = load_layer(args.optionfile.as_deref(), "options")? {
        file_layer.apply_entries(entries)?;
    }

    let options = defaults
        .options
        .clone()
        .merge(file_layer)
        .merge(args.options_layer());

    log::info!(">>> Options:\n{}", options.to_pretty_json()?);
    validate_options(&options)?;
    Ok(options)
}

/// Resolve everything the `run` command hands to the workflow engine
pub fn resolve_run(args: &RunArgs, defaults: &Defaults) -> Result<Resolved, String> {
    let config = resolve_config(args, defaults)?;
    let options = resolve_options(args, defaults)?;
    let snakefile = args
        .snakefile
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| defaults.snakefile.clone());

    Ok(Resolved {
        config,
        options,
        snakefile,
    })
}
