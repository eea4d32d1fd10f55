// config.rs - Pipeline config and engine option mappings

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::cli::validation::validate_samples;
use crate::data::loaders::Entries;
use crate::data::value::{as_bool, as_count, as_text, is_blank};

/// Domain parameters handed to the workflow as its `config` mapping.
///
/// Every recognized key has a typed field; a field left `None` is absent
/// from the serialized mapping. Unrecognized keys from a config file are
/// kept in `extra` and forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineConfig {
    // Input/Output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reads_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fq_path_pattern: Option<String>,

    // GetOrganelle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organelle_database: Option<String>,

    // Assembly parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genetic_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genome_min_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genome_max_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kmer_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mem_gb: Option<u32>,

    // Optional inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<String>,
    #[serde(rename = "MEANGS_PATH", skip_serializing_if = "Option::is_none")]
    pub meangs_path: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PipelineConfig {
    /// Overwrite fields with every non-blank entry of a key/value document
    pub fn apply_entries(&mut self, entries: Entries) -> Result<(), String> {
        for (key, value) in entries {
            if is_blank(&value) {
                continue;
            }
            self.set(&key, value)?;
        }
        Ok(())
    }

    /// Set one key, converting the value to the field's type
    pub fn set(&mut self, key: &str, value: Value) -> Result<(), String> {
        match key {
            "reads_dir" => self.reads_dir = Some(as_text(key, &value)?),
            "result_dir" => self.result_dir = Some(as_text(key, &value)?),
            "samples" => self.samples = Some(validate_samples(&value)?),
            "fq_path_pattern" => self.fq_path_pattern = Some(as_text(key, &value)?),
            "organelle_database" => self.organelle_database = Some(as_text(key, &value)?),
            "genetic_code" => self.genetic_code = Some(as_count(key, &value)?),
            "genome_min_size" => self.genome_min_size = Some(as_count(key, &value)?),
            "genome_max_size" => self.genome_max_size = Some(as_count(key, &value)?),
            "insert_size" => self.insert_size = Some(as_count(key, &value)?),
            "kmer_size" => self.kmer_size = Some(as_count(key, &value)?),
            "read_length" => self.read_length = Some(as_count(key, &value)?),
            "max_mem_gb" => self.max_mem_gb = Some(as_count(key, &value)?),
            "seed_input" | "reference" => self.seed_input = Some(as_text(key, &value)?),
            "genes" => self.genes = Some(as_text(key, &value)?),
            "MEANGS_PATH" | "meangs_path" => self.meangs_path = Some(as_text(key, &value)?),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

/// Execution parameters for the workflow engine
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EngineOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cores: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dryrun: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub printshellcmds: Option<bool>,

    /// Passed to the engine as `--key value` flags
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl EngineOptions {
    pub fn apply_entries(&mut self, entries: Entries) -> Result<(), String> {
        for (key, value) in entries {
            if is_blank(&value) {
                continue;
            }
            self.set(&key, value)?;
        }
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: Value) -> Result<(), String> {
        match key {
            "cores" => self.cores = Some(as_count(key, &value)?),
            "dryrun" | "dry_run" => self.dryrun = Some(as_bool(key, &value)?),
            "printshellcmds" => self.printshellcmds = Some(as_bool(key, &value)?),
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize options: {}", e))
    }
}
