// validation.rs - Checks applied to the resolved config and options

use regex::Regex;
use serde_yaml::Value;
use std::path::Path;
use std::str::FromStr;

use crate::cli::config::{EngineOptions, PipelineConfig};
use crate::core::organelle::OrganelleDatabase;
use crate::data::value::render;

/// Accept a sequence of strings, or a single string as a one-sample list
pub fn validate_samples(value: &Value) -> Result<Vec<String>, String> {
    let items: Vec<&Value> = match value {
        Value::String(_) => vec![value],
        Value::Sequence(items) => items.iter().collect(),
        _ => return Err(sample_type_error(value)),
    };

    let mut samples = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(name) => samples.push(name.clone()),
            _ => return Err(sample_type_error(value)),
        }
    }
    Ok(samples)
}

fn sample_type_error(value: &Value) -> String {
    format!(
        "sample name must be a string, please check your input: {}",
        render(value)
    )
}

/// Validate the merged config before it is handed to the workflow
pub fn validate_config(config: &PipelineConfig) -> Result<(), String> {
    let reads_dir = config
        .reads_dir
        .as_deref()
        .ok_or("--reads-dir is required (on the command line or as 'reads_dir' in --configfile)")?;
    if !Path::new(reads_dir).is_dir() {
        log::warn!("reads directory does not exist: {}", reads_dir);
    }

    let samples = match config.samples.as_deref() {
        Some(samples) if !samples.is_empty() => samples,
        _ => {
            return Err(
                "--samples is required (on the command line or as 'samples' in --configfile)"
                    .to_string(),
            )
        }
    };
    if samples.iter().any(|s| s.trim().is_empty()) {
        return Err(format!(
            "sample name must not be blank, please check your input: {:?}",
            samples
        ));
    }

    if let Some(database) = &config.organelle_database {
        OrganelleDatabase::from_str(database)?;
    }

    for (key, value) in [
        ("genetic_code", config.genetic_code),
        ("genome_min_size", config.genome_min_size),
        ("genome_max_size", config.genome_max_size),
        ("insert_size", config.insert_size),
        ("kmer_size", config.kmer_size),
        ("read_length", config.read_length),
        ("max_mem_gb", config.max_mem_gb),
    ] {
        if value == Some(0) {
            return Err(format!("'{}' must be greater than 0", key));
        }
    }

    if let (Some(min), Some(max)) = (config.genome_min_size, config.genome_max_size) {
        if min > max {
            return Err(format!(
                "genome_min_size ({}) must not exceed genome_max_size ({})",
                min, max
            ));
        }
    }

    if let Some(pattern) = &config.fq_path_pattern {
        validate_fq_pattern(pattern)?;
    }

    Ok(())
}

/// The pattern must name `{sample}` and no other placeholder
pub fn validate_fq_pattern(pattern: &str) -> Result<(), String> {
    let placeholder = Regex::new(r"\{([^{}]*)\}").map_err(|e| format!("Invalid regex: {}", e))?;

    let mut has_sample = false;
    for capture in placeholder.captures_iter(pattern) {
        match &capture[1] {
            "sample" => has_sample = true,
            other => {
                return Err(format!(
                    "Unknown placeholder '{{{}}}' in fq_path_pattern '{}' (only {{sample}} is supported)",
                    other, pattern
                ))
            }
        }
    }

    if !has_sample {
        return Err(format!(
            "fq_path_pattern '{}' must contain the {{sample}} placeholder",
            pattern
        ));
    }
    Ok(())
}

pub fn validate_options(options: &EngineOptions) -> Result<(), String> {
    if options.cores == Some(0) {
        return Err("cores must be at least 1".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> PipelineConfig {
        PipelineConfig {
            reads_dir: Some("reads".to_string()),
            samples: Some(vec!["a".to_string(), "b".to_string()]),
            organelle_database: Some("animal_mt".to_string()),
            fq_path_pattern: Some("{sample}/{sample}_1.clean.fq.gz".to_string()),
            genome_min_size: Some(12000),
            genome_max_size: Some(22000),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_samples() {
        let samples = Value::Sequence(vec![Value::String("a".into()), Value::String("b".into())]);
        assert_eq!(validate_samples(&samples).unwrap(), vec!["a", "b"]);

        let single = Value::String("a".into());
        assert_eq!(validate_samples(&single).unwrap(), vec!["a"]);

        let numeric = Value::Sequence(vec![Value::Number(123.into())]);
        let err = validate_samples(&numeric).unwrap_err();
        assert_eq!(err, "sample name must be a string, please check your input: [123]");

        let mixed = Value::Sequence(vec![Value::String("a".into()), Value::Bool(true)]);
        assert!(validate_samples(&mixed).is_err());
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_non_ascii_sample_accepted() {
        let config = PipelineConfig {
            samples: Some(vec!["échantillon_1".to_string()]),
            ..valid_config()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_required_keys() {
        let config = PipelineConfig { reads_dir: None, ..valid_config() };
        assert!(validate_config(&config).unwrap_err().contains("--reads-dir is required"));

        let config = PipelineConfig { samples: Some(vec![]), ..valid_config() };
        assert!(validate_config(&config).unwrap_err().contains("--samples is required"));
    }

    #[test]
    fn test_blank_sample_rejected() {
        let config = PipelineConfig {
            samples: Some(vec!["a".to_string(), "  ".to_string()]),
            ..valid_config()
        };
        assert!(validate_config(&config).unwrap_err().contains("must not be blank"));
    }

    #[test]
    fn test_unknown_database_rejected() {
        let config = PipelineConfig {
            organelle_database: Some("plant_mt".to_string()),
            ..valid_config()
        };
        assert!(validate_config(&config).unwrap_err().contains("plant_mt"));
    }

    #[test]
    fn test_genome_size_bounds() {
        let config = PipelineConfig {
            genome_min_size: Some(30000),
            ..valid_config()
        };
        assert!(validate_config(&config).unwrap_err().contains("must not exceed"));

        let config = PipelineConfig { kmer_size: Some(0), ..valid_config() };
        assert!(validate_config(&config).unwrap_err().contains("'kmer_size'"));
    }

    #[test]
    fn test_fq_pattern() {
        assert!(validate_fq_pattern("{sample}_R1.fq.gz").is_ok());
        assert!(validate_fq_pattern("reads_1.fq.gz").unwrap_err().contains("{sample}"));
        assert!(validate_fq_pattern("{sample}/{lane}_1.fq.gz")
            .unwrap_err()
            .contains("'{lane}'"));
    }

    #[test]
    fn test_validate_options() {
        assert!(validate_options(&EngineOptions { cores: Some(4), ..Default::default() }).is_ok());
        assert!(validate_options(&EngineOptions { cores: Some(0), ..Default::default() }).is_err());
    }
}
