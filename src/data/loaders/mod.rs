// mod.rs - Key/value document loaders (YAML, JSON, TOML)

pub mod json_loader;
pub mod toml_loader;
pub mod yaml_loader;

use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::data::value::describe;

/// Flat key/value entries of a config or option file
pub type Entries = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension; anything unknown is read as YAML
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }
}

/// Read a key/value document from disk
pub fn load_document(path: &Path) -> Result<Entries, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file '{}': {}", path.display(), e))?;

    parse_document(&content, DocumentFormat::from_path(path))
        .map_err(|e| format!("Failed to parse file '{}': {}", path.display(), e))
}

pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Entries, String> {
    if is_empty_document(content) {
        return Ok(Entries::new());
    }

    match format {
        DocumentFormat::Yaml => yaml_loader::parse(content),
        DocumentFormat::Json => json_loader::parse(content),
        DocumentFormat::Toml => toml_loader::parse(content),
    }
}

/// Only blank lines and `#` comments
fn is_empty_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Flatten a parsed document into entries; the top level must be a mapping with string keys
pub(crate) fn into_entries(document: Value) -> Result<Entries, String> {
    match document {
        Value::Null => Ok(Entries::new()),
        Value::Mapping(mapping) => {
            let mut entries = Entries::new();
            for (key, value) in mapping {
                let key = match key {
                    Value::String(s) => s,
                    other => {
                        return Err(format!(
                            "keys must be strings, found {}",
                            describe(&other)
                        ))
                    }
                };
                entries.insert(key, value);
            }
            Ok(entries)
        }
        other => Err(format!(
            "expected a key/value mapping at the top level, found {}",
            describe(&other)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("config.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("config.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("config.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("config.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("config")), DocumentFormat::Yaml);
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_document("", DocumentFormat::Yaml).unwrap().is_empty());
        assert!(parse_document("  \n", DocumentFormat::Json).unwrap().is_empty());
        assert!(parse_document("# nothing configured\n", DocumentFormat::Yaml)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_top_level_must_be_mapping() {
        let err = parse_document("- a\n- b\n", DocumentFormat::Yaml).unwrap_err();
        assert!(err.contains("expected a key/value mapping"));

        let err = parse_document("1: a\n", DocumentFormat::Yaml).unwrap_err();
        assert!(err.contains("keys must be strings"));
    }

    #[test]
    fn test_load_document_dispatches_on_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"kmer_size": 33, "samples": ["s1"]}}"#).unwrap();
        let entries = load_document(json.path()).unwrap();
        assert_eq!(entries["kmer_size"], Value::Number(33.into()));

        let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(toml, "organelle_database = \"fungus_mt\"").unwrap();
        let entries = load_document(toml.path()).unwrap();
        assert_eq!(entries["organelle_database"], Value::String("fungus_mt".into()));
    }

    #[test]
    fn test_load_document_reports_path() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "samples: [a, b").unwrap();
        let err = load_document(yaml.path()).unwrap_err();
        assert!(err.starts_with("Failed to parse file"));
        assert!(err.contains(&yaml.path().display().to_string()));
    }
}
