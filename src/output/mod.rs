// mod.rs - Writers for generated files

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cli::config::PipelineConfig;

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent).map_err(|e| {
            format!("Failed to create parent directory '{}': {}", parent.display(), e)
        })?;
    }
    Ok(())
}

fn generated_header() -> String {
    format!(
        "# Generated by fastmito v{} at {}\n",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Write the resolved config as YAML for the workflow engine
pub fn write_resolved_config(file_path: &Path, config: &PipelineConfig) -> Result<(), String> {
    let yaml = config.to_yaml()?;
    ensure_parent_dir(file_path)?;

    let file = File::create(file_path).map_err(|e| {
        format!("Failed to create config file '{}': {}", file_path.display(), e)
    })?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(generated_header().as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writer
        .write_all(yaml.as_bytes())
        .map_err(|e| format!("Write error: {}", e))?;
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;

    log::info!("resolved config written to: {}", file_path.display());
    Ok(())
}

/// Write a plain text file, creating parent directories
pub fn write_text(file_path: &Path, content: &str) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    std::fs::write(file_path, content)
        .map_err(|e| format!("Failed to write file '{}': {}", file_path.display(), e))?;
    println!("✅ Written to: {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loaders::load_document;
    use serde_yaml::Value;

    #[test]
    fn test_resolved_config_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fastmito.config.yaml");

        let config = PipelineConfig {
            reads_dir: Some("/data/reads".to_string()),
            samples: Some(vec!["a".to_string()]),
            kmer_size: Some(39),
            ..Default::default()
        };
        write_resolved_config(&path, &config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Generated by fastmito v"));

        let entries = load_document(&path).unwrap();
        assert_eq!(entries["reads_dir"], Value::String("/data/reads".into()));
        assert_eq!(entries["kmer_size"], Value::Number(39.into()));
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_write_text_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("s1").join("config.txt");
        write_text(&path, "Project name = s1\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Project name = s1\n");
    }
}
