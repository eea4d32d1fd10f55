// yaml_loader.rs - YAML key/value documents

use super::{into_entries, Entries};
use serde_yaml::Value;

pub fn parse(content: &str) -> Result<Entries, String> {
    let document: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
    into_entries(document)
}
