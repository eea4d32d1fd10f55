// value.rs - Helpers for loosely typed key/value document entries

use serde_yaml::Value;

/// Null, empty or whitespace-only strings and empty collections never overwrite
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

/// Short name of the value kind, used in error messages
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Compact single-line rendering of a value
pub fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

/// Render a scalar as a command line argument
pub fn to_arg(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => render(other),
    }
}

pub fn as_text(key: &str, value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!(
            "'{}' expects a string, found {}: {}",
            key,
            describe(other),
            render(other)
        )),
    }
}

/// Non-negative integer; quoted integers ("300") are accepted
pub fn as_count(key: &str, value: &Value) -> Result<u32, String> {
    let parsed = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let number = parsed.ok_or_else(|| {
        format!(
            "'{}' expects an integer, found {}: {}",
            key,
            describe(value),
            render(value)
        )
    })?;

    u32::try_from(number)
        .map_err(|_| format!("'{}' must be a non-negative integer, got {}", key, number))
}

pub fn as_bool(key: &str, value: &Value) -> Result<bool, String> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => Err(format!("'{}' expects true or false, got '{}'", key, s)),
        },
        other => Err(format!(
            "'{}' expects true or false, found {}: {}",
            key,
            describe(other),
            render(other)
        )),
    }
}
