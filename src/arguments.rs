//! Caller-supplied variable values.
//! Arguments have the highest precedence and suppress the matching prompts.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::io::Read;

/// Variable name to value, supplied before resolution begins.
pub type ArgumentTable = IndexMap<String, String>;

/// Parses a `KEY=VALUE` pair. The value may itself contain `=`.
///
/// Usable as a clap `value_parser`.
pub fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid KEY=VALUE: empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Converts a JSON object of scalar answers into an argument table.
///
/// `null` yields an empty table so that empty stdin is not an error.
pub fn arguments_from_json(value: serde_json::Value) -> Result<ArgumentTable> {
    let object = match value {
        serde_json::Value::Null => return Ok(ArgumentTable::new()),
        serde_json::Value::Object(object) => object,
        other => {
            return Err(Error::ValidationError(format!(
                "answers must be a JSON object, found '{other}'"
            )))
        }
    };

    let mut arguments = ArgumentTable::with_capacity(object.len());
    for (key, value) in object {
        let value = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            _ => {
                return Err(Error::ValidationError(format!(
                    "answer '{key}' must be a string, number or boolean"
                )))
            }
        };
        arguments.insert(key, value);
    }
    Ok(arguments)
}

/// Reads a JSON object of answers from stdin.
pub fn load_from_stdin() -> Result<ArgumentTable> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::io("<stdin>", e))?;
    let buffer = buffer.trim();
    if buffer.is_empty() {
        return Ok(ArgumentTable::new());
    }
    let value = serde_json::from_str(buffer).map_err(|e| {
        Error::ValidationError(format!("failed to parse answers from stdin as JSON: {e}"))
    })?;
    arguments_from_json(value)
}

/// Merges argument tables; later tables win on conflicting keys.
pub fn merge_arguments<I>(tables: I) -> ArgumentTable
where
    I: IntoIterator<Item = ArgumentTable>,
{
    let mut merged = ArgumentTable::new();
    for table in tables {
        merged.extend(table);
    }
    merged
}
