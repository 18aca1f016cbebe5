//! Override file handling.
//! An override file supplies silent answers: every key it defines is bound
//! without asking the user.

use crate::error::{Error, Result};
use crate::settings::Settings;
use indexmap::IndexMap;
use log::debug;
use std::path::Path;

/// Variable name to value, loaded from an override file.
pub type OverrideTable = IndexMap<String, String>;

/// Loads the override file of a template.
///
/// # Arguments
/// * `override_path` - Path to the override file
/// * `settings` - Supplies the reserved variable names
///
/// # Returns
/// * `Result<OverrideTable>` - The overrides; empty when the file does not exist
///
/// # Errors
/// * `Error::MalformedOverrides` if the file is not a flat table of scalars
/// * `Error::ReservedVariable` if a key is reserved
pub fn load_overrides<P: AsRef<Path>>(override_path: P, settings: &Settings) -> Result<OverrideTable> {
    let override_path = override_path.as_ref();
    if !override_path.is_file() {
        debug!("No override file at {}", override_path.display());
        return Ok(OverrideTable::new());
    }

    let content =
        std::fs::read_to_string(override_path).map_err(|e| Error::io(override_path, e))?;
    parse_overrides(&content, override_path, settings)
}

/// Parses override file content. Scalars are bound by their string form.
pub fn parse_overrides<P: AsRef<Path>>(
    content: &str,
    override_path: P,
    settings: &Settings,
) -> Result<OverrideTable> {
    let override_path = override_path.as_ref();
    let malformed = |reason: String| Error::MalformedOverrides {
        path: override_path.to_path_buf(),
        reason,
    };

    let raw: IndexMap<String, toml::Value> =
        toml::from_str(content).map_err(|e| malformed(e.to_string()))?;

    let mut overrides = OverrideTable::with_capacity(raw.len());
    for (key, value) in raw {
        if settings.is_reserved(&key) {
            return Err(Error::ReservedVariable { path: override_path.to_path_buf(), name: key });
        }
        let value = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            other => {
                return Err(malformed(format!(
                    "value of '{}' must be a string, number or boolean, found {}",
                    key,
                    other.type_str()
                )))
            }
        };
        overrides.insert(key, value);
    }

    debug!("Loaded {} override(s) from {}", overrides.len(), override_path.display());
    Ok(overrides)
}
