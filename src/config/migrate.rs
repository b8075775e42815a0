//! Keeps an existing YAML config file in step with the current `Config` keys.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys the current version expects, with their documented default.
fn expected_keys() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match defaults {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Config(format!("{} is not a YAML mapping", path.display()))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Names of expected keys absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let expected = expected_keys()?;

    Ok(expected
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys with their defaults. Existing values, including
/// `database`, are never touched. Returns the keys that were added.
pub fn add_missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let expected = expected_keys()?;
    let mut added = Vec::new();

    for (k, v) in expected {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    info(format!("Config migration performed: added {}", added.join(", ")));
    Ok(added)
}
