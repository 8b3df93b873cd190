//! Configuration loading
//!
//! Reads TOML, JSON or YAML files into any `Deserialize` type, picking the
//! format from the file extension, and merges layered configurations where
//! later layers override earlier ones key by key.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load configuration from file (format chosen by extension)
pub fn load_config<T>(path: &Path) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let extension = path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = std::fs::read_to_string(path)?;
    parse_config(&content, &extension)
}

/// Parse configuration text in the given format (`toml`, `json`, `yml`, `yaml`)
pub fn parse_config<T>(content: &str, format: &str) -> crate::Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    match format {
        "toml" => toml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("TOML parse error: {}", e))),
        "json" => serde_json::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("JSON parse error: {}", e))),
        "yml" | "yaml" => serde_yaml::from_str(content)
            .map_err(|e| crate::UtilError::Config(format!("YAML parse error: {}", e))),
        _ => Err(crate::UtilError::Config(
            format!("Unsupported config format: {}", format)
        )),
    }
}

/// Merge two JSON values (second overrides first)
///
/// Objects merge recursively; `null` in the override keeps the base value so
/// that partially-filled layers do not erase defaults.
fn merge_json_values(base: &mut serde_json::Value, override_value: serde_json::Value) {
    match (base, override_value) {
        (serde_json::Value::Object(base_obj), serde_json::Value::Object(override_obj)) => {
            for (key, value) in override_obj {
                match base_obj.get_mut(&key) {
                    Some(existing) => merge_json_values(existing, value),
                    None => {
                        base_obj.insert(key, value);
                    }
                }
            }
        }
        (_, serde_json::Value::Null) => {}
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

/// Merge two configurations (second overrides first)
pub fn merge_configs<T>(base: &mut T, override_config: T) -> crate::Result<()>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    let mut base_value = serde_json::to_value(&*base)
        .map_err(|e| crate::UtilError::Serialization(format!("Base serialization error: {}", e)))?;

    let override_value = serde_json::to_value(override_config)
        .map_err(|e| crate::UtilError::Serialization(format!("Override serialization error: {}", e)))?;

    merge_json_values(&mut base_value, override_value);

    *base = serde_json::from_value(base_value)
        .map_err(|e| crate::UtilError::Serialization(format!("Result deserialization error: {}", e)))?;

    Ok(())
}

/// Check that a configuration serializes to a JSON object
pub fn validate_config<T>(config: &T) -> crate::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_value(config)
        .map_err(|e| crate::UtilError::Config(format!("Config validation error: {}", e)))?;

    if json.is_object() {
        Ok(())
    } else {
        Err(crate::UtilError::Config(
            "Configuration must be a table of settings".to_string()
        ))
    }
}

/// Configuration builder for fluent API
#[derive(Debug)]
pub struct ConfigBuilder<T> {
    config: T,
}

impl<T> ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    /// Create new config builder with defaults
    pub fn new() -> Self {
        Self {
            config: T::default(),
        }
    }

    /// Load from file and merge
    pub fn load_file(mut self, path: &Path) -> crate::Result<Self> {
        let file_config: T = load_config(path)?;
        merge_configs(&mut self.config, file_config)?;
        Ok(self)
    }

    /// Load from file if one was given
    pub fn load_optional_file(self, path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => self.load_file(path),
            None => Ok(self),
        }
    }

    /// Merge with another config
    pub fn merge(mut self, other: T) -> crate::Result<Self> {
        merge_configs(&mut self.config, other)?;
        Ok(self)
    }

    /// Validate and build final config
    pub fn build(self) -> crate::Result<T> {
        validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl<T> Default for ConfigBuilder<T>
where
    T: Default + Serialize + for<'de> Deserialize<'de>,
{
    fn default() -> Self {
        Self::new()
    }
}
