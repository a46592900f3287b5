use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Configuration keys enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Token,
    ApiUrl,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Token => "token",
            ConfigKey::ApiUrl => "api_url",
        }
    }

    /// Get all config keys
    pub fn all() -> &'static [ConfigKey] {
        &[ConfigKey::Token, ConfigKey::ApiUrl]
    }
}

/// Filename for the project-specific configuration within the .ghcl directory.
pub const PROJECT_CONFIG_FILENAME: &str = "config.json";
/// Directory name for project-specific configuration.
pub const PROJECT_CONFIG_DIR: &str = ".ghcl";

/// Parses a JSON configuration file content into a map of configuration values.
///
/// Expects `content` to be a JSON object with configuration keys
/// (e.g., {"token": "...", "api_url": "..."}). Unknown keys are skipped.
///
/// - Returns an empty HashMap if the input `content` is empty or contains only whitespace.
/// - Returns an `Err` if the JSON parsing fails or the document is not an object.
pub fn parse_config(content: &[u8]) -> Result<HashMap<ConfigKey, Value>> {
    if content.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(HashMap::new());
    }

    let value: Value = serde_json::from_slice(content).context("Failed to parse config JSON")?;

    let mut config_map = HashMap::new();

    if let Value::Object(map) = &value {
        for key in ConfigKey::all() {
            if let Some(val) = map.get(key.as_str()) {
                config_map.insert(*key, val.clone());
            }
        }
        return Ok(config_map);
    }

    Err(anyhow::anyhow!("Config must be an object"))
}

/// Merges `updates` into `base_config` and returns a new configuration map.
///
/// If a key exists in both, the value from `updates` wins.
pub fn update_config(
    base_config: &HashMap<ConfigKey, Value>,
    updates: &HashMap<ConfigKey, Value>,
) -> HashMap<ConfigKey, Value> {
    let mut new_config = base_config.clone();
    for (key, value) in updates {
        new_config.insert(*key, value.clone());
    }
    new_config
}

/// Loads `.ghcl/config.json` under `dir`. A missing file is an empty config.
pub fn load_project_config(dir: &Path) -> Result<HashMap<ConfigKey, Value>> {
    let path = dir.join(PROJECT_CONFIG_DIR).join(PROJECT_CONFIG_FILENAME);
    match std::fs::read(&path) {
        Ok(content) => parse_config(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Returns a non-empty string value for `key`, if configured.
pub fn get_str(config: &HashMap<ConfigKey, Value>, key: ConfigKey) -> Option<String> {
    config
        .get(&key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
