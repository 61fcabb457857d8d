use std::path::Path;
use crate::errors::VexError;
use super::types::VexConfig;
use super::security::validate_security_patterns;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub fn parse_config(path: &Path) -> Result<VexConfig, VexError> {
    if !path.exists() {
        return Err(VexError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(VexError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<VexConfig, VexError> {
    // An empty file deserializes to YAML null
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(VexConfig::default());
    }

    validate_security_patterns(&yaml)?;

    let config: VexConfig = serde_yaml::from_value(yaml)?;
    validate_document(&config)?;
    Ok(config)
}

fn validate_document(config: &VexConfig) -> Result<(), VexError> {
    let Some(doc) = &config.document else {
        return Ok(());
    };

    for (field, value) in [("tooling", &doc.tooling), ("version", &doc.version)] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(VexError::Config(format!("document.{} must not be empty", field)));
        }
    }

    if let Some(tooling) = &doc.tooling {
        if tooling.chars().any(char::is_whitespace) {
            return Err(VexError::Config(format!(
                "document.tooling '{}' must not contain whitespace",
                tooling
            )));
        }
    }

    if doc.author.as_deref().is_some_and(|a| a.trim().is_empty()) {
        warn!("document.author is empty, using placeholder");
    }

    Ok(())
}
