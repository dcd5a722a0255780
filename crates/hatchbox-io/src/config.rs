use anyhow::{Context, Result};
use hatchbox_base::IncubatorParams;
use std::path::Path;

/// Reads parameters from a TOML file; missing keys keep their defaults.
pub fn load_params(path: impl AsRef<Path>) -> Result<IncubatorParams> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_params(&text).with_context(|| format!("parse config file {}", path.display()))
}

pub fn parse_params(text: &str) -> Result<IncubatorParams> {
    Ok(toml::from_str(text)?)
}

pub fn params_to_toml(params: &IncubatorParams) -> Result<String> {
    toml::to_string(params).context("serialize parameters as TOML")
}
