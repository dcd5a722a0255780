use anyhow::{Context, Result};
use hatchbox_layout::Model;
use std::path::Path;

/// Writes the model, its layout plan and diagnostics as pretty-printed JSON.
pub fn export_json(model: &Model, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(model).context("serialize model as JSON")?;
    std::fs::write(path, json).with_context(|| format!("write JSON file {}", path.display()))?;
    Ok(())
}
