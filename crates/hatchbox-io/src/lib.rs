pub mod config;
pub mod json;
pub mod scad;

pub use config::{load_params, params_to_toml, parse_params};
pub use json::export_json;
pub use scad::{ScadOptions, export_scad, render_scad};

use anyhow::{Result, bail};
use hatchbox_layout::Model;
use std::path::Path;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Scad,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "scad" => Some(Self::Scad),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Writes `model` to `path`, picking the format from the extension unless
/// one is given.
pub fn export_model(
    model: &Model,
    path: impl AsRef<Path>,
    format: Option<ExportFormat>,
    options: &ScadOptions,
) -> Result<ExportFormat> {
    let path = path.as_ref();
    let Some(format) = format.or_else(|| ExportFormat::from_path(path)) else {
        bail!(
            "cannot tell the output format of {}; use a .scad or .json extension",
            path.display()
        );
    };

    match format {
        ExportFormat::Scad => export_scad(model, path, options)?,
        ExportFormat::Json => export_json(model, path)?,
    }
    info!(path = %path.display(), ?format, model = %model.name, "export complete");
    Ok(format)
}
