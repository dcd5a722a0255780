use anyhow::Result;
use hatchbox_base::IncubatorParams;
use hatchbox_io::{ScadOptions, export_scad};
use hatchbox_layout::build_incubator;

fn main() -> Result<()> {
    let model = build_incubator(&IncubatorParams::default())?;
    let options = ScadOptions {
        segments: Some(24),
        ..ScadOptions::default()
    };
    export_scad(&model, "out/incubator.scad", &options)?;
    Ok(())
}
