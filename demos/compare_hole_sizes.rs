use anyhow::Result;
use hatchbox_base::IncubatorParams;
use hatchbox_layout::build_incubator;

fn main() -> Result<()> {
    for hole_diameter in [0.5, 1.0, 2.0, 4.0] {
        let model = build_incubator(&IncubatorParams {
            hole_diameter,
            ..IncubatorParams::default()
        })?;
        let plan = &model.plan;
        println!(
            "{:>4} mm: {}x{}x{} holes, {} nodes",
            hole_diameter,
            plan.width.count,
            plan.depth.count,
            plan.height.count,
            model.solid.node_count()
        );
    }
    Ok(())
}
