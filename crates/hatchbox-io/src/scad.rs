use anyhow::{Context, Result};
use hatchbox_csg::Solid;
use hatchbox_layout::Model;
use std::path::Path;

const INDENT: &str = "    ";

/// Extra content for a rendered OpenSCAD file.
#[derive(Clone, Debug, Default)]
pub struct ScadOptions {
    /// Circle resolution written as `$fn`; OpenSCAD's own default when `None`.
    pub segments: Option<u32>,
    /// Comment lines at the top of the file, without the `//` prefix.
    pub header: Vec<String>,
}

/// Prints `solid` as OpenSCAD source.
///
/// Nested unions, and differences whose base is itself a difference, are
/// flattened into a single block, which OpenSCAD evaluates the same way.
pub fn render_scad(solid: &Solid, options: &ScadOptions) -> String {
    let mut out = String::new();
    for line in &options.header {
        out.push_str(&format!("// {line}\n"));
    }
    if let Some(segments) = options.segments {
        out.push_str(&format!("$fn = {segments};\n"));
    }
    if !out.is_empty() {
        out.push('\n');
    }
    write_node(&mut out, solid, 0);
    out
}

pub fn export_scad(model: &Model, path: impl AsRef<Path>, options: &ScadOptions) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let mut options = options.clone();
    options.header.extend(model_header(model));
    let source = render_scad(&model.solid, &options);

    std::fs::write(path, source)
        .with_context(|| format!("write OpenSCAD file {}", path.display()))?;
    Ok(())
}

fn model_header(model: &Model) -> Vec<String> {
    let p = &model.params;
    let mut lines = vec![
        format!("{} (generated by hatchbox)", model.name),
        format!(
            "width = {}, depth = {}, height = {}, thickness = {}",
            p.width, p.depth, p.height, p.thickness
        ),
        format!(
            "hole_distance = {}, hole_diameter = {}, fillet_radius = {}",
            p.hole_distance, p.hole_diameter, p.fillet_radius
        ),
    ];
    lines.extend(model.diagnostics.iter().map(ToString::to_string));
    lines
}

fn write_node(out: &mut String, solid: &Solid, depth: usize) {
    let pad = INDENT.repeat(depth);
    match solid {
        Solid::Cuboid { size } => {
            out.push_str(&format!("{pad}cube([{}, {}, {}]);\n", size.x, size.y, size.z));
        }
        Solid::Sphere { radius } => out.push_str(&format!("{pad}sphere(r = {radius});\n")),
        Solid::Cylinder { radius, height } => {
            out.push_str(&format!("{pad}cylinder(r = {radius}, h = {height});\n"));
        }
        Solid::Translate { offset, child } => {
            out.push_str(&format!(
                "{pad}translate([{}, {}, {}])\n",
                offset.x, offset.y, offset.z
            ));
            write_node(out, child, depth + 1);
        }
        Solid::Rotate { angles, child } => {
            out.push_str(&format!(
                "{pad}rotate([{}, {}, {}])\n",
                angles.x, angles.y, angles.z
            ));
            write_node(out, child, depth + 1);
        }
        Solid::Union { .. } => {
            let mut operands = Vec::new();
            union_operands(solid, &mut operands);
            write_block(out, "union", &operands, depth);
        }
        Solid::Difference { .. } => {
            let mut operands = Vec::new();
            difference_operands(solid, &mut operands);
            write_block(out, "difference", &operands, depth);
        }
        Solid::Minkowski { base, tool } => {
            write_block(out, "minkowski", &[base.as_ref(), tool.as_ref()], depth);
        }
    }
}

fn write_block(out: &mut String, name: &str, operands: &[&Solid], depth: usize) {
    let pad = INDENT.repeat(depth);
    out.push_str(&format!("{pad}{name}() {{\n"));
    for operand in operands {
        write_node(out, operand, depth + 1);
    }
    out.push_str(&format!("{pad}}}\n"));
}

fn union_operands<'a>(solid: &'a Solid, operands: &mut Vec<&'a Solid>) {
    match solid {
        Solid::Union { children } => {
            for child in children {
                union_operands(child, operands);
            }
        }
        other => operands.push(other),
    }
}

// only the base flattens: a - b - c == a - (b + c), not a - (b - c)
fn difference_operands<'a>(solid: &'a Solid, operands: &mut Vec<&'a Solid>) {
    match solid {
        Solid::Difference { base, tools } => {
            difference_operands(base, operands);
            operands.extend(tools.iter().map(|tool| tool.as_ref()));
        }
        other => operands.push(other),
    }
}
