use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hatchbox_base::IncubatorParams;
use hatchbox_io::{ExportFormat, ScadOptions, export_model, load_params, params_to_toml};
use hatchbox_layout::{Diagnostic, build_incubator};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "hatchbox")]
#[command(about = "Generate ventilated fish-hatching incubator boxes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    /// Print the effective parameters as TOML.
    PrintConfig(ParamArgs),
    /// Load and validate a config file.
    CheckConfig(CheckArgs),
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    params: ParamArgs,
    #[arg(short, long)]
    out: PathBuf,
    #[arg(long, value_enum)]
    format: Option<Format>,
    /// OpenSCAD `$fn` for spheres and cylinders.
    #[arg(long)]
    segments: Option<u32>,
    #[arg(long)]
    name: Option<String>,
}

#[derive(Args)]
struct ParamArgs {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    depth: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    #[arg(long)]
    thickness: Option<f64>,
    #[arg(long)]
    hole_distance: Option<f64>,
    #[arg(long)]
    hole_diameter: Option<f64>,
    #[arg(long)]
    fillet_radius: Option<f64>,
}

#[derive(Args)]
struct CheckArgs {
    #[arg(short, long)]
    config: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Scad,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Scad => ExportFormat::Scad,
            Format::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::PrintConfig(args) => print_config(args),
        Command::CheckConfig(args) => check_config(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let params = resolve_params(&args.params)?;
    info!(model = %params.label(), "generating");

    let mut model = build_incubator(&params).context("failed to build incubator")?;
    if let Some(name) = args.name {
        model.name = name;
    }
    for record in &model.diagnostics {
        log_diagnostic(record);
    }

    let options = ScadOptions {
        segments: args.segments,
        header: Vec::new(),
    };
    export_model(&model, &args.out, args.format.map(Into::into), &options)
        .context("export failed")?;
    Ok(())
}

fn print_config(args: ParamArgs) -> Result<()> {
    let params = resolve_params(&args)?;
    print!("{}", params_to_toml(&params)?);
    Ok(())
}

fn check_config(args: CheckArgs) -> Result<()> {
    let params = load_params(&args.config)?;
    params
        .validate()
        .with_context(|| format!("invalid config {}", args.config.display()))?;
    info!(path = %args.config.display(), model = %params.label(), "config is valid");
    Ok(())
}

/// Defaults, then the config file, then command-line values.
fn resolve_params(args: &ParamArgs) -> Result<IncubatorParams> {
    let mut params = match &args.config {
        Some(path) => load_params(path)?,
        None => IncubatorParams::default(),
    };

    let overrides = [
        (&mut params.width, args.width),
        (&mut params.depth, args.depth),
        (&mut params.height, args.height),
        (&mut params.thickness, args.thickness),
        (&mut params.hole_distance, args.hole_distance),
        (&mut params.hole_diameter, args.hole_diameter),
        (&mut params.fillet_radius, args.fillet_radius),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }
    Ok(params)
}

fn log_diagnostic(record: &Diagnostic) {
    match record {
        Diagnostic::Axis(grid) => info!(
            axis = %grid.axis,
            span = grid.span,
            count = grid.count,
            spacing = grid.spacing,
            padding = grid.padding,
            start = grid.start,
            "hole grid"
        ),
        other => info!("{other}"),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
