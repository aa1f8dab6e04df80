use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use kitchenkit::core::units::format_length;
use kitchenkit::{
    init_logging, Config, DisplaySettings, LayoutEngine, LayoutMode, MeasurementReport,
    PlannerState, BUILD_DATE, VERSION,
};

const USAGE: &str = "\
Usage: kitchenkit [OPTIONS] [PROJECT]

Print validation, checklist, bill of materials and measurements for a
kitchen project as JSON. Without PROJECT a template kitchen is used.

Options:
  --layout <MODE>   Template layout when no project is given (single, galley, l, u, g, island, peninsula)
  --config <PATH>   Config file (TOML or JSON)
  --csv             Print the bill of materials as CSV instead
  -V, --version     Print version
  -h, --help        Print this help";

#[derive(Debug, Default)]
struct Args {
    project: Option<PathBuf>,
    config: Option<PathBuf>,
    layout: Option<LayoutMode>,
    csv: bool,
}

enum Command {
    Run(Args),
    Help,
    Version,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--csv" => args.csv = true,
            "--config" => {
                let path = argv.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--layout" => {
                let mode = argv.next().context("--layout needs a mode")?;
                args.layout = Some(mode.parse().map_err(anyhow::Error::msg)?);
            }
            other if other.starts_with('-') => bail!("Unknown option: {}", other),
            other => {
                if args.project.is_some() {
                    bail!("Only one project file may be given");
                }
                args.project = Some(PathBuf::from(other));
            }
        }
    }
    Ok(Command::Run(args))
}

/// Load the config, returning the file it belongs to when one is known.
fn load_config(path: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match path {
        Some(path) => {
            let config = Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            Ok((config, Some(path)))
        }
        None => match Config::default_path() {
            Ok(path) => {
                let config = Config::load_or_default(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?;
                Ok((config, Some(path)))
            }
            Err(err) => {
                tracing::warn!("{}, using default config", err);
                Ok((Config::default(), None))
            }
        },
    }
}

/// Record `project` in the recent files list. Failing to write the config
/// is not fatal.
fn remember_project(config: &mut Config, config_path: Option<&Path>, project: &Path) {
    let project = project.canonicalize().unwrap_or_else(|_| project.to_path_buf());
    config.add_recent_file(project);
    if let Some(path) = config_path {
        if let Err(err) = config.save_to_file(path) {
            tracing::warn!(path = %path.display(), "Could not update recent files: {}", err);
        }
    }
}

/// Headline lengths in the configured display units.
fn display_lengths(report: &MeasurementReport, display: &DisplaySettings) -> serde_json::Value {
    let length = |cm: f64| format_length(cm, display.measurement_system, display.precision);
    serde_json::json!({
        "wallA": length(report.runs.wall_a),
        "wallB": length(report.runs.wall_b),
        "wallC": length(report.runs.wall_c),
        "worktop": length(report.total_worktop_length),
    })
}

fn run(args: Args) -> anyhow::Result<()> {
    let (mut config, config_path) = load_config(args.config)?;
    let mut planner = PlannerState::default().with_settings(
        LayoutEngine::new(config.layout.clone()),
        config.clearance.clone(),
        config.history.capacity,
    );

    match &args.project {
        Some(path) => {
            planner.load_from_file(path)?;
            remember_project(&mut config, config_path.as_deref(), path);
        }
        None => {
            let mode = args.layout.unwrap_or(config.display.default_layout);
            planner.new_project("Untitled Kitchen", mode);
        }
    }

    if args.csv {
        print!("{}", planner.bom().to_csv());
        return Ok(());
    }

    let measurements = planner.measurements();
    let report = serde_json::json!({
        "project": planner.project().name,
        "layoutType": planner.project().mode,
        "validation": planner.validation(),
        "checklist": planner.checklist(),
        "bom": planner.bom(),
        "lengths": display_lengths(&measurements, &config.display),
        "measurements": measurements,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    match parse_args(std::env::args().skip(1))? {
        Command::Help => println!("{}", USAGE),
        Command::Version => println!("kitchenkit {} ({})", VERSION, BUILD_DATE),
        Command::Run(args) => run(args)?,
    }
    Ok(())
}
