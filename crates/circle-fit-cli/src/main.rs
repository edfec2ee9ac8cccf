//! circlefit CLI: fit a circle to 2-D points from a CSV file.

use std::path::PathBuf;

use circle_fit::{fit_circle, FitReport, FitResult, LengthUnit, Overlay, Point2d, Viewport};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "circlefit")]
#[command(about = "Least-squares circle fit for planar point clouds")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a circle to points read from a CSV file.
    Fit {
        /// CSV file with x,y columns (an `x_<unit>,y_<unit>` header is optional).
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fit the built-in demonstration points.
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Write the built-in demonstration points as CSV.
    ExportSample {
        /// Destination file; defaults to `points_<unit>.csv`.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Unit used to label the CSV columns.
        #[arg(long, value_enum, default_value_t = CliUnit::In)]
        unit: CliUnit,
    },
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    /// Display unit. Defaults to the unit named in the CSV header, else inches.
    #[arg(long, value_enum)]
    unit: Option<CliUnit>,

    /// Print machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Include a screen-space overlay for a WIDTHxHEIGHT preview (JSON only).
    #[arg(long, value_parser = parse_viewport_size, requires = "json")]
    viewport: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliUnit {
    In,
    Mm,
}

impl From<CliUnit> for LengthUnit {
    fn from(unit: CliUnit) -> Self {
        match unit {
            CliUnit::In => LengthUnit::Inch,
            CliUnit::Mm => LengthUnit::Millimeter,
        }
    }
}

fn parse_viewport_size(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        return Err(format!("viewport size must be positive, got {w}x{h}"));
    }
    Ok((w, h))
}

/// Everything printed by `--json`.
#[derive(Debug, Serialize)]
struct FitOutput {
    report: FitReport,
    result: FitResult,
    skipped_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    residuals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<Overlay>,
}

fn render(
    points: &[Point2d],
    skipped_rows: usize,
    unit: LengthUnit,
    output: &OutputArgs,
) -> CliResult<String> {
    let result = fit_circle(points);
    if !result.is_fitted() {
        warn!(points = points.len(), "no circle fits these points");
    }
    let report = FitReport::new(&result, points.len(), unit);

    if !output.json {
        let mut text = report.to_string();
        if skipped_rows > 0 {
            text.push_str(&format!("\nSkipped rows:    {skipped_rows}"));
        }
        return Ok(text);
    }

    let overlay = output.viewport.and_then(|(w, h)| {
        Viewport::fit(points, &result, w, h).map(|vp| Overlay::build(points, &result, &vp))
    });
    let out = FitOutput {
        report,
        result,
        skipped_rows,
        residuals: result.circle().map(|c| c.residuals(points)),
        overlay,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Unit to display in: the one asked for, else the file's header unit, else inches.
fn display_unit(requested: Option<CliUnit>, header: Option<LengthUnit>) -> LengthUnit {
    requested
        .map(LengthUnit::from)
        .or(header)
        .unwrap_or_default()
}

fn export_path(out: Option<PathBuf>, unit: LengthUnit) -> PathBuf {
    out.unwrap_or_else(|| point_io::default_export_file_name(unit).into())
}

/// Execute a command and return the text to print.
fn run(cli: Cli) -> CliResult<String> {
    match cli.command {
        Commands::Fit { input, output } => {
            let import = point_io::read_points_file(&input)?;
            info!(path = %input.display(), points = import.points.len(), "loaded points");
            let unit = display_unit(output.unit, import.unit);
            render(&import.points, import.skipped, unit, &output)
        }
        Commands::Sample { output } => {
            let unit = display_unit(output.unit, None);
            render(&point_io::sample_points(), 0, unit, &output)
        }
        Commands::ExportSample { out, unit } => {
            let unit = LengthUnit::from(unit);
            let path = export_path(out, unit);
            point_io::write_points_file(&path, &point_io::sample_points(), unit)?;
            Ok(format!("Wrote {}", path.display()))
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("{}", run(Cli::parse())?);
    Ok(())
}
