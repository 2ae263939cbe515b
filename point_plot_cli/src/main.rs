use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use point_plot::{
    geometry::{oriented_within_radius, within_radius, OrientedPoint3, Point3},
    io::{
        options::{read_options_json, PlotOptions},
        read_oriented_points_from, read_points_from, Input,
    },
    plot::{Figure, DEFAULT_QUIVER_LENGTH},
};

fn no_render() -> bool {
    std::env::var("POINT_PLOT_TEST").is_ok()
}

fn init_logging() {
    if let Ok(path) = std::env::var("POINT_PLOT_LOG") {
        match File::create(&path) {
            Ok(file) => {
                env_logger::Builder::from_default_env()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Failed to create log file {}: {}", path, e);
                env_logger::Builder::from_default_env().init();
            }
        }
    } else {
        env_logger::Builder::from_default_env().init();
    }
}

#[derive(Parser)]
#[command(name = "point_plot_cli", version)]
struct Cli {
    /// JSON file with window and color settings
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot x,y,z records as a connected path with markers.
    Path {
        /// Input files; standard input when none are given or for "-".
        files: Vec<PathBuf>,
        /// Use the first record as a reference and keep only the points
        /// within this distance of it.
        #[arg(long)]
        within: Option<f64>,
        /// Keep the unit-cube plot box instead of matching the data extents.
        #[arg(long)]
        no_box_aspect: bool,
        #[arg(long)]
        title: Option<String>,
    },
    /// Plot x,y,z,nx,ny,nz records as markers with normal arrows.
    Quiver {
        /// Input files; standard input when none are given or for "-".
        files: Vec<PathBuf>,
        /// Arrow length as a multiple of each normal.
        #[arg(long, default_value_t = DEFAULT_QUIVER_LENGTH)]
        length: f64,
        /// Use the first record as a reference and keep only the points
        /// within this distance of it.
        #[arg(long)]
        within: Option<f64>,
        /// Match the plot box to the data extents.
        #[arg(long)]
        box_aspect: bool,
        #[arg(long)]
        title: Option<String>,
    },
}

/// Splits off the first record as a reference and keeps the rest that lie
/// within `radius` of it.
fn filter_path(points: &[Point3], radius: f64) -> Vec<Point3> {
    let Some((reference, rest)) = points.split_first() else {
        return Vec::new();
    };
    let kept = within_radius(rest, *reference, radius);
    info!(
        "kept {} of {} points within {} of the reference",
        kept.len(),
        rest.len(),
        radius
    );
    kept
}

fn filter_oriented(
    points: &[OrientedPoint3],
    radius: f64,
) -> (Option<OrientedPoint3>, Vec<OrientedPoint3>) {
    let Some((reference, rest)) = points.split_first() else {
        return (None, Vec::new());
    };
    let kept = oriented_within_radius(rest, reference.point, radius);
    info!(
        "kept {} of {} points within {} of the reference",
        kept.len(),
        rest.len(),
        radius
    );
    (Some(*reference), kept)
}

fn describe(figure: &Figure, noun: &str) -> String {
    match figure.box_aspect {
        Some(a) => format!(
            "Plotting {} {} (box aspect {:.3} x {:.3} x {:.3})",
            figure.len(),
            noun,
            a[0],
            a[1],
            a[2]
        ),
        None => format!("Plotting {} {}", figure.len(), noun),
    }
}

#[cfg(feature = "render")]
fn display(figure: &Figure, options: &PlotOptions, noun: &str) -> ExitCode {
    if no_render() {
        println!("{}", describe(figure, noun));
        return ExitCode::SUCCESS;
    }
    match point_plot::render::show(figure, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error displaying plot: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "render"))]
fn display(figure: &Figure, _options: &PlotOptions, noun: &str) -> ExitCode {
    if !no_render() {
        warn!("built without the render feature; printing a summary instead");
    }
    println!("{}", describe(figure, noun));
    ExitCode::SUCCESS
}

fn sources(files: &[PathBuf]) -> String {
    Input::from_args(files)
        .iter()
        .map(Input::name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let options = match &cli.config {
        Some(path) => match read_options_json(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => PlotOptions::default(),
    };

    match cli.command {
        Commands::Path {
            files,
            within,
            no_box_aspect,
            title,
        } => match read_points_from(&Input::from_args(&files)) {
            Ok(pts) => {
                let pts = match within {
                    Some(radius) => filter_path(&pts, radius),
                    None => pts,
                };
                if pts.is_empty() {
                    warn!("no points read");
                }
                let mut figure = Figure::path(pts);
                if no_box_aspect {
                    figure = figure.with_box_aspect(false);
                }
                if let Some(title) = title {
                    figure = figure.with_title(title);
                }
                display(&figure, &options, "points")
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", sources(&files), e);
                ExitCode::FAILURE
            }
        },
        Commands::Quiver {
            files,
            length,
            within,
            box_aspect,
            title,
        } => match read_oriented_points_from(&Input::from_args(&files)) {
            Ok(pts) => {
                let (reference, pts) = match within {
                    Some(radius) => filter_oriented(&pts, radius),
                    None => (None, pts),
                };
                if pts.is_empty() {
                    warn!("no points read");
                }
                let mut figure = Figure::quiver(pts, length).with_box_aspect(box_aspect);
                if let Some(r) = reference {
                    figure = figure.with_arrow(r.point, r.normal);
                }
                if let Some(title) = title {
                    figure = figure.with_title(title);
                }
                display(&figure, &options, "oriented points")
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", sources(&files), e);
                ExitCode::FAILURE
            }
        },
    }
}
