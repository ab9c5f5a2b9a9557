//! # surfcmp
//!
//! Compares FEM, spline, and true solution samples of one test case.
//!
//! ```sh
//! surfcmp view "sin(x) + cos(y)/weights/weight = 5"
//! surfcmp split solver.log "sin(x) * cos(y)/weights/weight = 1"
//! surfcmp sample "sin(x) * cos(y)" dataTrue.txt
//! ```
//!
//! Logging is controlled with `RUST_LOG`.

use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use surfcmp_core::{
    CaseDir, Comparison, TestFunction, diagonal_points,
    split::{split_sections, write_sections},
    write::write_samples_file,
};
use surfcmp_plot::{Figures, ShowConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Case directory opened when none is given.
const DEFAULT_CASE: &str = "sin(x) + cos(y)/weights/weight = 5";

#[derive(Parser, Debug)]
#[command(name = "surfcmp", version)]
#[command(about = "Compare FEM, spline, and true solution samples on a shared grid")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the surface and projection figures for a case directory
    View(ViewArgs),

    /// Split a solver log into the three data files of a case directory
    Split {
        /// Log containing `FEM solution`, `Spline solution` and `True solution` sections
        log: PathBuf,

        /// Case directory to write (created if missing)
        dir: PathBuf,
    },

    /// Write samples of an analytic function along the diagonal
    Sample {
        /// `sin(x)*cos(y)`, `sin(x)+cos(y)`, or a constant
        function: TestFunction,

        /// Output file
        out: PathBuf,

        /// Number of points
        #[arg(long, default_value_t = 101)]
        count: usize,

        /// Distance between consecutive points along each axis
        #[arg(long, default_value_t = 0.1)]
        step: f64,
    },
}

#[derive(clap::Args, Debug)]
struct ViewArgs {
    /// Directory holding dataFEM.txt, dataSpline.txt and dataTrue.txt
    #[arg(default_value = DEFAULT_CASE)]
    dir: PathBuf,

    /// Figures to show
    #[arg(long, value_enum, default_value_t = FigureChoice::Both)]
    figure: FigureChoice,
}

impl Default for ViewArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CASE),
            figure: FigureChoice::Both,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FigureChoice {
    Both,
    Surfaces,
    Projection,
}

impl From<FigureChoice> for Figures {
    fn from(choice: FigureChoice) -> Self {
        match choice {
            FigureChoice::Both => Figures::Both,
            FigureChoice::Surfaces => Figures::Surfaces,
            FigureChoice::Projection => Figures::Projection,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surfcmp=info,surfcmp_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command.unwrap_or(Command::View(ViewArgs::default()))) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::View(args) => view(args),
        Command::Split { log, dir } => split(log, dir),
        Command::Sample {
            function,
            out,
            count,
            step,
        } => sample(function, out, count, step),
    }
}

fn view(args: ViewArgs) -> Result<()> {
    let case = CaseDir::new(args.dir);
    let comparison = Comparison::load(&case)
        .with_context(|| format!("failed to compare case `{}`", case.description()))?;

    info!("opening figures; close the window to exit");
    let config = ShowConfig::new()
        .title(case.description())
        .figures(args.figure.into());
    surfcmp_plot::show(comparison, config)
        .map_err(|e| anyhow!("failed to open figure window: {e}"))
}

fn split(log: PathBuf, dir: PathBuf) -> Result<()> {
    let file = File::open(&log).with_context(|| format!("failed to open `{}`", log.display()))?;
    let sections = split_sections(BufReader::new(file))?;

    let case = CaseDir::new(dir);
    write_sections(&sections, &case)?;
    info!(case = %case.description(), "wrote case files");
    Ok(())
}

fn sample(function: TestFunction, out: PathBuf, count: usize, step: f64) -> Result<()> {
    let samples = function.sample(&diagonal_points(count, step));
    write_samples_file(&out, &samples)
        .with_context(|| format!("failed to write `{}`", out.display()))?;
    info!(%function, samples = samples.len(), out = %out.display(), "wrote samples");
    Ok(())
}
