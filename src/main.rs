mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shapes::{ParseError, ShapeDraft, ShapeType, ValidationError};
use tracing_subscriber::EnvFilter;

use crate::config::ViewerConfig;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("invalid shape: {0}")]
    Invalid(#[from] ValidationError),
    #[error("no shape at index {index}; the drawing has {len}")]
    NoSuchShape { index: usize, len: usize },
    #[error("refusing to save an empty drawing")]
    EmptySave,
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "shapeview", about = "Inspect and edit .shapefile drawings")]
struct Cli {
    /// Viewport width used by `scene`.
    #[arg(long, global = true)]
    viewport_width: Option<f64>,

    /// Viewport height used by `scene`.
    #[arg(long, global = true)]
    viewport_height: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List shapes in paint order.
    Show {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Parse strictly and report the first bad definition.
    Check { file: PathBuf },
    /// Re-serialize a drawing in canonical form.
    Fmt {
        file: PathBuf,
        /// Save under this name instead of printing.
        #[arg(long)]
        output: Option<String>,
    },
    /// Append a shape to a drawing, creating the file if needed.
    Add(AddArgs),
    /// Move a shape so its anchor lands on the given point.
    Move {
        file: PathBuf,
        index: usize,
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,
    },
    /// Print the Y-up meshes for the configured viewport as JSON.
    Scene { file: PathBuf },
    /// Report the topmost shape under a point.
    Hit {
        file: PathBuf,
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
}

#[derive(Args, Debug)]
struct AddArgs {
    file: PathBuf,
    #[arg(value_enum)]
    kind: KindArg,
    #[arg(long, allow_negative_numbers = true)]
    x: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    y: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    z: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,
    /// Polygon offsets as `X:Y|X:Y|...`.
    #[arg(long, allow_hyphen_values = true)]
    points: Option<String>,
    /// Six hex digits, no `#`.
    #[arg(long)]
    color: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Rectangle,
    Triangle,
    Polygon,
}

impl From<KindArg> for ShapeType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Rectangle => Self::Rectangle,
            KindArg::Triangle => Self::Triangle,
            KindArg::Polygon => Self::Polygon,
        }
    }
}

impl From<AddArgs> for ShapeDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            x: args.x,
            y: args.y,
            z_index: args.z,
            width: args.width,
            height: args.height,
            points: args.points,
            color: args.color,
            ..Self::new(args.kind.into())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ViewerConfig::from_env().with_overrides(cli.viewport_width, cli.viewport_height);

    match run(cli.command, &config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &ViewerConfig) -> Result<String, CliError> {
    match command {
        Command::Show { file, json } => commands::show(&file, json),
        Command::Check { file } => commands::check(&file),
        Command::Fmt { file, output } => commands::fmt(&file, output.as_deref()),
        Command::Add(args) => {
            let file = args.file.clone();
            commands::add(&file, &ShapeDraft::from(args))
        }
        Command::Move { file, index, x, y } => commands::move_shape(&file, index, x, y),
        Command::Scene { file } => commands::scene(&file, config.viewport),
        Command::Hit { file, x, y } => commands::hit(&file, x, y),
    }
}
