//! Command-line interface implementation
//!
//! Parses arguments with clap, installs logging, and dispatches to the
//! render pipeline. Every failure maps to a distinct exit code.

mod render;

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use crate::config::CliOverrides;

pub use render::{run_render, RunError};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ARGS_ERROR: u8 = 1;
pub const EXIT_OPEN_FILE_ERROR: u8 = 2;
pub const EXIT_RECTANGLE_ERROR: u8 = 3;
pub const EXIT_IMAGE_ENCODE_ERROR: u8 = 4;
pub const EXIT_COLOR_ERROR: u8 = 5;

const AFTER_HELP: &str = "\
Examples:
  $ tileimg -o out.png 0,0 1,0 1,1
  $ tileimg -o out.png 0-2,0 3,0-1
  $ tileimg -o out.png -s none red:0,0 green:1,0 blue:2,0
  $ tileimg -o out.png -s none 75,0,0:0,0-3 150,0,0:1,0-3 225,0,0:2,0-3

Each ARG addresses a tile as X,Y. With the default 4x4 grid, 1,1 is:

  +-----+-----+-----+-----+
  | 0,0 | 1,0 | 2,0 | 3,0 |
  +-----+-----+-----+-----+
  | 0,1 |#####| 2,1 | 3,1 |
  +-----+-----+-----+-----+
  | 0,2 | 1,2 | 2,2 | 3,2 |
  +-----+-----+-----+-----+
  | 0,3 | 1,3 | 2,3 | 3,3 |
  +-----+-----+-----+-----+

X or Y may be BEGIN-END to merge tiles into one rectangle. 1-2,0-2 is:

  +-----+-----+-----+-----+
  | 0,0 |###########| 3,0 |
  +-----+###########+-----+
  | 0,1 |###########| 3,1 |
  +-----+###########+-----+
  | 0,2 |###########| 3,2 |
  +-----+-----+-----+-----+
  | 0,3 | 1,3 | 2,3 | 3,3 |
  +-----+-----+-----+-----+

Prefix an ARG with COLOR: to fill it. COLOR is a name (see --list-colors),
an R,G,B triplet, #RRGGBB[AA], or none.

Exit codes: 0 ok, 1 bad arguments, 2 cannot open output, 3 bad rectangle,
4 encode failure, 5 bad color.";

/// Tileimg - draw tile rectangles to a PNG image
#[derive(Parser, Debug)]
#[command(name = "tileimg")]
#[command(about = "tileimg draws tile rectangles to an image")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Tiles to draw: [COLOR:]X,Y where X and Y are N or BEGIN-END
    #[arg(value_name = "ARGS", required_unless_present = "list_colors")]
    pub args: Vec<String>,

    /// Image width in pixels (default: 200)
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Image height in pixels (default: 200)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Tile column count (default: 4)
    #[arg(short = 'c', long)]
    pub column: Option<u32>,

    /// Tile row count (default: 4)
    #[arg(short = 'r', long)]
    pub row: Option<u32>,

    /// Tile padding in pixels (default: 5)
    #[arg(short = 'p', long)]
    pub pad: Option<u32>,

    /// Background color (default: white)
    #[arg(short = 'b', long)]
    pub background_color: Option<String>,

    /// Stroke color (default: black)
    #[arg(short = 's', long)]
    pub stroke_color: Option<String>,

    /// Fill color for tiles without a COLOR: prefix (default: none)
    #[arg(short = 'f', long)]
    pub fill_color: Option<String>,

    /// Stroke width in pixels (default: 2)
    #[arg(short = 'l', long)]
    pub line_width: Option<f64>,

    /// Output file path (default: stdout)
    #[arg(short = 'o', long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// TOML file with canvas, grid, style and color settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print known color names and exit
    #[arg(long)]
    pub list_colors: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Flags that take precedence over the config file.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            width: self.width,
            height: self.height,
            columns: self.column,
            rows: self.row,
            pad: self.pad,
            background: self.background_color.clone(),
            stroke: self.stroke_color.clone(),
            fill: self.fill_color.clone(),
            line_width: self.line_width,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the CLI application
pub fn run() -> ExitCode {
    run_from(std::env::args_os())
}

/// Run with explicit arguments (first item is the program name).
pub fn run_from<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() { EXIT_ARGS_ERROR } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    match run_render(&cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
