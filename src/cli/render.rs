//! Render pipeline behind the `tileimg` command.
//!
//! Resolve config, resolve colors, parse every tile, render, then write.
//! Nothing is written until all tiles have parsed.

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use crate::color::ColorError;
use crate::config::{resolve_config, ConfigError};
use crate::output::{save_png, OutputError, OutputTarget};
use crate::renderer::render_tiles;
use crate::tile::{Tile, TileError};

use super::{
    Cli, EXIT_ARGS_ERROR, EXIT_COLOR_ERROR, EXIT_IMAGE_ENCODE_ERROR, EXIT_OPEN_FILE_ERROR,
    EXIT_RECTANGLE_ERROR,
};

/// Any failure that ends a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Bad `--*-color` option or `[style]`/`[colors]` entry
    #[error("invalid color: {0}")]
    Color(#[from] ColorError),
    #[error("'{arg}': {source}")]
    Tile {
        arg: String,
        #[source]
        source: TileError,
    },
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl RunError {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Config(_) => EXIT_ARGS_ERROR,
            RunError::Color(_) => EXIT_COLOR_ERROR,
            RunError::Tile { source: TileError::Range(_), .. } => EXIT_RECTANGLE_ERROR,
            RunError::Tile { source: TileError::Color(_), .. } => EXIT_COLOR_ERROR,
            RunError::Output(OutputError::Open { .. }) => EXIT_OPEN_FILE_ERROR,
            RunError::Output(_) => EXIT_IMAGE_ENCODE_ERROR,
        }
    }
}

/// Execute one render from parsed arguments.
pub fn run_render(cli: &Cli) -> Result<(), RunError> {
    let config = resolve_config(cli.config.as_deref(), &cli.overrides())?;
    let colors = config.color_table()?;

    if cli.list_colors {
        let mut out = io::stdout().lock();
        for name in colors.names() {
            writeln!(out, "{}", name).map_err(OutputError::Io)?;
        }
        return Ok(());
    }

    let style = config.style(&colors)?;
    let tiles = cli
        .args
        .iter()
        .map(|arg| {
            Tile::parse(arg, &colors).map_err(|source| RunError::Tile { arg: arg.clone(), source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let grid = config.grid_spec();
    info!(
        width = grid.width,
        height = grid.height,
        columns = grid.columns,
        rows = grid.rows,
        tiles = tiles.len(),
        "rendering"
    );
    let canvas = render_tiles(&grid, &style, &tiles);

    let target = OutputTarget::from_arg(cli.out.as_deref());
    save_png(canvas.image(), &target)?;
    info!(output = %target, "wrote image");

    Ok(())
}
