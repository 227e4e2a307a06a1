//! Tileimg - Command-line tool for drawing tile rectangles to PNG

use std::process::ExitCode;

use tileimg::cli;

fn main() -> ExitCode {
    cli::run()
}
