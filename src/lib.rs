//! Tileimg - Library for drawing grid-aligned tile rectangles
//!
//! This library provides functionality to:
//! - Map grid cells and cell ranges to padded pixel rectangles
//! - Parse `[COLOR:]X,Y` tile arguments with `BEGIN-END` ranges
//! - Paint filled, stroked rectangles onto an RGBA canvas
//! - Encode the result as PNG

pub mod cli;
pub mod color;
pub mod config;
pub mod grid;
pub mod output;
pub mod range;
pub mod renderer;
pub mod tile;
