//! Configuration module for tileimg
//!
//! Provides types and parsing for optional TOML render configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
