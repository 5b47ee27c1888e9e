//! Configuration for the lodestore mod.
//!
//! Settings persist to disk as a RON file next to the host's other mod
//! configs. Missing sections and fields fall back to defaults, unknown
//! fields are ignored, and a changed file can be hot-reloaded.

mod config;
mod error;

pub use config::{DebugConfig, GridDefaultsConfig, ModConfig};
pub use error::ConfigError;
