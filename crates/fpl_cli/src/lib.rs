//! FPL Advisor CLI library
//!
//! Saved API documents → core models → advice report → text/JSON/CSV.

pub mod loader;
pub mod render;
pub mod report;
pub mod settings;

pub use loader::{load_input, LoadStats, LoadedInput, ParseStats};
pub use render::{render, OutputFormat};
pub use report::{build_report, resolve_round, Report, Section};
pub use settings::{resolve_config, Overrides, CONFIG_PATH_ENV};
