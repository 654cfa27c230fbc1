//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;
pub mod rank;

use std::path::Path;

use resumex_core::models::config::ResumexConfig;

/// Load configuration from an explicit path, or defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<ResumexConfig> {
    match path {
        Some(p) => Ok(ResumexConfig::from_file(Path::new(p))?),
        None => Ok(ResumexConfig::default()),
    }
}
