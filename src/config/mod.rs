mod file_config;

pub use file_config::FileConfig;

use crate::browse::SortField;
use crate::catalog::SeedSource;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be overridden by the TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub default_sort: SortField,
    pub history_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub seed_source: SeedSource,
    /// Sort column applied once when the browser starts.
    pub default_sort: SortField,
    pub history_file: Option<PathBuf>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file.data_dir.map(PathBuf::from).or_else(|| cli.data_dir.clone());
        let seed_source = match data_dir {
            Some(dir) => {
                if !dir.exists() {
                    bail!("Data directory does not exist: {:?}", dir);
                }
                if !dir.is_dir() {
                    bail!("data_dir is not a directory: {:?}", dir);
                }
                SeedSource::Dir(dir)
            }
            None => SeedSource::Builtin,
        };

        let default_sort = match file.default_sort {
            Some(s) => s.parse()?,
            None => cli.default_sort,
        };

        let history_file = file
            .history_file
            .map(PathBuf::from)
            .or_else(|| cli.history_file.clone());

        Ok(Self {
            seed_source,
            default_sort,
            history_file,
        })
    }
}
