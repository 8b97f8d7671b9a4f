//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsclass/rsclass.toml`
//! 3. Environment variables: `RSCLASS_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Data file loaded when no source path is given on the command line
    pub data_file: Option<PathBuf>,
    /// Save back to the source file without prompting for a destination
    pub auto_save: bool,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(dirs) = ProjectDirs::from("", "", "rsclass") {
            let global = dirs.config_dir().join("rsclass.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        builder = builder.add_source(Environment::with_prefix("RSCLASS"));
        builder.build()?.try_deserialize()
    }
}
