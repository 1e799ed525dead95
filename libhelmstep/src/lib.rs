use config::Config;
use log::{debug, info};
use std::fs;
use std::path::Path;

pub mod command;
pub mod config;
pub mod dep_update;
pub mod error;

pub use error::{Error, ProcessError, Result, ValidationError};

pub fn parse_config_file(config_file_path: &Path) -> Result<Config> {
    info!("Reading settings from {}...", config_file_path.display());

    let yaml_data = fs::read_to_string(config_file_path)
        .map_err(|err| Error::Config(format!("Unable to read configuration file: {}", err)))?;
    let config: Config = serde_yaml::from_str(&yaml_data)
        .map_err(|err| Error::Config(format!("Unable to parse configuration file: {}", err)))?;

    debug!("Configuration: {:?}", config);

    Ok(config)
}
