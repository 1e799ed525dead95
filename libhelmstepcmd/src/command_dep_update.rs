use crate::utils::CommandRunner;
use libhelmstep::command::sink;
use libhelmstep::config::Config;
use libhelmstep::dep_update::DepUpdate;
use libhelmstep::Result;
use log::{debug, info};
use std::io;
use std::path::Path;

pub struct CommandDepUpdate {
    pub file: Option<String>,
    pub chart: Option<String>,
    pub namespace: Option<String>,
    pub debug: bool,
    pub dry_run: bool,
}

impl CommandDepUpdate {
    /// Settings from the file, if any, overridden by flags and plugin environment variables.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.file {
            Some(file) => libhelmstep::parse_config_file(Path::new(file))?,
            None => Config::default(),
        };
        if let Some(chart) = &self.chart {
            config.chart = chart.to_string();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.to_string();
        }
        config.debug = config.debug || self.debug;
        Ok(config)
    }
}

impl CommandRunner for CommandDepUpdate {
    fn run(&self) -> Result<()> {
        let mut config = self.resolve_config()?;
        debug!("Resolved configuration: {:?}", config);

        config.stdout = Some(sink(io::stdout()));
        config.stderr = Some(sink(io::stderr()));

        info!("Updating dependencies of chart {}...", config.chart);
        let prepared = DepUpdate::new(&config).prepare()?;

        if self.dry_run {
            info!("Dry run, not running {}", prepared.render());
            return Ok(());
        }

        prepared.execute()?;
        Ok(())
    }
}

#[test]
fn test_resolve_config_prefers_flags_over_file() {
    let cmd = CommandDepUpdate {
        file: Some("tests/helmstep.yaml".to_string()),
        chart: Some("scatterplot".to_string()),
        namespace: None,
        debug: false,
        dry_run: true,
    };
    let config = crate::utils::with_directory(None, || cmd.resolve_config()).unwrap();
    assert_eq!("scatterplot", config.chart);
    assert_eq!("spotify", config.namespace);
    assert!(config.debug);
}

#[test]
fn test_resolve_config_without_file_uses_flags_only() {
    let cmd = CommandDepUpdate {
        file: None,
        chart: None,
        namespace: Some("spotify".to_string()),
        debug: true,
        dry_run: true,
    };
    let config = cmd.resolve_config().unwrap();
    assert_eq!("", config.chart);
    assert_eq!("spotify", config.namespace);
    assert!(config.debug);
}
