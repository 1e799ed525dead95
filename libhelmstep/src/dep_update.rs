use crate::command::{Cmd, CommandFactory, Sink, SystemCommandFactory, HELM_BIN};
use crate::config::Config;
use crate::error::{ProcessError, Result, ValidationError};
use log::debug;
use std::io::Write;

/// A `helm dependency update` invocation that has not been validated yet.
pub struct DepUpdate<F: CommandFactory = SystemCommandFactory> {
    chart: String,
    namespace: String,
    debug: bool,
    stdout: Option<Sink>,
    stderr: Option<Sink>,
    factory: F,
}

/// A validated invocation holding its process handle, ready to run once.
pub struct PreparedDepUpdate {
    cmd: Box<dyn Cmd>,
    args: Vec<String>,
}

impl DepUpdate {
    pub fn new(config: &Config) -> DepUpdate {
        DepUpdate::with_factory(config, SystemCommandFactory)
    }
}

impl<F: CommandFactory> DepUpdate<F> {
    pub fn with_factory(config: &Config, factory: F) -> DepUpdate<F> {
        DepUpdate {
            chart: config.chart.clone(),
            namespace: config.namespace.clone(),
            debug: config.debug,
            stdout: config.stdout.clone(),
            stderr: config.stderr.clone(),
            factory,
        }
    }

    pub fn prepare(self) -> Result<PreparedDepUpdate> {
        if self.chart.is_empty() {
            return Err(ValidationError::Required("chart").into());
        }

        let args = self.args();
        debug!("Preparing {} {:?}", HELM_BIN, args);

        let mut cmd = self.factory.command(HELM_BIN, &args);
        cmd.stdout(self.stdout);
        cmd.stderr(self.stderr.clone());

        if self.debug {
            if let Some(stderr) = &self.stderr {
                writeln!(stderr.lock(), "Generated command: '{}'", cmd.render())?;
            }
        }

        Ok(PreparedDepUpdate { cmd, args })
    }

    // The namespace flag always comes before --debug.
    fn args(&self) -> Vec<String> {
        let mut args = Vec::<String>::new();
        if !self.namespace.is_empty() {
            args.push("--namespace".to_string());
            args.push(self.namespace.to_string());
        }
        if self.debug {
            args.push("--debug".to_string());
        }
        args.push("dependency".to_string());
        args.push("update".to_string());
        args.push(self.chart.to_string());
        args
    }
}

impl PreparedDepUpdate {
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn render(&self) -> String {
        self.cmd.render()
    }

    pub fn execute(self) -> std::result::Result<(), ProcessError> {
        self.cmd.run()
    }
}

#[test]
fn test_args_put_namespace_before_debug() {
    let config = Config {
        chart: "c".to_string(),
        namespace: "ns".to_string(),
        debug: true,
        ..Default::default()
    };
    assert_eq!(
        vec!["--namespace", "ns", "--debug", "dependency", "update", "c"],
        DepUpdate::new(&config).args()
    );
}

#[test]
fn test_new_copies_chart_from_config() {
    let config = Config {
        chart: "scatterplot".to_string(),
        ..Default::default()
    };
    let dep_update = DepUpdate::new(&config);
    assert_eq!("scatterplot", dep_update.chart);
    assert_eq!("", dep_update.namespace);
    assert!(!dep_update.debug);
}
