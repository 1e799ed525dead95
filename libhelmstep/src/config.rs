use crate::command::Sink;
use crate::error::{Error, Result};
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use std::fmt;

/// Settings of a `helm dependency update` step.
///
/// The output sinks are never read from a file, the caller binds them.
#[derive(Deserialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Chart whose dependencies are updated
    #[serde(default)]
    pub chart: String,
    /// Kubernetes namespace passed to helm, ignored when empty
    #[serde(default)]
    pub namespace: String,
    /// Print the generated helm command before running it
    #[serde(default)]
    pub debug: bool,
    #[serde(skip)]
    pub stdout: Option<Sink>,
    #[serde(skip)]
    pub stderr: Option<Sink>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("chart", &self.chart)
            .field("namespace", &self.namespace)
            .field("debug", &self.debug)
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .finish()
    }
}

pub fn create_json_schema() -> Result<String> {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema)
        .map_err(|err| Error::Config(format!("Unable to render JSON schema: {}", err)))
}

#[test]
fn test_create_json_schema_lists_settings_but_not_sinks() {
    let schema = create_json_schema().unwrap();
    assert!(schema.contains("\"chart\""));
    assert!(schema.contains("\"namespace\""));
    assert!(schema.contains("\"debug\""));
    assert!(!schema.contains("\"stdout\""));
}

#[test]
fn test_config_debug_hides_sink_contents() {
    let config = Config {
        chart: "scatterplot".to_string(),
        ..Default::default()
    };
    assert_eq!(
        "Config { chart: \"scatterplot\", namespace: \"\", debug: false, stdout: false, stderr: false }",
        format!("{:?}", config)
    );
}
