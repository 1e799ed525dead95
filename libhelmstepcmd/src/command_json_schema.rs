use crate::utils::CommandRunner;
use libhelmstep::config::create_json_schema;
use libhelmstep::Result;
use log::info;
use std::fs;

/// Prints the settings schema, or writes it to `output` so editors can pick it up.
pub struct CommandJsonSchema {
    pub output: Option<String>,
}

impl CommandRunner for CommandJsonSchema {
    fn run(&self) -> Result<()> {
        let schema = create_json_schema()?;
        match &self.output {
            Some(output) => {
                fs::write(output, format!("{}\n", schema))?;
                info!("Settings schema written to {}", output);
            }
            None => println!("{}", schema),
        }
        Ok(())
    }
}

#[test]
fn test_command_json_schema_writes_schema_to_output() {
    let output =
        std::env::temp_dir().join(format!("helmstep-schema-{}.json", std::process::id()));
    let cmd = CommandJsonSchema {
        output: Some(output.to_string_lossy().to_string()),
    };
    cmd.run().unwrap();

    let written = fs::read_to_string(&output).unwrap();
    fs::remove_file(&output).unwrap();

    let schema: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!("Config", schema["title"]);
    assert_eq!("string", schema["properties"]["chart"]["type"]);
    assert_eq!("string", schema["properties"]["namespace"]["type"]);
    assert_eq!("boolean", schema["properties"]["debug"]["type"]);
    assert!(schema["properties"].get("stdout").is_none());
}

#[test]
fn test_command_json_schema_reports_unwritable_output() {
    let cmd = CommandJsonSchema {
        output: Some("tests/no-such-dir/schema.json".to_string()),
    };
    let err = cmd.run().err().unwrap();
    assert!(matches!(err, libhelmstep::Error::Io(_)));
}
