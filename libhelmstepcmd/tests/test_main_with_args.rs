use libhelmstepcmd::utils::with_directory;
use libhelmstepcmd::Cli;
use std::env::current_dir;
use std::fs;

#[test]
fn test_main_with_args_for_dep_update_changes_and_restores_directory() {
    // Holding the directory lock keeps other tests from moving us meanwhile.
    with_directory(None, || {
        let before = current_dir()?.canonicalize()?;
        Cli::main_with_args(
            vec![
                "helmstep",
                "dep-update",
                "--dry-run",
                "--directory",
                "tests",
                "--file",
                "helmstep.yaml",
            ],
            false,
        )?;
        assert_eq!(before, current_dir()?.canonicalize()?);
        Ok(())
    })
    .unwrap();
}

#[test]
fn test_main_with_args_for_dep_update_reads_chart_from_flag() {
    Cli::main_with_args(
        vec![
            "helmstep",
            "dep-update",
            "--dry-run",
            "--chart",
            "your_top_songs_2019",
            "--namespace",
            "spotify",
        ],
        false,
    )
    .unwrap();
}

#[test]
fn test_main_with_args_for_dep_update_requires_chart() {
    let result = Cli::main_with_args(
        vec!["helmstep", "dep-update", "--dry-run", "--chart", ""],
        false,
    );
    assert_eq!("chart is required", result.err().unwrap().to_string());
}

#[test]
fn test_main_with_args_for_dep_update_reports_missing_file() {
    let result = Cli::main_with_args(
        vec!["helmstep", "dep-update", "--dry-run", "--file", "nope.yaml"],
        false,
    );
    assert!(result
        .err()
        .unwrap()
        .to_string()
        .starts_with("Unable to read configuration file:"));
}

#[test]
fn test_main_with_args_for_json_schema_runs() {
    Cli::main_with_args(vec!["helmstep", "json-schema"], false).unwrap();
}

#[test]
fn test_main_with_args_for_json_schema_writes_output_file() {
    let output = std::env::temp_dir().join(format!(
        "helmstep-main-schema-{}.json",
        std::process::id()
    ));
    Cli::main_with_args(
        vec![
            "helmstep",
            "json-schema",
            "--output",
            output.to_str().unwrap(),
        ],
        false,
    )
    .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    fs::remove_file(&output).unwrap();
    assert!(written.contains("\"chart\""));
    assert!(written.ends_with("}\n"));
}
