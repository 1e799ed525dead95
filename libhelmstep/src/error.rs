use std::io;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Failure of the external process itself, as reported by a process handle.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Unable to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Command '{command}' failed: {status}")]
    Exit { command: String, status: ExitStatus },

    #[error("Unable to forward process output: {0}")]
    Stream(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_validation_error_is_displayed_verbatim() {
    let err: Error = ValidationError::Required("chart").into();
    assert_eq!("chart is required", err.to_string());
}
