use libhelmstep::Result;
use parking_lot::ReentrantMutex;
use std::env::{self, current_dir, set_current_dir};
use std::sync::{Arc, OnceLock};

/// Prevents race conditions in multithreaded tests
static WITH_DIRECTORY_MUTEX: OnceLock<Arc<ReentrantMutex<()>>> = OnceLock::new();

pub trait CommandRunner {
    fn run(&self) -> Result<()>;
}

/// Runs `closure` inside `directory`, then goes back to the previous working directory.
pub fn with_directory<F, T>(directory: Option<String>, closure: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let _guard = WITH_DIRECTORY_MUTEX
        .get_or_init(|| Arc::new(ReentrantMutex::new(())))
        .lock();

    let previous_directory = current_dir()?.canonicalize()?;
    if let Some(directory) = directory {
        set_current_dir(directory)?;
    }
    let result = closure();
    set_current_dir(previous_directory)?;
    result
}

pub fn init_logging(verbose: bool) {
    if verbose {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
}

#[test]
fn test_with_directory_restores_previous_directory_on_error() {
    let before = current_dir().unwrap();
    let result: Result<()> = with_directory(Some("tests".to_string()), || {
        Err(libhelmstep::Error::Config("boom".to_string()))
    });
    assert_eq!("boom", result.err().unwrap().to_string());
    assert_eq!(before.canonicalize().unwrap(), current_dir().unwrap());
}
