use libhelmstep::command::{sink, Cmd, CommandFactory, SystemCommand, SystemCommandFactory};
use libhelmstep::ProcessError;
use parking_lot::Mutex;
use std::sync::Arc;

fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn test_system_command_forwards_output_to_sinks() {
    let stdout = Arc::new(Mutex::new(Vec::<u8>::new()));
    let stderr = Arc::new(Mutex::new(Vec::<u8>::new()));

    let mut cmd = Box::new(SystemCommand::new(
        "sh",
        &args(&["-c", "echo to stdout; echo to stderr >&2"]),
    ));
    cmd.stdout(Some(stdout.clone()));
    cmd.stderr(Some(stderr.clone()));
    cmd.run().unwrap();

    assert_eq!(b"to stdout\n".to_vec(), *stdout.lock());
    assert_eq!(b"to stderr\n".to_vec(), *stderr.lock());
}

#[test]
fn test_system_command_discards_output_without_sinks() {
    let mut cmd = SystemCommandFactory.command("sh", &args(&["-c", "echo dropped"]));
    cmd.stdout(None);
    cmd.stderr(None);
    cmd.run().unwrap();
}

#[test]
fn test_system_command_reports_non_zero_exit() {
    let cmd = SystemCommandFactory.command("false", &[]);

    match cmd.run() {
        Err(ProcessError::Exit { command, status }) => {
            assert_eq!("false", command);
            assert_eq!(Some(1), status.code());
        }
        _ => panic!("Expected ProcessError::Exit"),
    }
}

#[test]
fn test_system_command_reports_spawn_failure() {
    let mut cmd = SystemCommandFactory.command("helmstep-no-such-binary", &args(&["dependency"]));
    cmd.stderr(Some(sink(Vec::<u8>::new())));

    match cmd.run() {
        Err(ProcessError::Spawn { program, .. }) => {
            assert_eq!("helmstep-no-such-binary", program);
        }
        _ => panic!("Expected ProcessError::Spawn"),
    }
}

#[test]
fn test_system_command_succeeds_on_zero_exit() {
    SystemCommandFactory.command("true", &[]).run().unwrap();
}
