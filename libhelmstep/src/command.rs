use crate::error::ProcessError;
use log::debug;
use parking_lot::Mutex;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

pub const HELM_BIN: &str = "helm";

/// Output stream shared between the caller and a running process.
pub type Sink = Arc<Mutex<dyn Write + Send>>;

pub fn sink<W: Write + Send + 'static>(writer: W) -> Sink {
    Arc::new(Mutex::new(writer))
}

/// Handle on an external process that has not been started yet.
///
/// A handle runs at most once, `run` consumes it.
pub trait Cmd {
    /// Binds the process stdout, `None` discards it.
    fn stdout(&mut self, sink: Option<Sink>);
    /// Binds the process stderr, `None` discards it.
    fn stderr(&mut self, sink: Option<Sink>);
    fn run(self: Box<Self>) -> Result<(), ProcessError>;
    /// Program and arguments joined by single spaces.
    fn render(&self) -> String;
}

pub trait CommandFactory {
    fn command(&self, program: &str, args: &[String]) -> Box<dyn Cmd>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandFactory;

impl CommandFactory for SystemCommandFactory {
    fn command(&self, program: &str, args: &[String]) -> Box<dyn Cmd> {
        Box::new(SystemCommand::new(program, args))
    }
}

/// Spawns a real child process with `std::process::Command`.
pub struct SystemCommand {
    program: String,
    args: Vec<String>,
    stdout: Option<Sink>,
    stderr: Option<Sink>,
}

impl SystemCommand {
    pub fn new(program: &str, args: &[String]) -> SystemCommand {
        SystemCommand {
            program: program.to_string(),
            args: args.to_vec(),
            stdout: None,
            stderr: None,
        }
    }
}

impl Cmd for SystemCommand {
    fn stdout(&mut self, sink: Option<Sink>) {
        self.stdout = sink;
    }

    fn stderr(&mut self, sink: Option<Sink>) {
        self.stderr = sink;
    }

    fn run(self: Box<Self>) -> Result<(), ProcessError> {
        let command_line = self.render();
        debug!("Running command {}", command_line);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(piped_if_bound(&self.stdout))
            .stderr(piped_if_bound(&self.stderr))
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout_handle = forward(child.stdout.take(), self.stdout);
        let stderr_handle = forward(child.stderr.take(), self.stderr);

        let status = child.wait().map_err(ProcessError::Stream)?;
        join_forwarder(stdout_handle)?;
        join_forwarder(stderr_handle)?;

        if !status.success() {
            return Err(ProcessError::Exit {
                command: command_line,
                status,
            });
        }
        Ok(())
    }

    fn render(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|arg| arg.as_str()))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

fn piped_if_bound(sink: &Option<Sink>) -> Stdio {
    if sink.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    }
}

struct SinkWriter(Sink);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().flush()
    }
}

fn forward<R>(source: Option<R>, sink: Option<Sink>) -> Option<JoinHandle<io::Result<u64>>>
where
    R: Read + Send + 'static,
{
    let mut source = source?;
    let mut writer = SinkWriter(sink?);
    Some(thread::spawn(move || io::copy(&mut source, &mut writer)))
}

fn join_forwarder(handle: Option<JoinHandle<io::Result<u64>>>) -> Result<(), ProcessError> {
    let handle = match handle {
        Some(handle) => handle,
        None => return Ok(()),
    };
    match handle.join() {
        Ok(copied) => copied.map(|_| ()).map_err(ProcessError::Stream),
        Err(_) => Err(ProcessError::Stream(io::Error::new(
            io::ErrorKind::Other,
            "output forwarding thread panicked",
        ))),
    }
}

#[test]
fn test_render_joins_program_and_args_with_single_spaces() {
    let cmd = SystemCommand::new(
        HELM_BIN,
        &["dependency".to_string(), "update".to_string(), "c".to_string()],
    );
    assert_eq!("helm dependency update c", cmd.render());
}

#[test]
fn test_render_without_args_is_the_program() {
    assert_eq!("helm", SystemCommand::new(HELM_BIN, &[]).render());
}
