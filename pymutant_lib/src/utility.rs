//! The `utility` module contains process helpers such as `shell_execute` used by other parts of
//! the library.

use crate::error::PyMutantError;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Execute a command using the shell facility on the computer.
///
/// # Arguments
///
/// * `command` - The command to execute.
/// * `arguments` - The arguments to the command.
pub fn shell_execute(command: &str, arguments: &[String]) -> Result<Output, PyMutantError> {
    let output = if cfg!(target_os = "windows") {
        Command::new("cmd")
            .arg("/C")
            .arg(command)
            .args(arguments)
            .output()?
    } else {
        Command::new(command).args(arguments).output()?
    };
    Ok(output)
}

/// Execute a command, write `input` to its standard input, and collect its output.
///
/// The command is started directly on every platform: the arguments may carry program text that
/// `cmd /C` would re-parse.
///
/// # Arguments
///
/// * `command` - The command to execute.
/// * `arguments` - The arguments to the command.
/// * `input` - The bytes to send to the command's standard input.
pub fn shell_execute_with_input(
    command: &str,
    arguments: &[String],
    input: &[u8],
) -> Result<Output, PyMutantError> {
    let mut child = Command::new(command)
        .args(arguments)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // The input is written from its own thread, and the command is waited on whatever the write
    // returns.  Dropping the handle at the end of the thread closes the pipe.
    let writer = child.stdin.take().map(|mut stdin| {
        let input = input.to_vec();
        std::thread::spawn(move || stdin.write_all(&input))
    });

    let output = child.wait_with_output()?;

    // A command that exits early closes its end of the pipe first; its exit status then reports
    // the failure.
    if let Some(Ok(Err(e))) = writer.map(|w| w.join()) {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            return Err(PyMutantError::from(e));
        }
    }

    Ok(output)
}
