//! Blocking execution of external tools.

use std::process::Command;

/// Run `program args...` and return its stdout.
///
/// On spawn failure or non-zero exit the error holds a human readable
/// reason including stderr.
pub(crate) fn run(program: &str, args: &[String]) -> std::result::Result<String, String> {
    tracing::debug!("Running {}", command_line(program, args));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| format!("failed to start {program}: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("exited with {}: {}", output.status, stderr.trim()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Printable form of a command invocation.
pub(crate) fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}
