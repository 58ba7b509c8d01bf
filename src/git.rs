use std::process::Command;

use crate::error::BackportError;

/// Run `git` with an explicit argument list and capture its stdout.
///
/// No shell is involved. A spawn failure or a non-zero exit maps to
/// `Subprocess` with the failing invocation and detail attached.
pub fn git(args: &[&str]) -> Result<String, BackportError> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| subprocess_error(args, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(subprocess_error(
            args,
            format!("{}: {}", output.status, stderr.trim()),
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn subprocess_error(args: &[&str], detail: String) -> BackportError {
    BackportError::Subprocess {
        program: "git".to_string(),
        args: args.iter().map(|s| s.to_string()).collect(),
        detail,
    }
}
