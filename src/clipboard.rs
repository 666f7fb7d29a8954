//! Clipboard integration through external tools (xclip, xsel, ...).

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::config::{ClipboardCommand, ClipboardSettings};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard integration is disabled")]
    Disabled,

    #[error("Clipboard tools not available (install one of: {0})")]
    NoTool(String),

    #[error("'{program}' exited with {status}")]
    Failed { program: String, status: String },

    #[error("Could not copy to clipboard: {0}")]
    Io(#[from] io::Error),
}

/// Copy `text` using the first configured tool that accepts it.
///
/// Returns the program that accepted the text.
pub fn copy(text: &str, settings: &ClipboardSettings) -> Result<String, ClipboardError> {
    if !settings.enabled {
        return Err(ClipboardError::Disabled);
    }

    let mut last_error = None;
    for command in &settings.commands {
        match pipe_to(command, text) {
            Ok(()) => {
                tracing::debug!(program = %command.program, "copied query to clipboard");
                return Ok(command.program.clone());
            }
            Err(ClipboardError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(program = %command.program, "clipboard tool not installed");
            }
            Err(e @ ClipboardError::Failed { .. }) => {
                tracing::debug!(program = %command.program, error = %e, "clipboard tool failed");
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(e) = last_error {
        return Err(e);
    }

    let tried: Vec<&str> = settings
        .commands
        .iter()
        .map(|c| c.program.as_str())
        .collect();
    Err(ClipboardError::NoTool(tried.join(", ")))
}

fn pipe_to(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin drops after the write so the tool sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    match written {
        // A tool may exit without draining its input; the exit status decides.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!(program = %command.program, "clipboard tool closed its input early");
        }
        Err(e) => return Err(e.into()),
        Ok(()) => {}
    }

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed {
            program: command.program.clone(),
            status: status.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled() {
        let settings = ClipboardSettings {
            enabled: false,
            ..Default::default()
        };
        assert!(matches!(copy("x", &settings), Err(ClipboardError::Disabled)));
    }

    #[test]
    fn test_missing_tools_reported() {
        let settings = ClipboardSettings {
            enabled: true,
            commands: vec![ClipboardCommand::new("aql-builder-no-such-tool", &[])],
        };
        match copy("x", &settings) {
            Err(ClipboardError::NoTool(tools)) => assert_eq!(tools, "aql-builder-no-such-tool"),
            other => panic!("expected NoTool, got {:?}", other),
        }
    }

    #[test]
    fn test_tool_that_ignores_input_falls_through() {
        let settings = ClipboardSettings {
            enabled: true,
            commands: vec![
                ClipboardCommand::new("false", &[]),
                ClipboardCommand::new("cat", &[]),
            ],
        };
        let payload = "x".repeat(1 << 20);
        assert_eq!(copy(&payload, &settings).unwrap(), "cat");
    }

    #[test]
    fn test_broken_pipe_with_success_status_is_accepted() {
        let settings = ClipboardSettings {
            enabled: true,
            commands: vec![ClipboardCommand::new("true", &[])],
        };
        let payload = "x".repeat(1 << 20);
        assert_eq!(copy(&payload, &settings).unwrap(), "true");
    }

    #[test]
    fn test_all_tools_failing_reports_last_failure() {
        let settings = ClipboardSettings {
            enabled: true,
            commands: vec![ClipboardCommand::new("false", &[])],
        };
        assert!(matches!(
            copy("x", &settings),
            Err(ClipboardError::Failed { .. })
        ));
    }
}
