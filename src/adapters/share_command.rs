use std::io::Write;
use std::process::{Command, Stdio};

use crate::ports::{NativeShare, ShareError};

/// Exit status shells report for a prompt dismissed with Ctrl-C.
const CANCELLED_EXIT_CODE: i32 = 130;

/// Native share backed by an external command that reads the payload on stdin.
#[derive(Debug, Clone)]
pub struct CommandShareAdapter {
    program: String,
    args: Vec<String>,
}

impl CommandShareAdapter {
    /// Build from a `[program, args...]` list; `None` when the list is empty.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self { program: program.clone(), args: args.to_vec() })
    }
}

impl NativeShare for CommandShareAdapter {
    fn share(&mut self, title: &str, text: &str) -> Result<(), ShareError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .env("BRIGHT_FUTURES_SHARE_TITLE", title)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ShareError::Failed(format!("Failed to execute {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ShareError::Failed(format!("Failed to send share payload: {}", e)))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ShareError::Failed(format!("Failed to wait for {}: {}", self.program, e)))?;

        match output.status.code() {
            Some(0) => Ok(()),
            Some(CANCELLED_EXIT_CODE) | None => Err(ShareError::Cancelled),
            Some(code) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(ShareError::Failed(format!(
                    "{} exited with status {}: {}",
                    self.program,
                    code,
                    stderr.trim()
                )))
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandShareAdapter {
        CommandShareAdapter::from_command(&["sh".into(), "-c".into(), script.into()]).unwrap()
    }

    #[test]
    fn empty_command_is_unavailable() {
        assert!(CommandShareAdapter::from_command(&[]).is_none());
    }

    #[test]
    fn zero_exit_is_success() {
        assert_eq!(sh("cat >/dev/null").share("title", "payload"), Ok(()));
    }

    #[test]
    fn exit_130_is_cancellation() {
        assert_eq!(sh("cat >/dev/null; exit 130").share("title", "payload"), Err(ShareError::Cancelled));
    }

    #[test]
    fn other_exit_is_failure() {
        let err = sh("cat >/dev/null; echo nope >&2; exit 3").share("title", "payload").unwrap_err();
        match err {
            ShareError::Failed(reason) => assert!(reason.contains("nope")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_program_is_failure() {
        let mut adapter =
            CommandShareAdapter::from_command(&["/nonexistent/share-tool".into()]).unwrap();
        assert!(matches!(adapter.share("t", "p"), Err(ShareError::Failed(_))));
    }
}
