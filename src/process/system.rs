// system.rs - Runner backed by std::process

use std::process::{Command, Stdio};

use super::traits::{CommandOutput, CommandRunner, CommandSpec};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput, String> {
        log::info!(">>> run command: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| format!("Failed to run '{}': {}", command.program, e))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        let text = text.trim_end_matches('\n').to_string();

        Ok(CommandOutput {
            status: exit_code(output.status),
            text,
        })
    }

    fn run_attached(&self, command: &CommandSpec) -> Result<i32, String> {
        log::info!(">>> run command: {}", command);

        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|e| format!("Failed to run '{}': {}", command.program, e))?;

        Ok(exit_code(status))
    }
}

/// Killed by a signal maps to 128 + signal, like a shell
fn exit_code(status: std::process::ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_status_and_output() {
        let command = CommandSpec::new("sh", ["-c", "echo out; echo err 1>&2; exit 3"]);
        let output = SystemRunner.run(&command).unwrap();

        assert_eq!(output.status, 3);
        assert!(!output.success());
        assert_eq!(output.text, "out\nerr");
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let command = CommandSpec::new("fastmito-no-such-program", Vec::<String>::new());
        let err = SystemRunner.run(&command).unwrap_err();
        assert!(err.contains("Failed to run 'fastmito-no-such-program'"));
    }
}
