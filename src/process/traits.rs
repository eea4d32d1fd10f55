// traits.rs - Command description and the runner seam

use std::fmt::{self, Display};

/// A program and its arguments, never passed through a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status and combined stdout/stderr text, trailing newline stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub status: i32,
    pub text: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

pub trait CommandRunner {
    /// Run to completion, capturing the output
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput, String>;

    /// Run attached to the current terminal and return the exit status
    fn run_attached(&self, command: &CommandSpec) -> Result<i32, String> {
        let output = self.run(command)?;
        if !output.text.is_empty() {
            println!("{}", output.text);
        }
        Ok(output.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = CommandSpec::new("get_organelle_config.py", ["--add"]).arg("animal_mt");
        assert_eq!(command.to_string(), "get_organelle_config.py --add animal_mt");
        assert_eq!(command.args, vec!["--add", "animal_mt"]);
    }
}
