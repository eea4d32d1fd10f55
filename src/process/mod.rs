// mod.rs - External process adapter

pub mod system;
pub mod traits;

pub use system::SystemRunner;
pub use traits::{CommandOutput, CommandRunner, CommandSpec};

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every command and replays queued outputs
    #[derive(Debug, Default)]
    pub struct StubRunner {
        pub calls: RefCell<Vec<CommandSpec>>,
        responses: RefCell<VecDeque<CommandOutput>>,
    }

    impl StubRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: i32, text: &str) -> Self {
            self.responses.borrow_mut().push_back(CommandOutput {
                status,
                text: text.to_string(),
            });
            self
        }

        pub fn command_lines(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|c| c.to_string()).collect()
        }
    }

    impl CommandRunner for StubRunner {
        fn run(&self, command: &CommandSpec) -> Result<CommandOutput, String> {
            self.calls.borrow_mut().push(command.clone());
            Ok(self
                .responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(CommandOutput {
                    status: 0,
                    text: String::new(),
                }))
        }
    }
}
