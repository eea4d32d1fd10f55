// prompt.rs - Terminal confirmation prompts

use std::io::{self, BufRead, Write};

use crate::core::organelle::Confirm;

/// Asks on stderr and reads the answer from stdin; anything but y/yes is a no
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, String> {
        let stdin = io::stdin();
        ask(prompt, &mut stdin.lock(), &mut io::stderr())
    }
}

/// Answers yes to everything (`--yes`)
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> Result<bool, String> {
        eprintln!("{} [y/N]: y", prompt);
        Ok(true)
    }
}

fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<bool, String> {
    write!(output, "{} [y/N]: ", prompt).map_err(|e| format!("Write error: {}", e))?;
    output.flush().map_err(|e| format!("Flush error: {}", e))?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|e| format!("Failed to read answer: {}", e))?;

    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
