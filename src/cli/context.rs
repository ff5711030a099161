use std::io::{self, Write};
use std::sync::Mutex;

use crate::error::ProjectNightError;
use crate::store::RosterStore;

pub struct CLIContext {
    pub roster: RosterStore,
}

impl CLIContext {
    pub fn new(roster: RosterStore) -> Self {
        Self { roster }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        read_line(prompt)
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Print an error.
    pub fn print_error(&self, e: &ProjectNightError) {
        println!("Error: {}", e);
    }
}

/// The prompt currently waiting for input, for the Ctrl-C handler.
static ACTIVE_PROMPT: Mutex<String> = Mutex::new(String::new());

fn remember_prompt(prompt: &str) {
    if let Ok(mut active) = ACTIVE_PROMPT.lock() {
        active.clear();
        active.push_str(prompt);
    }
}

/// What to echo when the user interrupts: a fresh line and the prompt they
/// were answering.
pub fn interrupt_echo() -> String {
    let prompt = ACTIVE_PROMPT
        .lock()
        .map(|p| p.clone())
        .unwrap_or_default();
    format!("\n{}", prompt)
}

pub fn read_line(prompt: &str) -> Option<String> {
    remember_prompt(prompt);
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}
