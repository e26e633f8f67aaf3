//! The site's toy terminal: a fixed command table.

use serde::Serialize;

use crate::errors::AppError;

pub const WELCOME: [&str; 2] = [
    "Welcome to Code Vimarsh Terminal v1.0.0",
    "Type \"help\" to get started.",
];

const HELP: &str = "Available commands:
  • help     - Show this help message
  • about    - Learn about Code Vimarsh
  • whois    - Who are we?
  • clear    - Clear terminal
  • echo     - Echo a message";

const ABOUT: &str = "Code Vimarsh is a community of architects, not just coders.
We believe in intellectual deliberation, deep discourse, and
collaborative refinement. Our mission is to elevate software
development through thoughtful, deliberate practices.

Vimarsh: The art of intellectual deliberation.";

const WHOIS: &str = "We are a collective of developers, architects, and thinkers
who value quality over speed, discourse over haste, and
excellence over mediocrity.

Founded on principles of:
• Deep Deliberation
• Collaborative Discourse
• Architectural Excellence
• Sustainable Code

Join us in shaping the future of software development.";

/// What the client should do with a command's result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TerminalReply {
    /// Append `output` to the scrollback
    Output { output: String },
    /// Wipe the scrollback
    Clear,
}

/// Run one command line against the table.
pub fn run(command: &str) -> Result<TerminalReply, AppError> {
    let trimmed = command.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Command is required".to_string()));
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    let output = match (head.to_lowercase().as_str(), rest) {
        ("clear", "") => return Ok(TerminalReply::Clear),
        ("help", "") => HELP.to_string(),
        ("about", "") => ABOUT.to_string(),
        ("whois", "") => WHOIS.to_string(),
        ("echo", text) => text.to_string(),
        _ => format!(
            "Command not found: {}. Type \"help\" for available commands.",
            trimmed
        ),
    };

    Ok(TerminalReply::Output { output })
}
