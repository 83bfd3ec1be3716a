// Error types and exit handling
//
// Only command recognition is a user-facing failure. References to missing
// tasks or boards are absorbed by the store as no-ops.

use std::process;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BordError {
    #[error("Command not recognized: {0}")]
    UnknownCommand(String),
}

/// Exit with a user error (exit code 1)
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2), printing the cause chain
pub fn internal_error(err: &anyhow::Error) -> ! {
    eprintln!("Internal error: {}", err);
    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        eprintln!("\nCaused by:");
        for (indent, cause) in causes.enumerate() {
            eprintln!("{:indent$}  {}", "", cause, indent = indent + 1);
        }
    }
    process::exit(2);
}
