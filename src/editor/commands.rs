//! Parsing of submitted `:` command lines.

use thiserror::Error;

/// Command parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Not an editor command: {0}")]
    UnknownCommand(String),
}

/// A command typed on the `:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExCommand {
    /// Leave the editor
    Quit,
    /// Empty line, nothing to do
    Nop,
}

impl ExCommand {
    /// Parses the text typed after the `:` prefix.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        match input.trim() {
            "" => Ok(ExCommand::Nop),
            "q" | "quit" | "q!" | "quit!" | "qa" | "qa!" => Ok(ExCommand::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit() {
        assert_eq!(ExCommand::parse("q"), Ok(ExCommand::Quit));
        assert_eq!(ExCommand::parse("quit"), Ok(ExCommand::Quit));
        assert_eq!(ExCommand::parse(" q! "), Ok(ExCommand::Quit));
        assert_eq!(ExCommand::parse("qa"), Ok(ExCommand::Quit));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ExCommand::parse(""), Ok(ExCommand::Nop));
        assert_eq!(ExCommand::parse("   "), Ok(ExCommand::Nop));
    }

    #[test]
    fn test_parse_unknown() {
        let err = ExCommand::parse("frobnicate").unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("frobnicate".to_string()));
        assert_eq!(err.to_string(), "Not an editor command: frobnicate");
    }
}
