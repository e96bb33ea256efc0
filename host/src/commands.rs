use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  spin              spin the wheel
  ok                remove the announced winner and continue
  add <name>        put a new name on the wheel
  restart           bring back the starting names
  clear             remove every name
  list              show the names on the wheel
  status            print the wheel state as JSON
  help              show this message
  quit              leave";

/// User intents forwarded to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Spin,
    Acknowledge,
    Add(String),
    Restart,
    Clear,
    List,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "spin" | "s" => Ok(Self::Spin),
            "ok" | "remove" => Ok(Self::Acknowledge),
            // Blank names are dropped later by the engine, not here.
            "add" | "a" => Ok(Self::Add(rest.to_string())),
            "restart" | "reset" => Ok(Self::Restart),
            "clear" => Ok(Self::Clear),
            "list" | "ls" => Ok(Self::List),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
