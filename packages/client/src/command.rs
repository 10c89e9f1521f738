//! Parsing of REPL input lines.

use std::path::PathBuf;

/// One line typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to post in the current room
    Send(String),
    Join(String),
    Rooms,
    Name(String),
    Clear,
    Reset,
    Export(Option<PathBuf>),
    Help,
    Quit,
    /// A slash command missing its argument; holds the usage line
    Usage(&'static str),
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  /join <room>     join or create a room
  /rooms           list rooms
  /name <name>     change your display name
  /clear           delete every message in this room
  /reset           wipe all rooms and messages
  /export [path]   save this room's transcript
  /help            show this help
  /quit            leave
Anything else is sent as a message.";

/// Parse an input line; `None` for a blank line
pub fn parse(line: &str) -> Option<Command> {
    if line.trim().is_empty() {
        return None;
    }

    let Some(rest) = line.trim_start().strip_prefix('/') else {
        return Some(Command::Send(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest.trim_end(), ""),
    };

    let command = match name {
        "join" if arg.is_empty() => Command::Usage("/join <room>"),
        "join" => Command::Join(arg.to_string()),
        "rooms" => Command::Rooms,
        "name" if arg.is_empty() => Command::Usage("/name <name>"),
        "name" => Command::Name(arg.to_string()),
        "clear" => Command::Clear,
        "reset" => Command::Reset,
        "export" if arg.is_empty() => Command::Export(None),
        "export" => Command::Export(Some(PathBuf::from(arg))),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}
