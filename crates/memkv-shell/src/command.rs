// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use thiserror::Error;

/// A parsed, validated command ready to be executed by a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Upsert
    Set { key: String, value: String },
    // Insert only if the key is absent
    Add { key: String, value: String },
    Get(String),
    Has(String),
    Del(String),
    // Keys whose value equals the argument
    Find(String),
    // Entries whose key starts with the argument
    Prefix(String),
    // Entries with from <= key < to
    Range { from: String, to: String },
    // Erase entries whose key starts with the argument
    Purge(String),
    List,
    Size,
    Empty,
    Help,
    Quit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank line or comment. Callers skip these silently.
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("usage: {usage}")]
    MissingArgument { command: &'static str, usage: &'static str },

    #[error("{command} takes no arguments")]
    UnexpectedArgument { command: &'static str },

    /// Raised by the line reader, not by [`Command::parse`].
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

pub const HELP: &[&str] = &[
    "set <key> <value>   insert or overwrite",
    "add <key> <value>   insert only if absent",
    "get <key>           print value",
    "has <key>           true if key exists",
    "del <key>           remove key",
    "find <value>        keys holding value",
    "prefix <prefix>     entries whose key starts with prefix",
    "range <from> <to>   entries with from <= key < to",
    "purge <prefix>      remove entries whose key starts with prefix",
    "list                all entries",
    "size                number of entries",
    "empty               true if no entries",
    "help                this text",
    "quit                leave the shell",
];

impl Command {
    /// Parse one input line.
    ///
    /// The first word selects the command. For `set`/`add` the second word is
    /// the key and the remainder of the line (spaces included) is the value.
    /// Blank lines and lines starting with `#` yield [`ParseError::Empty`].
    pub fn parse(input: &str) -> Result<Command, ParseError> {
        let input = input.trim();
        if input.is_empty() || input.starts_with('#') {
            return Err(ParseError::Empty);
        }

        let (word, rest) = split_word(input);

        match word {
            "set" | "add" => {
                let (key, value) = split_word(rest);
                if key.is_empty() || value.is_empty() {
                    let (command, usage) = if word == "set" {
                        ("set", "set <key> <value>")
                    } else {
                        ("add", "add <key> <value>")
                    };
                    return Err(ParseError::MissingArgument { command, usage });
                }
                let (key, value) = (key.to_string(), value.to_string());
                Ok(if word == "set" {
                    Command::Set { key, value }
                } else {
                    Command::Add { key, value }
                })
            }
            "get" => single(rest, "get", "get <key>").map(Command::Get),
            "has" => single(rest, "has", "has <key>").map(Command::Has),
            "del" => single(rest, "del", "del <key>").map(Command::Del),
            "find" => whole(rest, "find", "find <value>").map(Command::Find),
            "prefix" => single(rest, "prefix", "prefix <prefix>").map(Command::Prefix),
            "purge" => single(rest, "purge", "purge <prefix>").map(Command::Purge),
            "range" => {
                let (from, to) = split_word(rest);
                if from.is_empty() || to.is_empty() || to.contains(char::is_whitespace) {
                    return Err(ParseError::MissingArgument {
                        command: "range",
                        usage: "range <from> <to>",
                    });
                }
                Ok(Command::Range {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
            "list" | "ls" => bare(rest, "list", Command::List),
            "size" => bare(rest, "size", Command::Size),
            "empty" => bare(rest, "empty", Command::Empty),
            "help" | "?" => bare(rest, "help", Command::Help),
            "quit" | "exit" | "q" => bare(rest, "quit", Command::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Split off the first whitespace-delimited word; the rest is trimmed.
fn split_word(input: &str) -> (&str, &str) {
    input
        .split_once(char::is_whitespace)
        .map(|(w, r)| (w, r.trim()))
        .unwrap_or((input, ""))
}

fn single(rest: &str, command: &'static str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        Err(ParseError::MissingArgument { command, usage })
    } else {
        Ok(rest.to_string())
    }
}

fn whole(rest: &str, command: &'static str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument { command, usage })
    } else {
        Ok(rest.to_string())
    }
}

fn bare(rest: &str, command: &'static str, cmd: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(cmd)
    } else {
        Err(ParseError::UnexpectedArgument { command })
    }
}
