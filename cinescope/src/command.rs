//! Line commands accepted on stdin.

use cinescope_core::Message;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  search <term>   start a new search (also: / <term>)
  more            load the next page and keep loading on scroll
  scroll [px]     report the distance from the bottom of the list (default 0)
  open <n|id>     show details for a listed result or an IMDb id
  back            return from details to the results
  home            clear everything and start over
  help            show this text
  quit            exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward straight to the session.
    Dispatch(Message),
    /// Open a result by list position or id; resolved against what is
    /// currently listed.
    Open(String),
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' is not a distance in pixels")]
    InvalidDistance(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Nothing);
        }

        if let Some(term) = line.strip_prefix('/') {
            return Ok(search(term));
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "search" | "s" => Ok(search(rest)),
            "more" | "m" => Ok(Command::Dispatch(Message::LoadMoreClicked)),
            "scroll" => {
                let distance_from_bottom = if rest.is_empty() {
                    0.0
                } else {
                    rest.parse::<f32>()
                        .ok()
                        .filter(|px| px.is_finite() && *px >= 0.0)
                        .ok_or_else(|| {
                            CommandError::InvalidDistance(rest.to_string())
                        })?
                };
                Ok(Command::Dispatch(Message::Scrolled {
                    distance_from_bottom,
                }))
            }
            "open" | "o" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("open"));
                }
                Ok(Command::Open(rest.to_string()))
            }
            "back" | "b" => Ok(Command::Dispatch(Message::ReturnToResults)),
            "home" => Ok(Command::Dispatch(Message::RestartRequested)),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

// Empty terms still go to the session, which answers with a prompt.
fn search(term: &str) -> Command {
    Command::Dispatch(Message::SearchSubmitted(term.trim().to_string()))
}
