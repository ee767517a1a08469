use flightdesk_shared::FlightId;

pub const HELP: &str = "\
commands:
  search              fetch available flights
  book <id>           open the booking form for a flight
  set <field> <value> fill a form field (name, email, ...)
  confirm             submit the booking
  cancel              discard the booking form
  close               dismiss the confirmation
  wait                block until in-flight requests resolve
  show                redraw the screen
  help                this text
  quit                leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search,
    Book(FlightId),
    Set { field: String, value: String },
    Confirm,
    Cancel,
    Close,
    Wait,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Invalid flight id: {0}")]
    InvalidFlightId(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "search" | "s" => Ok(Command::Search),
            "book" | "b" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("flight id"));
                }
                rest.parse::<u64>()
                    .map(|id| Command::Book(FlightId(id)))
                    .map_err(|_| CommandError::InvalidFlightId(rest.to_string()))
            }
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "confirm" => Ok(Command::Confirm),
            "cancel" => Ok(Command::Cancel),
            "close" => Ok(Command::Close),
            "wait" => Ok(Command::Wait),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("search"), Ok(Command::Search));
        assert_eq!(Command::parse("  CONFIRM "), Ok(Command::Confirm));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_book() {
        assert_eq!(Command::parse("book 12"), Ok(Command::Book(FlightId(12))));
        assert_eq!(
            Command::parse("book"),
            Err(CommandError::MissingArgument("flight id"))
        );
        assert_eq!(
            Command::parse("book twelve"),
            Err(CommandError::InvalidFlightId("twelve".to_string()))
        );
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            Command::parse("set name Asha Rao"),
            Ok(Command::Set {
                field: "name".to_string(),
                value: "Asha Rao".to_string()
            })
        );
        assert_eq!(
            Command::parse("set email"),
            Ok(Command::Set {
                field: "email".to_string(),
                value: String::new()
            })
        );
        assert_eq!(Command::parse("set"), Err(CommandError::MissingArgument("field")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Command::parse(""), Err(CommandError::Empty));
        assert_eq!(
            Command::parse("fly"),
            Err(CommandError::Unknown("fly".to_string()))
        );
    }
}
