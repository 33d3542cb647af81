use thiserror::Error;

#[derive(Error, Debug)]
pub enum SbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Caller errors raised by commands before any client call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command needs an event but none was given")]
    MissingEvent,

    #[error("Event has no {0}")]
    MissingEventField(&'static str),

    #[error("Neither channel nor user set, nowhere to send")]
    NoDestination,
}

pub type Result<T> = std::result::Result<T, SbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_converts_into_sbot_error() {
        let err: SbotError = CommandError::MissingEventField("ts").into();
        assert!(matches!(
            err,
            SbotError::Command(CommandError::MissingEventField("ts"))
        ));
        assert_eq!(err.to_string(), "Command error: Event has no ts");
    }

    #[test]
    fn test_io_error_converts_into_sbot_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SbotError = io.into();
        assert!(matches!(err, SbotError::Io(_)));
    }
}
