// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{EventError, ToolError, TransportError};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// An operation that needs an edit session ran while none was active.
    NoActiveSession,
    Tool(ToolError),
    Transport(TransportError),
    Event(EventError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NoActiveSession => write!(f, "No edit session is active"),
            Error::Tool(e) => write!(f, "Tool Error: {}", e),
            Error::Transport(e) => write!(f, "Transport Error: {}", e),
            Error::Event(e) => write!(f, "Event Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ToolError> for Error {
    fn from(err: ToolError) -> Self {
        Error::Tool(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

impl From<EventError> for Error {
    fn from(err: EventError) -> Self {
        Error::Event(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn transport_error_converts_and_keeps_status() {
        let err: Error = TransportError::Status {
            code: 500,
            message: "internal".into(),
        }
        .into();
        assert!(matches!(
            err,
            Error::Transport(TransportError::Status { code: 500, .. })
        ));
        assert!(format!("{}", err).contains("500"));
    }

    #[test]
    fn event_timeout_mentions_duration() {
        let err: Error = EventError::Timeout(Duration::from_millis(10_000)).into();
        assert!(format!("{}", err).contains("10000"));
    }

    #[test]
    fn tool_error_converts_into_tool_variant() {
        let err: Error = ToolError::NotActive.into();
        assert!(matches!(err, Error::Tool(ToolError::NotActive)));
    }
}
