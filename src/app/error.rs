use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickfeedError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Remote error: HTTP {status}")]
    Remote { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a [`QuickfeedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity, timeout or body read failure.
    Transport,
    /// Response body did not have the expected shape.
    Decode,
    /// Non-success HTTP status where 200 was required.
    Remote,
    /// Anything raised locally (URL building, IO, configuration).
    Local,
}

impl QuickfeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuickfeedError::Transport(_) => ErrorKind::Transport,
            QuickfeedError::Decode(_) => ErrorKind::Decode,
            QuickfeedError::Remote { .. } => ErrorKind::Remote,
            QuickfeedError::InvalidUrl(_)
            | QuickfeedError::Io(_)
            | QuickfeedError::Config(_)
            | QuickfeedError::Other(_) => ErrorKind::Local,
        }
    }
}

impl From<serde_json::Error> for QuickfeedError {
    fn from(e: serde_json::Error) -> Self {
        QuickfeedError::Decode(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuickfeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(QuickfeedError::Decode("x".into()).kind(), ErrorKind::Decode);
        assert_eq!(
            QuickfeedError::Remote { status: 404 }.kind(),
            ErrorKind::Remote
        );
        assert_eq!(QuickfeedError::Config("x".into()).kind(), ErrorKind::Local);
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err: QuickfeedError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_remote_display() {
        let err = QuickfeedError::Remote { status: 503 };
        assert_eq!(err.to_string(), "Remote error: HTTP 503");
    }
}
