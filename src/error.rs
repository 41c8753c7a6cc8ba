use crate::types::Symbol;

/// Error returned by the LCD querier or the price computation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid amount for {0}: {1}")]
    InvalidAmount(Symbol, String),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else if let Some(status) = value.status() {
            Self::Status(status.as_u16())
        } else if value.is_decode() {
            Self::MalformedResponse(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedResponse(value.to_string())
    }
}
