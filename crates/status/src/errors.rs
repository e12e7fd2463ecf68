use thiserror::Error;

/// Classified failure of a single fetch attempt.
///
/// `UnknownHost` is terminal: a name that does not resolve will not start
/// resolving on the next attempt. Everything else is retryable within the
/// attempt budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("unknown host")]
    UnknownHost,

    #[error("network error: {0}")]
    Transport(String),

    #[error("{0}")]
    Other(String),
}
