use thiserror::Error;

/// Failures of the token exchange that never produced a usable answer.
///
/// A non-success HTTP status is not an error here: the endpoint did answer,
/// and the caller shows that answer to the operator.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("could not reach the token endpoint: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("the token endpoint returned a malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
