use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerakiError {
    /// The dashboard answered with an error status (bad credential,
    /// unknown organization or serial, and so on).
    #[error("Meraki API error: {status}: {body}")]
    Api { status: StatusCode, body: String },
    /// The dashboard kept answering 429 past the retry budget.
    #[error("Meraki API rate limit retries exhausted")]
    RateLimitExhausted,
    /// Anything that went wrong below the API: connection failures,
    /// timeouts, responses that would not deserialize.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MerakiError {
    /// True for failures the dashboard itself reported, as opposed to
    /// transport-level trouble reaching it.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            MerakiError::Api { .. } | MerakiError::RateLimitExhausted
        )
    }
}
