use music_server_types::EnvelopeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
}
