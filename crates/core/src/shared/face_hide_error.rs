use thiserror::Error;

use crate::shared::constants::ERROR_EXCERPT_CHARS;

/// Failure of one submission. Every variant aborts the run and is shown to
/// the user as-is; none are retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceHideError {
    #[error("Network request failed: {0}")]
    Transport(String),
    #[error("API request failed ({status}). {details}")]
    Api { status: u16, details: String },
    #[error("API response is missing image data (image_base64).")]
    MissingImageData,
    #[error("API returned an empty image payload.")]
    EmptyPayload,
    #[error("Unexpected response format. Expected JSON with image_base64 or an image binary.")]
    UnexpectedFormat,
    #[error("{0}")]
    Processing(String),
}

impl FaceHideError {
    /// Builds an API failure quoting at most the first 160 characters of the body.
    pub fn api(status: u16, body: &str) -> Self {
        let excerpt: String = body.chars().take(ERROR_EXCERPT_CHARS).collect();
        let details = if excerpt.is_empty() {
            "No error details were returned.".to_string()
        } else {
            excerpt
        };
        Self::Api { status, details }
    }
}
