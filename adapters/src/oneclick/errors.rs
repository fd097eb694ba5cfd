use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwapApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("swap service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response from swap service: {0}")]
    InvalidResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SwapApiError {
    /// Build an invalid-response error
    #[allow(clippy::needless_pass_by_value)]
    pub fn invalid_response<T: ToString>(e: T) -> Self {
        SwapApiError::InvalidResponse(e.to_string())
    }

    /// HTTP status of a rejected request, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SwapApiError::Status { status, .. } => Some(*status),
            SwapApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
