use thiserror::Error;

/// Failures raised while talking to the block explorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// The request never produced a successful response (connect failure,
    /// timeout, non-2xx status).
    #[error("transport failure: {message}")]
    Transport { message: String },

    /// A response arrived but its body did not match the expected shape.
    #[error("malformed upstream data: {message}")]
    UpstreamData { message: String },

    /// The client was built with a base URL that does not parse.
    #[error("invalid explorer base URL: {message}")]
    InvalidBaseUrl { message: String },
}

impl ExplorerError {
    /// Stable machine-readable name used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ExplorerError::Transport { .. } => "transport",
            ExplorerError::UpstreamData { .. } => "upstream_data",
            ExplorerError::InvalidBaseUrl { .. } => "invalid_base_url",
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        ExplorerError::Transport {
            message: message.into(),
        }
    }

    pub fn upstream_data(message: impl Into<String>) -> Self {
        ExplorerError::UpstreamData {
            message: message.into(),
        }
    }
}
