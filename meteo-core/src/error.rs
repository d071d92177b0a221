use thiserror::Error;

/// Reasons a single fetch can fail. None of them is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, or the body could not be read.
    #[error("Request to Meteomatics failed")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("Unable to fetch data. Status code: {status}")]
    Api { status: u16 },

    /// A 200 response whose body is not the expected JSON document.
    #[error("Failed to parse Meteomatics response")]
    Parse(#[from] serde_json::Error),

    /// The runtime backing a blocking fetch could not be started.
    #[error("Failed to start runtime for blocking fetch")]
    Runtime(#[source] std::io::Error),
}

impl FetchError {
    /// HTTP status carried by an [`FetchError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Api { status } => Some(*status),
            _ => None,
        }
    }
}
