use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Generator response is not valid JSON: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },

    #[error("Generator refused the query: {0}")]
    Refused(String),

    #[error("Generator returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Generator unreachable: {0}")]
    Transport(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// True for failures of the generator call itself rather than of the
    /// data it returned.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
