#[derive(Debug, thiserror::Error)]
pub enum MalError {
    /// The query matched nothing.
    #[error("no results")]
    NotFound,

    /// The API rejected the request parameters.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The API answered with a server-side or unexpected failure.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl MalError {
    /// Whether the failure should be reported as "nothing found" rather than an error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
