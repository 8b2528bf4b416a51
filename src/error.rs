#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
    #[error("Request cancelled")]
    Cancelled,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Valorant Data: empty name")]
    EmptyName,
    #[error("Invalid Valorant Data: empty tag")]
    EmptyTag,
    #[error("Invalid Valorant Data: no ranked elo")]
    ZeroElo,
}

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("Target parameter is missing")]
    MissingTarget,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ProbeError {
    /// Short label used for the `outcome` dimension of the probe counter.
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::MissingTarget => "missing_target",
            ProbeError::Fetch(_) => "fetch_error",
            ProbeError::Parse(_) => "parse_error",
            ProbeError::Validation(_) => "validation_error",
        }
    }
}
