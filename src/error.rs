use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("GH_TOKEN environment variable not set")]
    MissingToken,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rate limit too low ({remaining} remaining), resets {resets}")]
    RateLimited { remaining: u64, resets: String },

    #[error("rate limit check failed: {0}")]
    RateCheckFailed(String),
}

impl From<octocrab::Error> for ActivityError {
    fn from(e: octocrab::Error) -> Self {
        ActivityError::GitHub(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
