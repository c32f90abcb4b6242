// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Failures that end an operation: a fetch, a file write, a secret-store call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("no stored cookies found")]
    NoCredentials,
    #[error("stored cookies are invalid or expired")]
    InvalidSession,
    #[error("no username given for the secret store entry")]
    NoUsername,
    #[error("secret store: {0}")]
    SecretStore(#[from] keyring::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A hole in the scraped data. Reported per item; the surrounding run carries on.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Gap {
    #[error("no mapping found for topic '{title}'")]
    NoMapping { title: String },
    #[error("could not find section for {title} (id: {id})")]
    SectionMissing { title: String, id: &'static str },
    #[error("{group}: heading #{anchor} not found")]
    GroupMissing { group: &'static str, anchor: &'static str },
    #[error("{group}: card {index} has no title")]
    MissingTitle { group: &'static str, index: usize },
    #[error("{group}: topic '{title}' has no lab count")]
    MissingLabCount { group: &'static str, title: String },
    #[error("topic '{title}': lab count {raw:?} is not a number")]
    BadLabCount { title: String, raw: String },
    #[error("could not find level progress - user might not be logged in")]
    LevelsMissing,
    #[error("{tier} progress is unreadable")]
    TierUnreadable { tier: &'static str },
}
