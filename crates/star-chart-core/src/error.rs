//! Error taxonomy for the board.
//!
//! Validation errors carry a human-readable reason; the frontend shows
//! the `Display` output directly as a status message.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A drop target named a tier that does not exist.
    #[error("unknown tier `{0}`")]
    UnknownTier(String),

    #[error("item `{0}` not found")]
    ItemNotFound(String),

    #[error("a name in at least one language is required")]
    NameRequired,

    #[error("custom item limit reached ({0})")]
    CustomItemLimit(usize),

    #[error("tier id must not be empty")]
    TierIdEmpty,

    #[error("tier id `{0}` already exists")]
    DuplicateTierId(String),

    #[error("tier color must not be empty")]
    TierColorEmpty,

    #[error("cannot have more than {0} tiers")]
    TierLimit(usize),

    #[error("at least {0} tiers are required")]
    TierMinimum(usize),

    #[error("nothing to save")]
    NothingToSave,

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("share payload: {0}")]
    SharePayload(String),
}
