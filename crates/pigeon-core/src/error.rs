use crate::pigeon::PigeonId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid pedigree depth {depth}: must be between 1 and {max}")]
    InvalidDepth { depth: usize, max: usize },

    #[error("duplicate pigeon id in store: {id}")]
    DuplicatePigeon { id: PigeonId },

    #[error("unknown field name: {name}")]
    UnknownField { name: String },

    #[error("pigeon store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
