use thiserror::Error;

/// Failures of the wire-record serialization surface.
///
/// Invalid field values never land here; those are accumulated as
/// [`crate::validation::Defect`]s and reported all at once. This enum covers
/// the envelope only: a record that cannot be read or written at all.
#[derive(Debug, Error)]
pub enum EntitlementsError {
    /// The compact binary form could not be produced or read.
    #[error("postcard serialization error: {0}")]
    Postcard(#[from] postcard::Error),

    /// The JSON form could not be produced or read.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
