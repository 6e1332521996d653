//! Trait describing the upstream listing source and its errors.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{Location, RawSkip};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to a listing source.
pub enum SourceError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Source answered with a non-success HTTP status.
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    /// Response body did not match the listing shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

#[async_trait]
/// Trait for backends that list available skips for a location.
pub trait SkipSource: Send + Sync {
    /// Short name of the source, used in logs.
    fn name(&self) -> &str;

    /// Fetch raw listings for the location, in the order the source returns them.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the request fails or the response cannot be decoded.
    async fn fetch(&self, location: &Location) -> Result<Vec<RawSkip>, SourceError>;
}
