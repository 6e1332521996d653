//! High-level service facade combining the source and the enrichment pipeline.

use std::sync::Arc;

use tracing::{debug, error};

use crate::enrich::enrich;
use crate::model::{EnrichedSkip, Location};
use crate::ports::{SkipSource, SourceError};

#[derive(thiserror::Error, Debug)]
/// Errors surfaced to clients of [`SkipyardService`].
pub enum LoadError {
    /// Listings could not be fetched; the cause is kept as the source.
    #[error("Failed to load skip data. Please try again later.")]
    Failed(#[source] SourceError),
}

/// Public entry point for loading display-ready skips.
pub struct SkipyardService {
    source: Arc<dyn SkipSource>,
}

impl SkipyardService {
    /// Create a new service bound to the given source.
    #[must_use]
    pub fn new(source: Arc<dyn SkipSource>) -> Self {
        Self { source }
    }

    /// Name of the underlying source.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Fetch and enrich all listings for a location.
    ///
    /// Either every listing is returned enriched, in source order, or nothing is.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Failed`] if the source request fails.
    pub async fn load(&self, location: &Location) -> Result<Vec<EnrichedSkip>, LoadError> {
        debug!(source = self.source.name(), %location, "loading skips");

        let raw = self.source.fetch(location).await.map_err(|err| {
            error!(source = self.source.name(), %location, error = %err, "error fetching skips");
            LoadError::Failed(err)
        })?;

        Ok(enrich(raw))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::raw_skip;
    use crate::model::RawSkip;

    struct FakeSource {
        listings: Result<Vec<RawSkip>, u16>,
        seen: Mutex<Vec<Location>>,
    }

    impl FakeSource {
        fn new(listings: Result<Vec<RawSkip>, u16>) -> Self {
            Self {
                listings,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl SkipSource for FakeSource {
        fn name(&self) -> &str {
            "fake"
        }

        async fn fetch(&self, location: &Location) -> Result<Vec<RawSkip>, SourceError> {
            self.seen
                .lock()
                .expect("lock is not poisoned")
                .push(location.clone());
            self.listings.clone().map_err(SourceError::Status)
        }
    }

    #[tokio::test]
    async fn load_enriches_in_source_order() {
        let source = Arc::new(FakeSource::new(Ok(vec![
            raw_skip(1, 8, false),
            raw_skip(2, 20, true),
            raw_skip(3, 6, false),
        ])));
        let shared: Arc<dyn SkipSource> = Arc::<FakeSource>::clone(&source);
        let service = SkipyardService::new(shared);
        let location = Location::new("NR32", "Lowestoft");

        let skips = service.load(&location).await.expect("fake source succeeds");

        let sizes: Vec<u32> = skips.iter().map(EnrichedSkip::size).collect();
        assert_eq!(sizes, vec![8, 20, 6]);
        assert_eq!(
            *source.seen.lock().expect("lock is not poisoned"),
            vec![location]
        );
    }

    #[tokio::test]
    async fn source_failure_becomes_generic_load_error() {
        let service = SkipyardService::new(Arc::new(FakeSource::new(Err(503))));

        let err = service
            .load(&Location::default())
            .await
            .expect_err("fake source fails");

        assert_eq!(
            err.to_string(),
            "Failed to load skip data. Please try again later."
        );
        let cause = err.source().map(ToString::to_string);
        assert_eq!(cause.as_deref(), Some("Unexpected HTTP status: 503"));
    }
}
