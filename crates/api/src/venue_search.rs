// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Debounced venue search.
//!
//! Keystroke-driven searches are delayed by a fixed window; a newer query
//! arriving inside the window supersedes the pending one, which resolves
//! to `Ok(None)` without issuing a request. Only the latest query ever
//! reaches the searcher.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::request_response::VenueRecord;

/// The debounce window applied to keystroke-driven venue searches.
pub const VENUE_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// A source of venue search results.
///
/// Implemented by [`crate::BacklineClient`]; test code substitutes a stub.
pub trait VenueSearcher {
    /// Searches venues by name or city.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    fn search_venues(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<VenueRecord>, ApiError>> + Send;
}

impl VenueSearcher for crate::BacklineClient {
    async fn search_venues(&self, query: &str) -> Result<Vec<VenueRecord>, ApiError> {
        Self::search_venues(self, query).await
    }
}

/// A venue searcher with a latest-call-wins debounce window.
#[derive(Debug)]
pub struct DebouncedVenueSearch<S> {
    searcher: S,
    delay: Duration,
    generation: AtomicU64,
}

impl<S: VenueSearcher> DebouncedVenueSearch<S> {
    /// Wraps a searcher with the default debounce window.
    pub const fn new(searcher: S) -> Self {
        Self::with_delay(searcher, VENUE_SEARCH_DEBOUNCE)
    }

    /// Wraps a searcher with an explicit debounce window.
    pub const fn with_delay(searcher: S, delay: Duration) -> Self {
        Self {
            searcher,
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the wrapped searcher.
    pub const fn searcher(&self) -> &S {
        &self.searcher
    }

    /// Searches after the debounce window, unless superseded.
    ///
    /// Returns `Ok(None)` when a newer search was started during the
    /// window; the superseded call never reaches the searcher.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the delegated search fails.
    pub async fn search(&self, query: &str) -> Result<Option<Vec<VenueRecord>>, ApiError> {
        let generation: u64 = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(query, "venue search superseded before the window elapsed");
            return Ok(None);
        }

        let venues: Vec<VenueRecord> = self.searcher.search_venues(query).await?;
        Ok(Some(venues))
    }
}
