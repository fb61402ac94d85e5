// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step completion predicates and the publish gate.
//!
//! Completion is **computed**, not stored. Every predicate is a pure
//! function of the current tour document.
//!
//! There are two deliberately distinct tiers:
//! - per-step completion: a soft nudge driving the sidebar checkmark,
//!   never a navigation gate;
//! - the publish gate: the strict predicate evaluated only at the review
//!   step before submission.
//!
//! The tiers are kept as separate named functions; do not merge them.

use crate::tour::Tour;

/// Whether the basics step has its required fields populated.
///
/// Requires a non-empty name, main artist, and genre.
#[must_use]
pub fn basics_complete(tour: &Tour) -> bool {
    !tour.name.trim().is_empty()
        && !tour.main_artist.trim().is_empty()
        && !tour.genre.trim().is_empty()
}

/// Whether the schedule step has its required fields populated.
///
/// Requires both tour dates and at least one route stop.
#[must_use]
pub fn schedule_complete(tour: &Tour) -> bool {
    tour.start_date.is_some() && tour.end_date.is_some() && !tour.route.is_empty()
}

/// Whether the events step has its required fields populated.
///
/// Requires at least one event.
#[must_use]
pub fn events_complete(tour: &Tour) -> bool {
    !tour.events.is_empty()
}

/// Whether the personnel step has its required fields populated.
///
/// Requires at least one artist or crew member.
#[must_use]
pub fn personnel_complete(tour: &Tour) -> bool {
    !tour.artists.is_empty() || !tour.crew.is_empty()
}

/// Whether the logistics step has its required fields populated.
///
/// Requires a transportation kind and an accommodation kind.
#[must_use]
pub fn logistics_complete(tour: &Tour) -> bool {
    tour.transportation.kind.is_some() && tour.accommodation.kind.is_some()
}

/// Whether the commercial step is complete.
///
/// Ticketing and budget data are always optional, so this step is
/// unconditionally complete.
#[must_use]
pub const fn commercial_complete(_tour: &Tour) -> bool {
    true
}

/// Whether the review step is complete.
///
/// The review step is always reachable.
#[must_use]
pub const fn review_complete(_tour: &Tour) -> bool {
    true
}

/// Evaluates the publish gate, returning every blocking reason.
///
/// This is the strict tier: it re-checks a superset of the per-step
/// requirements, including the logistics kinds and the presence of at
/// least one artist. An empty result means the tour may be published.
#[must_use]
pub fn evaluate_publish_readiness(tour: &Tour) -> Vec<String> {
    let mut blocking_reasons: Vec<String> = Vec::new();

    if tour.name.trim().is_empty() {
        blocking_reasons.push(String::from("Tour name is required"));
    }
    if tour.main_artist.trim().is_empty() {
        blocking_reasons.push(String::from("Main artist is required"));
    }
    if tour.genre.trim().is_empty() {
        blocking_reasons.push(String::from("Genre is required"));
    }
    if tour.start_date.is_none() || tour.end_date.is_none() {
        blocking_reasons.push(String::from("Both tour dates are required"));
    }
    if tour.route.is_empty() {
        blocking_reasons.push(String::from("At least one route stop is required"));
    }
    if tour.events.is_empty() {
        blocking_reasons.push(String::from("At least one event is required"));
    }
    if tour.artists.is_empty() {
        blocking_reasons.push(String::from("At least one artist is required"));
    }
    if tour.transportation.kind.is_none() {
        blocking_reasons.push(String::from("A transportation type is required"));
    }
    if tour.accommodation.kind.is_none() {
        blocking_reasons.push(String::from("An accommodation type is required"));
    }

    blocking_reasons
}

/// Whether the tour passes the publish gate.
#[must_use]
pub fn is_ready_to_publish(tour: &Tour) -> bool {
    evaluate_publish_readiness(tour).is_empty()
}
