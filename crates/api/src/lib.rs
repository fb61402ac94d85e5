// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
mod request_response;
mod submit;
mod venue_search;

#[cfg(test)]
mod tests;

pub use client::{BacklineClient, BacklineClientConfig};
pub use error::ApiError;
pub use request_response::{
    AckResponse, AddExistingUserRequest, ArtistMusicResponse, CandidatePage, CandidateStats,
    CandidatesEnvelope, CandidatesResponse, CommentResponse, CreateTemplateRequest, ErrorBody,
    InviteNewUserRequest, LikeResponse, ReviewRequest, TemplateRecord, TemplatesResponse,
    UpdateStatusRequest, VenueRecord, VenueSearchResponse, WorkflowAdvanceRequest,
    WorkflowAnalyticsResponse, WorkflowRecord, WorkflowsResponse,
};
pub use submit::{
    CommercialGroup, EventsGroup, LogisticsGroup, PersonnelStepGroup, ScheduleGroup,
    SubmitTourRequest, SubmitTourResponse, TourBasicsGroup, partition_tour, reconstruct_tour,
};
pub use venue_search::{DebouncedVenueSearch, VENUE_SEARCH_DEBOUNCE, VenueSearcher};
