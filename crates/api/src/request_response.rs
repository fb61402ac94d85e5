// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response data transfer objects.
//!
//! These are distinct from domain types and represent the wire contract
//! of the external REST endpoints. Shapes are inferred from the consuming
//! call sites; where the upstream is inconsistent (the candidates
//! envelope) the DTO decodes both shapes tolerantly.

use backline_domain::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The error body carried by non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The server's error message.
    pub error: String,
}

/// A generic acknowledgement response for mutation endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AckResponse {
    /// Optional server-provided message.
    #[serde(default)]
    pub message: Option<String>,
}

/// A venue returned by the venue search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueRecord {
    /// Unique venue identifier.
    pub id: String,
    /// The venue name.
    pub name: String,
    /// The city the venue is in.
    pub city: String,
    /// Street address, when known.
    #[serde(default)]
    pub address: Option<String>,
    /// Audience capacity, when known.
    #[serde(default)]
    pub capacity: Option<u32>,
}

/// Response of `GET /api/venues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSearchResponse {
    /// The matching venues.
    pub venues: Vec<VenueRecord>,
}

/// Aggregate candidate counts, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CandidateStats {
    /// Total number of candidates.
    #[serde(default)]
    pub total: u32,
    /// Per-status counts, keyed by wire status string.
    #[serde(default)]
    pub by_status: HashMap<String, u32>,
}

/// The `data` payload of the candidates endpoint.
///
/// The upstream is inconsistent: `data` is either a bare candidate array
/// or an object carrying candidates plus stats. Both shapes decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CandidatesEnvelope {
    /// `data` was an object with candidates and stats.
    WithStats {
        /// The candidate list.
        candidates: Vec<Candidate>,
        /// Aggregate counts.
        stats: CandidateStats,
    },
    /// `data` was a bare candidate array.
    Plain(Vec<Candidate>),
}

/// The normalized result of fetching candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePage {
    /// The candidate list.
    pub candidates: Vec<Candidate>,
    /// Aggregate counts, when the server sent them.
    pub stats: Option<CandidateStats>,
}

impl From<CandidatesEnvelope> for CandidatePage {
    fn from(envelope: CandidatesEnvelope) -> Self {
        match envelope {
            CandidatesEnvelope::WithStats { candidates, stats } => Self {
                candidates,
                stats: Some(stats),
            },
            CandidatesEnvelope::Plain(candidates) => Self {
                candidates,
                stats: None,
            },
        }
    }
}

/// Response wrapper of the candidates endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidatesResponse {
    /// The inconsistent `data` payload.
    pub data: CandidatesEnvelope,
}

/// Request body of `PATCH /api/admin/onboarding/update-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// The candidate to move.
    pub candidate_id: String,
    /// The target status, as its wire string.
    pub status: String,
}

/// Request body of `POST /api/admin/onboarding/add-existing-user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddExistingUserRequest {
    /// The existing platform user to onboard.
    pub user_id: String,
    /// The position they are hired for.
    pub position: String,
    /// The hiring department.
    pub department: String,
}

/// Request body of `POST /api/admin/onboarding/invite-new-user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteNewUserRequest {
    /// The invitee's email address.
    pub email: String,
    /// The invitee's name.
    pub name: String,
    /// The position they are invited for.
    pub position: String,
    /// The hiring department.
    pub department: String,
}

/// Request body of `POST /api/admin/onboarding/review`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// The candidate under review.
    pub candidate_id: String,
    /// Review rating, 1-5.
    pub rating: u8,
    /// Free-form review notes.
    pub notes: String,
}

/// An onboarding checklist template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Unique template identifier.
    pub id: String,
    /// The template name.
    pub name: String,
    /// Ordered task descriptions.
    pub tasks: Vec<String>,
}

/// Response of `GET /api/admin/onboarding/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatesResponse {
    /// All templates.
    pub templates: Vec<TemplateRecord>,
}

/// Request body of `POST /api/admin/onboarding/templates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTemplateRequest {
    /// The template name.
    pub name: String,
    /// Ordered task descriptions.
    pub tasks: Vec<String>,
}

/// An in-flight onboarding workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    /// Unique workflow identifier.
    pub id: String,
    /// The candidate this workflow tracks.
    pub candidate_id: String,
    /// The current stage, as its wire string.
    pub current_stage: String,
}

/// Response of `GET /api/admin/onboarding/workflows`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowsResponse {
    /// All in-flight workflows.
    pub workflows: Vec<WorkflowRecord>,
}

/// Response of `GET /api/admin/onboarding/workflows/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowAnalyticsResponse {
    /// Total in-flight workflows.
    pub total: u32,
    /// Per-stage counts, keyed by wire stage string.
    #[serde(default)]
    pub by_stage: HashMap<String, u32>,
    /// Average days from application to hire, when computable.
    #[serde(default)]
    pub average_days_to_hire: Option<f64>,
}

/// Request body of `POST /api/admin/onboarding/workflows/advance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowAdvanceRequest {
    /// The workflow to advance one stage.
    pub workflow_id: String,
}

/// Response of `GET /api/artists/{id}/music`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistMusicResponse {
    /// The artist's published tracks.
    pub tracks: Vec<backline_domain::MusicTrack>,
}

/// Response of `POST /api/posts/{id}/likes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    /// The post's like count after the toggle.
    pub likes: u64,
}

/// Response of `POST /api/posts/{post_id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    /// The created comment's identifier.
    pub id: String,
}
