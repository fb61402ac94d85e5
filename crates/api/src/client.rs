// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The HTTP client for the Backline REST endpoints.
//!
//! All methods are thin translations between domain types and wire DTOs.
//! Methods named `*_or_empty` absorb failures into an empty result and a
//! warning, matching surfaces where a fetch failure degrades the view
//! rather than blocking it. Everything else propagates [`ApiError`].

use std::time::Duration;

use backline_domain::{Tour, evaluate_publish_readiness};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::request_response::{
    AckResponse, AddExistingUserRequest, ArtistMusicResponse, CandidatePage, CandidatesResponse,
    CommentResponse, CreateTemplateRequest, ErrorBody, InviteNewUserRequest, LikeResponse,
    ReviewRequest, TemplatesResponse, UpdateStatusRequest, VenueRecord, VenueSearchResponse,
    WorkflowAdvanceRequest, WorkflowAnalyticsResponse, WorkflowsResponse,
};
use crate::submit::{SubmitTourRequest, SubmitTourResponse, partition_tour};

/// Configuration for a [`BacklineClient`].
#[derive(Debug, Clone)]
pub struct BacklineClientConfig {
    /// Base URL of the API server, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BacklineClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:3000"),
            timeout_secs: 30,
        }
    }
}

impl BacklineClientConfig {
    /// Creates a configuration with the given base URL and default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Client for the Backline REST endpoints.
#[derive(Debug, Clone)]
pub struct BacklineClient {
    config: BacklineClientConfig,
    http: reqwest::Client,
}

impl BacklineClient {
    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: BacklineClientConfig) -> Result<Self, ApiError> {
        let http: reqwest::Client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Decodes a response, translating non-2xx statuses into
    /// [`ApiError::Server`] with the server's message verbatim.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status: reqwest::StatusCode = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let decoded: T = serde_json::from_slice(&body)?;
            return Ok(decoded);
        }

        let message: String = serde_json::from_slice::<ErrorBody>(&body).map_or_else(
            |_| format!("request failed with status {}", status.as_u16()),
            |e| e.error,
        );

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response: reqwest::Response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response: reqwest::Response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn patch<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        let response: reqwest::Response = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "DELETE");
        let response: reqwest::Response = self.http.delete(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// Searches venues by name or city.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn search_venues(&self, query: &str) -> Result<Vec<VenueRecord>, ApiError> {
        debug!(query, "searching venues");
        let response: reqwest::Response = self
            .http
            .get(self.url("/api/venues"))
            .query(&[("query", query)])
            .send()
            .await?;
        let decoded: VenueSearchResponse = Self::decode(response).await?;
        Ok(decoded.venues)
    }

    /// Searches venues, absorbing failures into an empty list.
    pub async fn search_venues_or_empty(&self, query: &str) -> Vec<VenueRecord> {
        match self.search_venues(query).await {
            Ok(venues) => venues,
            Err(error) => {
                warn!(%error, query, "venue search failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Publishes a tour.
    ///
    /// The publish gate is enforced locally before any request is issued:
    /// a tour with blocking reasons is refused without touching the
    /// network, and the document is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::PublishBlocked`] if the tour does not pass the
    /// publish gate, or any other [`ApiError`] on request failure.
    pub async fn submit_tour(&self, tour: &Tour) -> Result<SubmitTourResponse, ApiError> {
        let reasons: Vec<String> = evaluate_publish_readiness(tour);
        if !reasons.is_empty() {
            return Err(ApiError::PublishBlocked { reasons });
        }

        debug!(summary = %tour.summary(), "submitting tour");
        let request: SubmitTourRequest = partition_tour(tour);
        self.post("/api/tours/planner", &request).await
    }

    /// Fetches onboarding candidates, optionally scoped to one venue.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn fetch_candidates(
        &self,
        venue_id: Option<&str>,
    ) -> Result<CandidatePage, ApiError> {
        let mut request: reqwest::RequestBuilder =
            self.http.get(self.url("/api/admin/onboarding/candidates"));
        if let Some(venue_id) = venue_id {
            request = request.query(&[("venue_id", venue_id)]);
        }

        let response: reqwest::Response = request.send().await?;
        let decoded: CandidatesResponse = Self::decode(response).await?;
        Ok(decoded.data.into())
    }

    /// Fetches candidates, absorbing failures into an empty page.
    pub async fn fetch_candidates_or_empty(&self, venue_id: Option<&str>) -> CandidatePage {
        match self.fetch_candidates(venue_id).await {
            Ok(page) => page,
            Err(error) => {
                warn!(%error, "candidate fetch failed, returning an empty page");
                CandidatePage {
                    candidates: Vec::new(),
                    stats: None,
                }
            }
        }
    }

    /// Moves a candidate to a new onboarding status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn update_candidate_status(
        &self,
        request: &UpdateStatusRequest,
    ) -> Result<AckResponse, ApiError> {
        self.patch("/api/admin/onboarding/update-status", request)
            .await
    }

    /// Adds an existing platform user to the onboarding pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn add_existing_user(
        &self,
        request: &AddExistingUserRequest,
    ) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/add-existing-user", request)
            .await
    }

    /// Invites a new user into the onboarding pipeline by email.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn invite_new_user(
        &self,
        request: &InviteNewUserRequest,
    ) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/invite-new-user", request)
            .await
    }

    /// Records a review for a candidate.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn submit_review(&self, request: &ReviewRequest) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/review", request).await
    }

    /// Seeds the default onboarding checklist templates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn initialize_templates(&self) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/initialize-templates", &())
            .await
    }

    /// Lists all onboarding checklist templates.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn list_templates(&self) -> Result<TemplatesResponse, ApiError> {
        self.get("/api/admin/onboarding/templates").await
    }

    /// Creates an onboarding checklist template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn create_template(
        &self,
        request: &CreateTemplateRequest,
    ) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/templates", request).await
    }

    /// Deletes an onboarding checklist template.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn delete_template(&self, template_id: &str) -> Result<AckResponse, ApiError> {
        self.delete(&format!("/api/admin/onboarding/templates/{template_id}"))
            .await
    }

    /// Lists all in-flight onboarding workflows.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn fetch_workflows(&self) -> Result<WorkflowsResponse, ApiError> {
        self.get("/api/admin/onboarding/workflows").await
    }

    /// Fetches aggregate workflow analytics.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn fetch_workflow_analytics(&self) -> Result<WorkflowAnalyticsResponse, ApiError> {
        self.get("/api/admin/onboarding/workflows/analytics").await
    }

    /// Advances a workflow to its next stage.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn advance_workflow(
        &self,
        request: &WorkflowAdvanceRequest,
    ) -> Result<AckResponse, ApiError> {
        self.post("/api/admin/onboarding/workflows/advance", request)
            .await
    }

    /// Fetches an artist's published tracks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn fetch_artist_music(&self, artist_id: &str) -> Result<ArtistMusicResponse, ApiError> {
        self.get(&format!("/api/artists/{artist_id}/music")).await
    }

    /// Toggles the caller's like on a post.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn like_post(&self, post_id: &str) -> Result<LikeResponse, ApiError> {
        self.post(&format!("/api/posts/{post_id}/likes"), &()).await
    }

    /// Adds a comment to a post.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, server, or decode failure.
    pub async fn comment_post(&self, post_id: &str, body: &str) -> Result<CommentResponse, ApiError> {
        #[derive(Serialize)]
        struct CommentBody<'a> {
            body: &'a str,
        }

        self.post(&format!("/api/posts/{post_id}/comments"), &CommentBody { body })
            .await
    }
}
