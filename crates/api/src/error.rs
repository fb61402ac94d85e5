// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the HTTP boundary.
//!
//! The taxonomy mirrors how failures surface to the user:
//! - validation failures block the action before any request is issued;
//! - server failures carry the server's message verbatim;
//! - transport and decode failures get a generic description.
//!
//! No error is retried automatically; recovery is always a manual
//! re-action by the user.

use thiserror::Error;

/// Errors that can occur at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    ///
    /// The message is the server-provided error string, verbatim, when
    /// the body carried one.
    #[error("server error ({status}): {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// The server's error message, or a generic fallback.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The tour did not pass the publish gate.
    ///
    /// Submission is refused locally; no request is issued and the
    /// in-memory document is untouched.
    #[error("tour is not ready to publish: {}", reasons.join("; "))]
    PublishBlocked {
        /// Every blocking reason, as reported by the publish gate.
        reasons: Vec<String>,
    },
}

impl ApiError {
    /// Whether this error carries a server-provided message.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}
