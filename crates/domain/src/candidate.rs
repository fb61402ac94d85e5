// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::tour::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The fixed sequence of onboarding stages a candidate moves through.
///
/// The order of this enum is the order of the workflow: stage comparisons
/// are plain index comparisons, and the kanban board renders one column per
/// status in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// Application received.
    #[default]
    Applied,
    /// Initial screening in progress.
    Screening,
    /// Interviewing.
    Interview,
    /// Offer extended.
    Offer,
    /// Offer accepted, onboarding tasks in progress.
    Onboarding,
    /// Fully onboarded.
    Hired,
}

impl CandidateStatus {
    /// All stages in workflow order.
    pub const ALL: [Self; 6] = [
        Self::Applied,
        Self::Screening,
        Self::Interview,
        Self::Offer,
        Self::Onboarding,
        Self::Hired,
    ];

    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Screening => "screening",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Onboarding => "onboarding",
            Self::Hired => "hired",
        }
    }

    /// Returns a human-readable label for this stage.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Onboarding => "Onboarding",
            Self::Hired => "Hired",
        }
    }

    /// Returns this stage's position in the workflow (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// Returns the next stage in the workflow, or `None` at the terminal
    /// stage.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Whether this is the terminal stage.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }
}

impl FromStr for CandidateStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(Self::Applied),
            "screening" => Ok(Self::Screening),
            "interview" => Ok(Self::Interview),
            "offer" => Ok(Self::Offer),
            "onboarding" => Ok(Self::Onboarding),
            "hired" => Ok(Self::Hired),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A staff onboarding candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique identifier for this candidate.
    pub id: EntityId,
    /// The candidate's name.
    pub name: String,
    /// The candidate's email address.
    pub email: String,
    /// The position applied for.
    pub position: String,
    /// The hiring department.
    pub department: String,
    /// The candidate's current onboarding stage.
    pub status: CandidateStatus,
    /// The venue this candidate is being hired for, if scoped.
    pub venue_id: Option<EntityId>,
    /// The date the application was received.
    pub applied_at: Option<NaiveDate>,
}
