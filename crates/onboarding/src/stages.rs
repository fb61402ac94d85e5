// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed workflow stage sequence.
//!
//! The onboarding workflow is the ordered [`CandidateStatus`] list, not a
//! general state machine: progress is decided by plain index comparison
//! against the current stage.

use backline_domain::{Candidate, CandidateStatus};

/// A stage's position relative to the current stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageProgress {
    /// The stage precedes the current one.
    Completed,
    /// The stage is the current one.
    Current,
    /// The stage follows the current one.
    Upcoming,
}

/// Classifies a stage against the current stage by index comparison.
#[must_use]
pub fn stage_progress(stage: CandidateStatus, current: CandidateStatus) -> StageProgress {
    if stage.index() < current.index() {
        StageProgress::Completed
    } else if stage.index() == current.index() {
        StageProgress::Current
    } else {
        StageProgress::Upcoming
    }
}

/// Advances a workflow to its next stage.
///
/// A no-op at the terminal stage.
#[must_use]
pub fn advance(current: CandidateStatus) -> CandidateStatus {
    current.next().unwrap_or(current)
}

/// Per-stage candidate counts, in workflow order.
///
/// This is the shape backing the workflow analytics endpoint; like the
/// kanban board it is a pure fold over the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageStats {
    /// Total candidates counted.
    pub total: usize,
    /// `(stage, count)` pairs for every stage, in order.
    pub by_stage: Vec<(CandidateStatus, usize)>,
}

impl StageStats {
    /// Computes stage statistics over a candidate list.
    #[must_use]
    pub fn compute(candidates: &[Candidate]) -> Self {
        let by_stage: Vec<(CandidateStatus, usize)> = CandidateStatus::ALL
            .into_iter()
            .map(|status| {
                let count: usize = candidates.iter().filter(|c| c.status == status).count();
                (status, count)
            })
            .collect();

        Self {
            total: candidates.len(),
            by_stage,
        }
    }

    /// Returns the count for one stage.
    #[must_use]
    pub fn count(&self, stage: CandidateStatus) -> usize {
        self.by_stage
            .iter()
            .find(|(s, _)| *s == stage)
            .map_or(0, |(_, n)| *n)
    }
}
