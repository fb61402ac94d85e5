// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{Candidate, CandidateStatus, EntityId};

/// One kanban column: a status bucket over the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    /// The status this column groups.
    pub status: CandidateStatus,
    /// Candidates currently in this status, in list order.
    pub candidates: Vec<&'a Candidate>,
}

/// Projects the candidate list into kanban columns.
///
/// Column membership is a pure group-by over the single source-of-truth
/// list, recomputed on every call; columns are never independently
/// mutable state. Every status gets a column, in workflow order, even
/// when empty.
#[must_use]
pub fn board_columns(candidates: &[Candidate]) -> Vec<BoardColumn<'_>> {
    CandidateStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            candidates: candidates.iter().filter(|c| c.status == status).collect(),
        })
        .collect()
}

/// The signal emitted when a candidate card is dropped on a column.
///
/// Drag-and-drop carries only the candidate id and the target status; the
/// status update itself is performed by an external collaborator. A
/// failed update leaves the list stale until the next refetch; there is
/// no transactional state here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// The candidate being moved.
    pub candidate_id: EntityId,
    /// The status of the column the card was dropped on.
    pub target: CandidateStatus,
}

impl StatusChange {
    /// Creates the signal for dropping a candidate on a column.
    #[must_use]
    pub const fn new(candidate_id: EntityId, target: CandidateStatus) -> Self {
        Self {
            candidate_id,
            target,
        }
    }
}
