// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{
    Tour, basics_complete, commercial_complete, events_complete, logistics_complete,
    personnel_complete, review_complete, schedule_complete,
};

/// One page of the planning wizard.
///
/// Steps are 1-indexed in display order. Each step owns a named slice of
/// the composite document and has a completion predicate evaluated from
/// the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepId {
    /// Tour identity: name, artist, genre, cover image.
    Basics,
    /// Tour dates and route stops.
    Schedule,
    /// Events (shows) on the tour.
    Events,
    /// Artists and crew.
    Personnel,
    /// Transportation, accommodation, and equipment.
    Logistics,
    /// Tickets, budget, and sponsors.
    Commercial,
    /// Final review and submission.
    Review,
}

impl StepId {
    /// All steps in wizard order.
    pub const ALL: [Self; 7] = [
        Self::Basics,
        Self::Schedule,
        Self::Events,
        Self::Personnel,
        Self::Logistics,
        Self::Commercial,
        Self::Review,
    ];

    /// Returns this step's 1-based index.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Basics => 1,
            Self::Schedule => 2,
            Self::Events => 3,
            Self::Personnel => 4,
            Self::Logistics => 5,
            Self::Commercial => 6,
            Self::Review => 7,
        }
    }

    /// Looks up a step by its 1-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Returns the step after this one, or `None` at the last step.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the step before this one, or `None` at the first step.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Returns the display title for this step.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Schedule => "Schedule & Route",
            Self::Events => "Events",
            Self::Personnel => "Personnel",
            Self::Logistics => "Logistics",
            Self::Commercial => "Tickets & Budget",
            Self::Review => "Review",
        }
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Display metadata for one wizard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    /// The step identifier.
    pub id: StepId,
    /// The display title.
    pub title: &'static str,
    /// A one-line description of what the step collects.
    pub summary: &'static str,
}

/// Returns the ordered step registry: identifier and display metadata for
/// every step, paired with the completion predicate via
/// [`is_step_complete`].
#[must_use]
pub const fn step_registry() -> [StepInfo; 7] {
    [
        StepInfo {
            id: StepId::Basics,
            title: StepId::Basics.title(),
            summary: "Name, main artist, genre, and cover image",
        },
        StepInfo {
            id: StepId::Schedule,
            title: StepId::Schedule.title(),
            summary: "Tour dates and route stops",
        },
        StepInfo {
            id: StepId::Events,
            title: StepId::Events.title(),
            summary: "Shows, venues, and capacities",
        },
        StepInfo {
            id: StepId::Personnel,
            title: StepId::Personnel.title(),
            summary: "Artists, crew, and event assignments",
        },
        StepInfo {
            id: StepId::Logistics,
            title: StepId::Logistics.title(),
            summary: "Transportation, accommodation, and equipment",
        },
        StepInfo {
            id: StepId::Commercial,
            title: StepId::Commercial.title(),
            summary: "Ticket types, budget, and sponsors",
        },
        StepInfo {
            id: StepId::Review,
            title: StepId::Review.title(),
            summary: "Totals, readiness, and submission",
        },
    ]
}

/// Evaluates the completion predicate for a step against the current
/// document.
///
/// This is the soft tier: it drives the sidebar checkmark only and never
/// gates navigation. The publish gate is a separate, stricter predicate
/// evaluated at the review step.
#[must_use]
pub fn is_step_complete(step: StepId, tour: &Tour) -> bool {
    match step {
        StepId::Basics => basics_complete(tour),
        StepId::Schedule => schedule_complete(tour),
        StepId::Events => events_complete(tour),
        StepId::Personnel => personnel_complete(tour),
        StepId::Logistics => logistics_complete(tour),
        StepId::Commercial => commercial_complete(tour),
        StepId::Review => review_complete(tour),
    }
}
