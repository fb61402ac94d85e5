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

mod candidate;
mod completion;
mod error;
mod finance;
mod post;
mod profile;
mod tour;
mod validation;

#[cfg(test)]
mod tests;

pub use candidate::{Candidate, CandidateStatus};
pub use completion::{
    basics_complete, commercial_complete, evaluate_publish_readiness, events_complete,
    is_ready_to_publish, logistics_complete, personnel_complete, review_complete,
    schedule_complete,
};
pub use error::DomainError;
pub use finance::TourFinancialSummary;
pub use post::{Comment, Post};
pub use profile::{AccountType, ArtistProfile, GeneralProfile, MusicTrack, Profile, VenueProfile};
pub use tour::{
    Budget, BudgetExpense, EntityId, EquipmentItem, LogisticsArrangement, PersonnelGroup,
    PersonnelMember, RouteStop, Sponsor, TicketDelegation, TicketType, Tour, TourEvent,
};
pub use validation::{
    validate_date_range, validate_equipment_item, validate_event_fields,
    validate_personnel_fields, validate_route_stop, validate_sale_window, validate_ticket_type,
    validate_unique_id,
};
