// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{
    BudgetExpense, EntityId, EquipmentItem, LogisticsArrangement, PersonnelGroup, PersonnelMember,
    RouteStop, Sponsor, TicketDelegation, TicketType, TourEvent,
};
use chrono::{NaiveDate, NaiveTime};

/// A partial update to the basics field group.
///
/// `None` fields are left untouched; `Some` fields replace the current
/// value. This is the typed equivalent of a shallow merge-patch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasicsPatch {
    /// New tour name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New main artist.
    pub main_artist: Option<String>,
    /// New genre.
    pub genre: Option<String>,
    /// New cover image URL.
    pub cover_image: Option<String>,
}

/// A partial update to an event, keyed by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventPatch {
    /// New event name.
    pub name: Option<String>,
    /// New venue.
    pub venue: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New start time.
    pub time: Option<NaiveTime>,
    /// New description.
    pub description: Option<String>,
    /// New capacity.
    pub capacity: Option<u32>,
}

/// A partial update to an equipment item, keyed by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EquipmentPatch {
    /// New item name.
    pub name: Option<String>,
    /// New quantity.
    pub quantity: Option<u32>,
    /// New per-unit cost.
    pub cost: Option<f64>,
}

/// A partial update to a ticket type, keyed by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TicketTypePatch {
    /// New ticket name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New quantity.
    pub quantity: Option<u32>,
    /// New description.
    pub description: Option<String>,
    /// New event binding.
    pub event_id: Option<EntityId>,
    /// New third-party delegation.
    pub delegation: Option<TicketDelegation>,
    /// New sale window start.
    pub sale_start: Option<NaiveDate>,
    /// New sale window end.
    pub sale_end: Option<NaiveDate>,
    /// New per-customer cap.
    pub per_customer_cap: Option<u32>,
    /// New benefits list (replaces the whole list).
    pub benefits: Option<Vec<String>>,
}

/// A patch to the composite tour document.
///
/// Patches are the only way to request document changes. Each variant is
/// owned by exactly one wizard step, and collection mutations are keyed by
/// entity id throughout; positional removal is not supported.
#[derive(Debug, Clone, PartialEq)]
pub enum TourPatch {
    /// Merge-update the basics field group (step 1).
    SetBasics(BasicsPatch),
    /// Replace the tour dates (step 2).
    SetSchedule {
        /// New start date.
        start_date: Option<NaiveDate>,
        /// New end date.
        end_date: Option<NaiveDate>,
    },
    /// Append a route stop (step 2).
    AddRouteStop(RouteStop),
    /// Remove a route stop by id (step 2).
    RemoveRouteStop {
        /// The stop to remove.
        id: EntityId,
    },
    /// Append an event (step 3).
    AddEvent(TourEvent),
    /// Update an event by id (step 3).
    UpdateEvent {
        /// The event to update.
        id: EntityId,
        /// The fields to change.
        patch: EventPatch,
    },
    /// Remove an event by id (step 3).
    RemoveEvent {
        /// The event to remove.
        id: EntityId,
    },
    /// Bulk-derive one event per route stop (step 3).
    DeriveEventsFromRoute,
    /// Append a personnel member to a group (step 4).
    AddPersonnel {
        /// The target collection.
        group: PersonnelGroup,
        /// The member to append.
        member: PersonnelMember,
    },
    /// Remove a personnel member by id (step 4).
    RemovePersonnel {
        /// The collection to remove from.
        group: PersonnelGroup,
        /// The member to remove.
        id: EntityId,
    },
    /// Flip a member's assignment to an event (step 4).
    ToggleAssignment {
        /// The member's collection.
        group: PersonnelGroup,
        /// The member whose assignment flips.
        member_id: EntityId,
        /// The event being toggled.
        event_id: EntityId,
    },
    /// Replace the transportation arrangement (step 5).
    SetTransportation(LogisticsArrangement),
    /// Replace the accommodation arrangement (step 5).
    SetAccommodation(LogisticsArrangement),
    /// Append an equipment item (step 5).
    AddEquipment(EquipmentItem),
    /// Update an equipment item by id (step 5).
    UpdateEquipment {
        /// The item to update.
        id: EntityId,
        /// The fields to change.
        patch: EquipmentPatch,
    },
    /// Remove an equipment item by id (step 5).
    RemoveEquipment {
        /// The item to remove.
        id: EntityId,
    },
    /// Append a ticket type (step 6).
    AddTicketType(TicketType),
    /// Update a ticket type by id (step 6).
    UpdateTicketType {
        /// The ticket type to update.
        id: EntityId,
        /// The fields to change.
        patch: TicketTypePatch,
    },
    /// Remove a ticket type by id (step 6).
    RemoveTicketType {
        /// The ticket type to remove.
        id: EntityId,
    },
    /// Replace the planned budget total (step 6).
    SetBudgetTotal(f64),
    /// Append a budget expense (step 6).
    AddExpense(BudgetExpense),
    /// Remove a budget expense by id (step 6).
    RemoveExpense {
        /// The expense to remove.
        id: EntityId,
    },
    /// Append a sponsor (step 6).
    AddSponsor(Sponsor),
    /// Remove a sponsor by name (step 6).
    RemoveSponsor {
        /// The sponsor name to remove.
        name: String,
    },
}
