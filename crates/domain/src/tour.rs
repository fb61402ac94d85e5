// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A caller-generated unique identifier for a tour entity.
///
/// Identity is the sole key for update and delete operations on every
/// collection in the composite document. Ids are opaque strings; new ids
/// are UUIDv4 values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an id from an existing string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single stop on the tour route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    /// Unique identifier for this stop.
    pub id: EntityId,
    /// The city of the stop.
    pub city: String,
    /// The venue name at this stop.
    pub venue: String,
    /// The date of the stop, if scheduled.
    pub date: Option<NaiveDate>,
    /// Optional (latitude, longitude) pair for map display.
    pub coordinates: Option<(f64, f64)>,
}

impl RouteStop {
    /// Creates a new route stop with a generated id.
    #[must_use]
    pub fn new(city: String, venue: String, date: Option<NaiveDate>) -> Self {
        Self {
            id: EntityId::generate(),
            city,
            venue,
            date,
            coordinates: None,
        }
    }
}

/// A single event (show) on the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourEvent {
    /// Unique identifier for this event.
    pub id: EntityId,
    /// The event name.
    pub name: String,
    /// The venue hosting the event.
    pub venue: String,
    /// The event date, if scheduled.
    pub date: Option<NaiveDate>,
    /// The start time, if scheduled.
    pub time: Option<NaiveTime>,
    /// Free-form description.
    pub description: String,
    /// Expected audience capacity.
    pub capacity: u32,
}

/// Which personnel collection a member belongs to.
///
/// Artists and crew share one record shape but are kept as two distinct
/// collections in the composite document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelGroup {
    /// Performing artists.
    Artists,
    /// Tour crew.
    Crew,
}

impl PersonnelGroup {
    /// Converts this group to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Crew => "crew",
        }
    }
}

/// A member of the tour personnel (artist or crew).
///
/// The `events` field is a many-to-many relation mutated by toggling
/// membership. No back-reference is kept on the event record; callers
/// recompute "who is assigned" by scanning personnel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonnelMember {
    /// Unique identifier for this member.
    pub id: EntityId,
    /// The member's name.
    pub name: String,
    /// The member's role (e.g., "Guitarist", "Sound Engineer").
    pub role: String,
    /// Ids of events this member is assigned to.
    pub events: Vec<EntityId>,
}

impl PersonnelMember {
    /// Creates a new member with a generated id and no assignments.
    #[must_use]
    pub fn new(name: String, role: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            role,
            events: Vec::new(),
        }
    }

    /// Checks whether this member is assigned to the given event.
    #[must_use]
    pub fn is_assigned_to(&self, event_id: &EntityId) -> bool {
        self.events.contains(event_id)
    }

    /// Flips this member's assignment to an event.
    ///
    /// Toggling twice restores the original membership. Ordering of the
    /// assignment list is not significant.
    pub fn toggle_assignment(&mut self, event_id: &EntityId) {
        if let Some(pos) = self.events.iter().position(|e| e == event_id) {
            self.events.swap_remove(pos);
        } else {
            self.events.push(event_id.clone());
        }
    }
}

/// A transportation or accommodation arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogisticsArrangement {
    /// The kind of arrangement (e.g., "Tour Bus", "Hotel").
    /// `None` until the user picks one.
    pub kind: Option<String>,
    /// Free-form details.
    pub details: String,
    /// Total cost of the arrangement.
    pub cost: f64,
}

/// A piece of equipment carried on the tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Unique identifier for this item.
    pub id: EntityId,
    /// The item name.
    pub name: String,
    /// How many units are carried.
    pub quantity: u32,
    /// Per-unit cost.
    pub cost: f64,
}

/// Third-party ticket sale delegation details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDelegation {
    /// The delegated seller's name.
    pub seller_name: String,
    /// The delegated seller's contact information.
    pub seller_contact: String,
}

/// A ticket type offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    /// Unique identifier for this ticket type.
    pub id: EntityId,
    /// The ticket name (e.g., "VIP").
    pub name: String,
    /// Price per ticket.
    pub price: f64,
    /// Number of tickets available.
    pub quantity: u32,
    /// Free-form description.
    pub description: String,
    /// Optional binding to a single event. `None` means tour-wide.
    pub event_id: Option<EntityId>,
    /// Optional third-party sale delegation.
    pub delegation: Option<TicketDelegation>,
    /// Start of the sale window, if bounded.
    pub sale_start: Option<NaiveDate>,
    /// End of the sale window, if bounded.
    pub sale_end: Option<NaiveDate>,
    /// Maximum tickets per customer, if capped.
    pub per_customer_cap: Option<u32>,
    /// Benefits included with this ticket type.
    pub benefits: Vec<String>,
}

impl TicketType {
    /// Creates a new ticket type with a generated id and no extras.
    #[must_use]
    pub fn new(name: String, price: f64, quantity: u32) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            price,
            quantity,
            description: String::new(),
            event_id: None,
            delegation: None,
            sale_start: None,
            sale_end: None,
            per_customer_cap: None,
            benefits: Vec::new(),
        }
    }
}

/// A single planned expense in the tour budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetExpense {
    /// Unique identifier for this expense entry.
    pub id: EntityId,
    /// Expense category (e.g., "Marketing").
    pub category: String,
    /// Expense amount.
    pub amount: f64,
    /// Free-form description.
    pub description: String,
}

impl BudgetExpense {
    /// Creates a new expense entry with a generated id.
    #[must_use]
    pub fn new(category: String, amount: f64, description: String) -> Self {
        Self {
            id: EntityId::generate(),
            category,
            amount,
            description,
        }
    }
}

/// The tour budget: a planned total and itemized expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Budget {
    /// The planned total budget.
    pub total: f64,
    /// Itemized planned expenses.
    pub expenses: Vec<BudgetExpense>,
}

/// A tour sponsor.
///
/// Sponsors carry no generated id; the name is the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    /// The sponsor's name.
    pub name: String,
    /// The sponsor's monetary contribution.
    pub contribution: f64,
    /// The sponsorship kind (e.g., "Media", "Equipment").
    pub kind: String,
}

/// The composite tour document assembled incrementally across wizard steps.
///
/// Created empty when planning starts, mutated monotonically via patches as
/// the user navigates steps in either direction, and submitted wholesale
/// from the review step. There is no intermediate persistence: abandoning
/// the wizard discards the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Tour {
    /// The tour name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// The headlining artist.
    pub main_artist: String,
    /// The tour genre.
    pub genre: String,
    /// Cover image URL.
    pub cover_image: String,
    /// First day of the tour.
    pub start_date: Option<NaiveDate>,
    /// Last day of the tour.
    pub end_date: Option<NaiveDate>,
    /// Ordered route stops.
    pub route: Vec<RouteStop>,
    /// Events (shows) on the tour.
    pub events: Vec<TourEvent>,
    /// Performing artists.
    pub artists: Vec<PersonnelMember>,
    /// Tour crew.
    pub crew: Vec<PersonnelMember>,
    /// The transportation arrangement.
    pub transportation: LogisticsArrangement,
    /// The accommodation arrangement.
    pub accommodation: LogisticsArrangement,
    /// Equipment carried on the tour.
    pub equipment: Vec<EquipmentItem>,
    /// Ticket types offered for sale.
    pub ticket_types: Vec<TicketType>,
    /// The tour budget.
    pub budget: Budget,
    /// Tour sponsors.
    pub sponsors: Vec<Sponsor>,
}

impl Tour {
    /// Creates a new empty tour document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn event(&self, id: &EntityId) -> Option<&TourEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Returns the personnel collection for a group.
    #[must_use]
    pub fn personnel(&self, group: PersonnelGroup) -> &[PersonnelMember] {
        match group {
            PersonnelGroup::Artists => &self.artists,
            PersonnelGroup::Crew => &self.crew,
        }
    }

    /// Returns all personnel (artists and crew) assigned to an event.
    ///
    /// The relation is stored one-sided on the personnel records, so this
    /// scans both collections on every call.
    #[must_use]
    pub fn assigned_personnel(&self, event_id: &EntityId) -> Vec<&PersonnelMember> {
        self.artists
            .iter()
            .chain(self.crew.iter())
            .filter(|m| m.is_assigned_to(event_id))
            .collect()
    }

    /// Produces a one-line summary of the document for trace output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "name={},stops={},events={},artists={},crew={},ticket_types={}",
            self.name,
            self.route.len(),
            self.events.len(),
            self.artists.len(),
            self.crew.len(),
            self.ticket_types.len()
        )
    }
}
