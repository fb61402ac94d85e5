// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::tour::{EntityId, EquipmentItem, PersonnelMember, RouteStop, TicketType, TourEvent};
use chrono::NaiveDate;

/// Validates that an event's basic field constraints are met.
///
/// This checks required fields only; uniqueness requires context and is
/// checked separately via [`validate_unique_id`]. Capacity is not
/// validated here: events bulk-derived from route stops start at zero and
/// are filled in afterwards.
///
/// # Errors
///
/// Returns an error if the event name is empty.
pub fn validate_event_fields(event: &TourEvent) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if event.name.trim().is_empty() {
        return Err(DomainError::EmptyName { entity: "event" });
    }

    Ok(())
}

/// Validates that a route stop names a city and a venue.
///
/// # Errors
///
/// Returns an error if the city or venue is empty.
pub fn validate_route_stop(stop: &RouteStop) -> Result<(), DomainError> {
    if stop.city.trim().is_empty() {
        return Err(DomainError::MissingField { field: "city" });
    }
    if stop.venue.trim().is_empty() {
        return Err(DomainError::MissingField { field: "venue" });
    }
    Ok(())
}

/// Validates that a personnel member names a person and a role.
///
/// # Errors
///
/// Returns an error if the name or role is empty.
pub fn validate_personnel_fields(member: &PersonnelMember) -> Result<(), DomainError> {
    if member.name.trim().is_empty() {
        return Err(DomainError::EmptyName {
            entity: "personnel member",
        });
    }
    if member.role.trim().is_empty() {
        return Err(DomainError::MissingField { field: "role" });
    }
    Ok(())
}

/// Validates that an equipment item's field constraints are met.
///
/// # Errors
///
/// Returns an error if:
/// - The item name is empty
/// - The quantity is zero
/// - The per-unit cost is negative
pub fn validate_equipment_item(item: &EquipmentItem) -> Result<(), DomainError> {
    if item.name.trim().is_empty() {
        return Err(DomainError::EmptyName { entity: "equipment" });
    }
    if item.quantity == 0 {
        return Err(DomainError::InvalidQuantity {
            entity: "equipment",
            quantity: item.quantity,
        });
    }
    if item.cost < 0.0 {
        return Err(DomainError::NegativeAmount {
            entity: "equipment",
            field: "cost",
        });
    }
    Ok(())
}

/// Validates that a ticket type's field constraints are met.
///
/// # Errors
///
/// Returns an error if:
/// - The ticket name is empty
/// - The price is negative
/// - The quantity is zero
/// - The sale window ends before it starts
pub fn validate_ticket_type(ticket: &TicketType) -> Result<(), DomainError> {
    if ticket.name.trim().is_empty() {
        return Err(DomainError::EmptyName {
            entity: "ticket type",
        });
    }
    if ticket.price < 0.0 {
        return Err(DomainError::NegativeAmount {
            entity: "ticket type",
            field: "price",
        });
    }
    if ticket.quantity == 0 {
        return Err(DomainError::InvalidQuantity {
            entity: "ticket type",
            quantity: ticket.quantity,
        });
    }
    if let (Some(start), Some(end)) = (ticket.sale_start, ticket.sale_end) {
        validate_sale_window(start, end)?;
    }
    Ok(())
}

/// Validates that a date range does not end before it starts.
///
/// # Errors
///
/// Returns an error if `end` precedes `start`.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
    if end < start {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Validates that a ticket sale window does not end before it starts.
///
/// # Errors
///
/// Returns an error if `end` precedes `start`.
pub fn validate_sale_window(start: NaiveDate, end: NaiveDate) -> Result<(), DomainError> {
    if end < start {
        return Err(DomainError::InvalidSaleWindow { start, end });
    }
    Ok(())
}

/// Validates that an id is not already present among existing ids.
///
/// Every collection in the composite document is keyed by caller-generated
/// id; appending a duplicate would make update and delete ambiguous.
///
/// # Errors
///
/// Returns an error if `new_id` already appears in `existing`.
pub fn validate_unique_id<'a, I>(
    collection: &'static str,
    new_id: &EntityId,
    existing: I,
) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a EntityId>,
{
    if existing.into_iter().any(|id| id == new_id) {
        return Err(DomainError::DuplicateEntityId {
            collection,
            id: new_id.as_str().to_string(),
        });
    }
    Ok(())
}
