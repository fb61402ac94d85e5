// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PlannerError;
use crate::patch::TourPatch;
use backline_domain::{
    DomainError, EntityId, PersonnelGroup, PersonnelMember, Tour, TourEvent, validate_date_range,
    validate_equipment_item, validate_event_fields, validate_personnel_fields,
    validate_route_stop, validate_ticket_type, validate_unique_id,
};

fn not_found(collection: &'static str, id: &EntityId) -> PlannerError {
    PlannerError::DomainViolation(DomainError::EntityNotFound {
        collection,
        id: id.as_str().to_string(),
    })
}

fn personnel_mut(tour: &mut Tour, group: PersonnelGroup) -> &mut Vec<PersonnelMember> {
    match group {
        PersonnelGroup::Artists => &mut tour.artists,
        PersonnelGroup::Crew => &mut tour.crew,
    }
}

/// Applies a patch to the tour document, producing a new document.
///
/// The transition is pure and atomic: the input document is never
/// mutated, and an error leaves no partial change behind. Collection
/// mutations are keyed by entity id; an unknown id is an explicit error,
/// never a silent no-op.
///
/// # Arguments
///
/// * `tour` - The current document (immutable)
/// * `patch` - The patch to apply
///
/// # Returns
///
/// * `Ok(Tour)` containing the new document
/// * `Err(PlannerError)` if the patch violates a domain rule
///
/// # Errors
///
/// Returns an error if:
/// - The patch violates an entity's field constraints
/// - An id-keyed update or removal names an unknown id
/// - An appended entity duplicates an existing id
/// - A date range or sale window is inverted
#[allow(clippy::too_many_lines)]
pub fn apply(tour: &Tour, patch: TourPatch) -> Result<Tour, PlannerError> {
    let mut next: Tour = tour.clone();

    match patch {
        TourPatch::SetBasics(basics) => {
            if let Some(name) = basics.name {
                next.name = name;
            }
            if let Some(description) = basics.description {
                next.description = description;
            }
            if let Some(main_artist) = basics.main_artist {
                next.main_artist = main_artist;
            }
            if let Some(genre) = basics.genre {
                next.genre = genre;
            }
            if let Some(cover_image) = basics.cover_image {
                next.cover_image = cover_image;
            }
        }
        TourPatch::SetSchedule {
            start_date,
            end_date,
        } => {
            if let (Some(start), Some(end)) = (start_date, end_date) {
                validate_date_range(start, end)?;
            }
            next.start_date = start_date;
            next.end_date = end_date;
        }
        TourPatch::AddRouteStop(stop) => {
            validate_route_stop(&stop)?;
            validate_unique_id("route", &stop.id, next.route.iter().map(|s| &s.id))?;
            next.route.push(stop);
        }
        TourPatch::RemoveRouteStop { id } => {
            let pos: usize = next
                .route
                .iter()
                .position(|s| s.id == id)
                .ok_or_else(|| not_found("route", &id))?;
            next.route.remove(pos);
        }
        TourPatch::AddEvent(event) => {
            validate_event_fields(&event)?;
            validate_unique_id("events", &event.id, next.events.iter().map(|e| &e.id))?;
            next.events.push(event);
        }
        TourPatch::UpdateEvent { id, patch } => {
            let event: &mut TourEvent = next
                .events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| not_found("events", &id))?;
            if let Some(name) = patch.name {
                event.name = name;
            }
            if let Some(venue) = patch.venue {
                event.venue = venue;
            }
            if let Some(date) = patch.date {
                event.date = Some(date);
            }
            if let Some(time) = patch.time {
                event.time = Some(time);
            }
            if let Some(description) = patch.description {
                event.description = description;
            }
            if let Some(capacity) = patch.capacity {
                event.capacity = capacity;
            }
            validate_event_fields(event)?;
        }
        TourPatch::RemoveEvent { id } => {
            let pos: usize = next
                .events
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| not_found("events", &id))?;
            next.events.remove(pos);
        }
        TourPatch::DeriveEventsFromRoute => {
            // One scaffold event per route stop; capacity is filled in
            // later by the user.
            for stop in &tour.route {
                next.events.push(TourEvent {
                    id: EntityId::generate(),
                    name: format!("{} Show", stop.city),
                    venue: stop.venue.clone(),
                    date: stop.date,
                    time: None,
                    description: String::new(),
                    capacity: 0,
                });
            }
        }
        TourPatch::AddPersonnel { group, member } => {
            validate_personnel_fields(&member)?;
            let collection: &mut Vec<PersonnelMember> = personnel_mut(&mut next, group);
            validate_unique_id(group.as_str(), &member.id, collection.iter().map(|m| &m.id))?;
            collection.push(member);
        }
        TourPatch::RemovePersonnel { group, id } => {
            let collection: &mut Vec<PersonnelMember> = personnel_mut(&mut next, group);
            let pos: usize = collection
                .iter()
                .position(|m| m.id == id)
                .ok_or_else(|| not_found(group.as_str(), &id))?;
            collection.remove(pos);
        }
        TourPatch::ToggleAssignment {
            group,
            member_id,
            event_id,
        } => {
            if next.event(&event_id).is_none() {
                return Err(not_found("events", &event_id));
            }
            let collection: &mut Vec<PersonnelMember> = personnel_mut(&mut next, group);
            let member: &mut PersonnelMember = collection
                .iter_mut()
                .find(|m| m.id == member_id)
                .ok_or_else(|| not_found(group.as_str(), &member_id))?;
            member.toggle_assignment(&event_id);
        }
        TourPatch::SetTransportation(arrangement) => {
            next.transportation = arrangement;
        }
        TourPatch::SetAccommodation(arrangement) => {
            next.accommodation = arrangement;
        }
        TourPatch::AddEquipment(item) => {
            validate_equipment_item(&item)?;
            validate_unique_id("equipment", &item.id, next.equipment.iter().map(|e| &e.id))?;
            next.equipment.push(item);
        }
        TourPatch::UpdateEquipment { id, patch } => {
            let item = next
                .equipment
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| not_found("equipment", &id))?;
            if let Some(name) = patch.name {
                item.name = name;
            }
            if let Some(quantity) = patch.quantity {
                item.quantity = quantity;
            }
            if let Some(cost) = patch.cost {
                item.cost = cost;
            }
            validate_equipment_item(item)?;
        }
        TourPatch::RemoveEquipment { id } => {
            let pos: usize = next
                .equipment
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| not_found("equipment", &id))?;
            next.equipment.remove(pos);
        }
        TourPatch::AddTicketType(ticket) => {
            validate_ticket_type(&ticket)?;
            if let Some(event_id) = &ticket.event_id
                && next.event(event_id).is_none()
            {
                return Err(not_found("events", event_id));
            }
            validate_unique_id(
                "ticket_types",
                &ticket.id,
                next.ticket_types.iter().map(|t| &t.id),
            )?;
            next.ticket_types.push(ticket);
        }
        TourPatch::UpdateTicketType { id, patch } => {
            if let Some(event_id) = &patch.event_id
                && next.event(event_id).is_none()
            {
                return Err(not_found("events", event_id));
            }
            let ticket = next
                .ticket_types
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| not_found("ticket_types", &id))?;
            if let Some(name) = patch.name {
                ticket.name = name;
            }
            if let Some(price) = patch.price {
                ticket.price = price;
            }
            if let Some(quantity) = patch.quantity {
                ticket.quantity = quantity;
            }
            if let Some(description) = patch.description {
                ticket.description = description;
            }
            if let Some(event_id) = patch.event_id {
                ticket.event_id = Some(event_id);
            }
            if let Some(delegation) = patch.delegation {
                ticket.delegation = Some(delegation);
            }
            if let Some(sale_start) = patch.sale_start {
                ticket.sale_start = Some(sale_start);
            }
            if let Some(sale_end) = patch.sale_end {
                ticket.sale_end = Some(sale_end);
            }
            if let Some(cap) = patch.per_customer_cap {
                ticket.per_customer_cap = Some(cap);
            }
            if let Some(benefits) = patch.benefits {
                ticket.benefits = benefits;
            }
            validate_ticket_type(ticket)?;
        }
        TourPatch::RemoveTicketType { id } => {
            let pos: usize = next
                .ticket_types
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| not_found("ticket_types", &id))?;
            next.ticket_types.remove(pos);
        }
        TourPatch::SetBudgetTotal(total) => {
            if total < 0.0 {
                return Err(PlannerError::DomainViolation(DomainError::NegativeAmount {
                    entity: "budget",
                    field: "total",
                }));
            }
            next.budget.total = total;
        }
        TourPatch::AddExpense(expense) => {
            if expense.amount < 0.0 {
                return Err(PlannerError::DomainViolation(DomainError::NegativeAmount {
                    entity: "expense",
                    field: "amount",
                }));
            }
            validate_unique_id(
                "expenses",
                &expense.id,
                next.budget.expenses.iter().map(|e| &e.id),
            )?;
            next.budget.expenses.push(expense);
        }
        TourPatch::RemoveExpense { id } => {
            let pos: usize = next
                .budget
                .expenses
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| not_found("expenses", &id))?;
            next.budget.expenses.remove(pos);
        }
        TourPatch::AddSponsor(sponsor) => {
            if sponsor.name.trim().is_empty() {
                return Err(PlannerError::DomainViolation(DomainError::EmptyName {
                    entity: "sponsor",
                }));
            }
            next.sponsors.push(sponsor);
        }
        TourPatch::RemoveSponsor { name } => {
            let pos: usize = next
                .sponsors
                .iter()
                .position(|s| s.name == name)
                .ok_or_else(|| {
                    PlannerError::DomainViolation(DomainError::SponsorNotFound { name })
                })?;
            next.sponsors.remove(pos);
        }
    }

    Ok(next)
}
