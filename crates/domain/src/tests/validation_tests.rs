// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{date, sample_equipment, sample_event, sample_stop, sample_ticket};
use crate::error::DomainError;
use crate::tour::EntityId;
use crate::validation::{
    validate_date_range, validate_equipment_item, validate_event_fields, validate_ticket_type,
    validate_unique_id,
};

#[test]
fn test_event_requires_a_name() {
    let mut event = sample_event("e1", "Opening");
    assert!(validate_event_fields(&event).is_ok());

    event.name = String::new();
    assert_eq!(
        validate_event_fields(&event),
        Err(DomainError::EmptyName { entity: "event" })
    );

    // Capacity is deliberately unchecked: derived events start at zero
    event.name = String::from("Opening");
    event.capacity = 0;
    assert!(validate_event_fields(&event).is_ok());
}

#[test]
fn test_ticket_type_field_rules() {
    let mut ticket = sample_ticket("VIP", 150.0, 10);
    assert!(validate_ticket_type(&ticket).is_ok());

    ticket.price = -1.0;
    assert!(matches!(
        validate_ticket_type(&ticket),
        Err(DomainError::NegativeAmount { .. })
    ));

    ticket.price = 150.0;
    ticket.quantity = 0;
    assert!(matches!(
        validate_ticket_type(&ticket),
        Err(DomainError::InvalidQuantity { .. })
    ));
}

#[test]
fn test_ticket_sale_window_must_be_ordered() {
    let mut ticket = sample_ticket("VIP", 150.0, 10);
    ticket.sale_start = Some(date(2026, 5, 1));
    ticket.sale_end = Some(date(2026, 4, 1));

    assert!(matches!(
        validate_ticket_type(&ticket),
        Err(DomainError::InvalidSaleWindow { .. })
    ));

    ticket.sale_end = Some(date(2026, 5, 1));
    assert!(validate_ticket_type(&ticket).is_ok());
}

#[test]
fn test_equipment_rules() {
    assert!(validate_equipment_item(&sample_equipment("PA", 2, 750.0)).is_ok());
    assert!(validate_equipment_item(&sample_equipment("PA", 0, 750.0)).is_err());
    assert!(validate_equipment_item(&sample_equipment("PA", 2, -1.0)).is_err());
}

#[test]
fn test_date_range_ordering() {
    assert!(validate_date_range(date(2026, 6, 1), date(2026, 8, 31)).is_ok());
    assert!(validate_date_range(date(2026, 6, 1), date(2026, 6, 1)).is_ok());
    assert_eq!(
        validate_date_range(date(2026, 8, 31), date(2026, 6, 1)),
        Err(DomainError::InvalidDateRange {
            start: date(2026, 8, 31),
            end: date(2026, 6, 1),
        })
    );
}

#[test]
fn test_unique_id_rejects_duplicates() {
    let stops = [sample_stop("Seattle", "The Paramount")];
    let existing = stops.iter().map(|s| &s.id);

    let fresh = EntityId::generate();
    assert!(validate_unique_id("route", &fresh, stops.iter().map(|s| &s.id)).is_ok());

    assert_eq!(
        validate_unique_id("route", &stops[0].id.clone(), existing),
        Err(DomainError::DuplicateEntityId {
            collection: "route",
            id: stops[0].id.as_str().to_string(),
        })
    );
}
