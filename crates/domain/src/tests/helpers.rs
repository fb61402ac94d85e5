// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tour::{
    BudgetExpense, EquipmentItem, PersonnelMember, RouteStop, Sponsor, TicketType, Tour, TourEvent,
};
use crate::EntityId;
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn sample_event(id: &str, name: &str) -> TourEvent {
    TourEvent {
        id: EntityId::new(id),
        name: String::from(name),
        venue: String::from("The Paramount"),
        date: Some(date(2026, 6, 12)),
        time: None,
        description: String::new(),
        capacity: 500,
    }
}

pub fn sample_stop(city: &str, venue: &str) -> RouteStop {
    RouteStop::new(String::from(city), String::from(venue), Some(date(2026, 6, 12)))
}

pub fn sample_artist(name: &str) -> PersonnelMember {
    PersonnelMember::new(String::from(name), String::from("Vocalist"))
}

pub fn sample_ticket(name: &str, price: f64, quantity: u32) -> TicketType {
    TicketType::new(String::from(name), price, quantity)
}

pub fn sample_equipment(name: &str, quantity: u32, cost: f64) -> EquipmentItem {
    EquipmentItem {
        id: EntityId::generate(),
        name: String::from(name),
        quantity,
        cost,
    }
}

pub fn sample_sponsor(name: &str, contribution: f64) -> Sponsor {
    Sponsor {
        name: String::from(name),
        contribution,
        kind: String::from("Media"),
    }
}

pub fn sample_expense(category: &str, amount: f64) -> BudgetExpense {
    BudgetExpense::new(String::from(category), amount, String::new())
}

/// A tour populated far enough to pass every per-step predicate and the
/// publish gate.
pub fn publishable_tour() -> Tour {
    let mut tour = Tour::new();
    tour.name = String::from("Summer Tour");
    tour.main_artist = String::from("Jane Doe");
    tour.genre = String::from("Rock");
    tour.start_date = Some(date(2026, 6, 1));
    tour.end_date = Some(date(2026, 8, 31));
    tour.route.push(sample_stop("Seattle", "The Paramount"));
    tour.events.push(sample_event("e1", "Opening Night"));
    tour.artists.push(sample_artist("Jane Doe"));
    tour.transportation.kind = Some(String::from("Tour Bus"));
    tour.accommodation.kind = Some(String::from("Hotel"));
    tour
}
