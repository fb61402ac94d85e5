// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{EntityId, PersonnelMember, RouteStop, TicketType, Tour, TourEvent};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn stop(city: &str, venue: &str) -> RouteStop {
    RouteStop::new(String::from(city), String::from(venue), Some(date(2026, 6, 12)))
}

pub fn event(id: &str, name: &str) -> TourEvent {
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

pub fn member(id: &str, name: &str) -> PersonnelMember {
    PersonnelMember {
        id: EntityId::new(id),
        name: String::from(name),
        role: String::from("Vocalist"),
        events: Vec::new(),
    }
}

pub fn ticket(name: &str, price: f64, quantity: u32) -> TicketType {
    TicketType::new(String::from(name), price, quantity)
}

pub fn tour_with_event(event_id: &str) -> Tour {
    let mut tour = Tour::new();
    tour.events.push(event(event_id, "Opening Night"));
    tour
}
