// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::{
    EntityId, LogisticsArrangement, PersonnelMember, RouteStop, Tour, TourEvent,
};
use chrono::NaiveDate;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a tour that passes the publish gate.
pub fn publishable_tour() -> Tour {
    let mut tour = Tour::new();
    tour.name = String::from("Summer Tour");
    tour.main_artist = String::from("Jane Doe");
    tour.genre = String::from("Rock");
    tour.start_date = Some(date(2026, 6, 1));
    tour.end_date = Some(date(2026, 8, 31));
    tour.route
        .push(RouteStop::new(String::from("Austin"), String::from("The Armadillo"), None));
    tour.events.push(TourEvent {
        id: EntityId::generate(),
        name: String::from("Austin Show"),
        venue: String::from("The Armadillo"),
        date: Some(date(2026, 6, 3)),
        time: None,
        description: String::new(),
        capacity: 1200,
    });
    tour.artists
        .push(PersonnelMember::new(String::from("Jane Doe"), String::from("Vocalist")));
    tour.transportation = LogisticsArrangement {
        kind: Some(String::from("Tour Bus")),
        details: String::from("Two buses"),
        cost: 3000.0,
    };
    tour.accommodation = LogisticsArrangement {
        kind: Some(String::from("Hotel")),
        details: String::new(),
        cost: 1500.0,
    };
    tour
}
