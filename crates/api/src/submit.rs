// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The tour submission payload.
//!
//! The publish endpoint expects the composite document partitioned into
//! per-step groups rather than the flat document shape. Every tour field
//! lands in exactly one group; the review step contributes nothing of its
//! own. [`partition_tour`] and [`reconstruct_tour`] are inverses.

use backline_domain::{
    Budget, EquipmentItem, LogisticsArrangement, PersonnelMember, RouteStop, Sponsor, TicketType,
    Tour, TourEvent,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Step 1: identity and presentation fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TourBasicsGroup {
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
}

/// Step 2: the date range and route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScheduleGroup {
    /// First day of the tour.
    pub start_date: Option<NaiveDate>,
    /// Last day of the tour.
    pub end_date: Option<NaiveDate>,
    /// Ordered route stops.
    pub route: Vec<RouteStop>,
}

/// Step 3: the event list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EventsGroup {
    /// Events (shows) on the tour.
    pub events: Vec<TourEvent>,
}

/// Step 4: the two personnel collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonnelStepGroup {
    /// Performing artists.
    pub artists: Vec<PersonnelMember>,
    /// Tour crew.
    pub crew: Vec<PersonnelMember>,
}

/// Step 5: logistics arrangements and equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LogisticsGroup {
    /// The transportation arrangement.
    pub transportation: LogisticsArrangement,
    /// The accommodation arrangement.
    pub accommodation: LogisticsArrangement,
    /// Equipment carried on the tour.
    pub equipment: Vec<EquipmentItem>,
}

/// Step 6: tickets, budget, and sponsors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CommercialGroup {
    /// Ticket types offered for sale.
    pub ticket_types: Vec<TicketType>,
    /// The tour budget.
    pub budget: Budget,
    /// Tour sponsors.
    pub sponsors: Vec<Sponsor>,
}

/// Request body of `POST /api/tours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SubmitTourRequest {
    /// Identity and presentation fields.
    pub step1: TourBasicsGroup,
    /// Date range and route.
    pub step2: ScheduleGroup,
    /// Event list.
    pub step3: EventsGroup,
    /// Personnel collections.
    pub step4: PersonnelStepGroup,
    /// Logistics and equipment.
    pub step5: LogisticsGroup,
    /// Tickets, budget, and sponsors.
    pub step6: CommercialGroup,
}

/// Response of `POST /api/tours`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitTourResponse {
    /// The identifier assigned to the published tour.
    pub tour_id: String,
}

/// Partitions a composite tour document into the per-step payload.
#[must_use]
pub fn partition_tour(tour: &Tour) -> SubmitTourRequest {
    SubmitTourRequest {
        step1: TourBasicsGroup {
            name: tour.name.clone(),
            description: tour.description.clone(),
            main_artist: tour.main_artist.clone(),
            genre: tour.genre.clone(),
            cover_image: tour.cover_image.clone(),
        },
        step2: ScheduleGroup {
            start_date: tour.start_date,
            end_date: tour.end_date,
            route: tour.route.clone(),
        },
        step3: EventsGroup {
            events: tour.events.clone(),
        },
        step4: PersonnelStepGroup {
            artists: tour.artists.clone(),
            crew: tour.crew.clone(),
        },
        step5: LogisticsGroup {
            transportation: tour.transportation.clone(),
            accommodation: tour.accommodation.clone(),
            equipment: tour.equipment.clone(),
        },
        step6: CommercialGroup {
            ticket_types: tour.ticket_types.clone(),
            budget: tour.budget.clone(),
            sponsors: tour.sponsors.clone(),
        },
    }
}

/// Reassembles a composite tour document from the per-step payload.
///
/// Inverse of [`partition_tour`].
#[must_use]
pub fn reconstruct_tour(request: SubmitTourRequest) -> Tour {
    Tour {
        name: request.step1.name,
        description: request.step1.description,
        main_artist: request.step1.main_artist,
        genre: request.step1.genre,
        cover_image: request.step1.cover_image,
        start_date: request.step2.start_date,
        end_date: request.step2.end_date,
        route: request.step2.route,
        events: request.step3.events,
        artists: request.step4.artists,
        crew: request.step4.crew,
        transportation: request.step5.transportation,
        accommodation: request.step5.accommodation,
        equipment: request.step5.equipment,
        ticket_types: request.step6.ticket_types,
        budget: request.step6.budget,
        sponsors: request.step6.sponsors,
    }
}
