// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{sample_artist, sample_event};
use crate::candidate::CandidateStatus;
use crate::post::Post;
use crate::profile::{ArtistProfile, GeneralProfile, Profile, VenueProfile};
use crate::tour::{EntityId, Tour};
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_toggle_assignment_twice_restores_membership() {
    let mut member = sample_artist("Jane Doe");
    let e1 = EntityId::new("e1");
    let e2 = EntityId::new("e2");
    member.events = vec![e1.clone(), e2.clone()];

    let original: HashSet<EntityId> = member.events.iter().cloned().collect();

    member.toggle_assignment(&e1);
    assert!(!member.is_assigned_to(&e1));
    assert_eq!(member.events.len(), 1);

    member.toggle_assignment(&e1);
    let restored: HashSet<EntityId> = member.events.iter().cloned().collect();

    // Length and set equality; order is not guaranteed
    assert_eq!(member.events.len(), 2);
    assert_eq!(original, restored);
}

#[test]
fn test_assigned_personnel_scans_both_collections() {
    let mut tour = Tour::new();
    let event = sample_event("e1", "Opening");
    let event_id = event.id.clone();
    tour.events.push(event);

    let mut artist = sample_artist("Jane Doe");
    artist.toggle_assignment(&event_id);
    tour.artists.push(artist);

    let mut tech = sample_artist("Sam Smith");
    tech.toggle_assignment(&event_id);
    tour.crew.push(tech);

    tour.crew.push(sample_artist("Unassigned"));

    let assigned = tour.assigned_personnel(&event_id);
    assert_eq!(assigned.len(), 2);
}

#[test]
fn test_generated_entity_ids_are_unique() {
    let a = EntityId::generate();
    let b = EntityId::generate();
    assert_ne!(a, b);
}

#[test]
fn test_candidate_status_round_trips_through_strings() {
    for status in CandidateStatus::ALL {
        let parsed = CandidateStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
    assert!(CandidateStatus::from_str("fired").is_err());
}

#[test]
fn test_candidate_status_order_and_terminal() {
    assert_eq!(CandidateStatus::Applied.index(), 0);
    assert_eq!(
        CandidateStatus::Applied.next(),
        Some(CandidateStatus::Screening)
    );
    assert!(CandidateStatus::Hired.is_terminal());
    assert_eq!(CandidateStatus::Hired.next(), None);
}

#[test]
fn test_profile_dispatch_by_variant() {
    let artist = Profile::Artist(ArtistProfile {
        name: String::from("Jane Doe"),
        stage_name: Some(String::from("JD")),
        genres: vec![String::from("Rock"), String::from("Blues")],
        bio: String::new(),
        tracks: Vec::new(),
    });
    assert_eq!(artist.display_name(), "JD");
    assert_eq!(artist.headline(), "Rock / Blues");
    assert_eq!(artist.account_type(), "artist");

    let venue = Profile::Venue(VenueProfile {
        name: String::from("The Paramount"),
        address: String::from("911 Pine St"),
        city: String::from("Seattle"),
        capacity: 2807,
        bio: String::new(),
    });
    assert_eq!(venue.display_name(), "The Paramount");
    assert_eq!(venue.headline(), "Seattle · capacity 2807");

    let general = Profile::General(GeneralProfile {
        name: String::from("Alex"),
        email: String::from("alex@example.com"),
        bio: String::new(),
    });
    assert_eq!(general.headline(), "alex@example.com");
}

#[test]
fn test_post_like_toggle_is_an_idempotent_pair() {
    let mut post = Post::new(String::from("jane"), String::from("Tour announced!"));

    post.toggle_like("fan-1");
    post.toggle_like("fan-2");
    assert_eq!(post.like_count(), 2);

    post.toggle_like("fan-1");
    assert_eq!(post.like_count(), 1);
    assert_eq!(post.likes, vec![String::from("fan-2")]);
}

#[test]
fn test_post_comments_append_in_order() {
    let mut post = Post::new(String::from("jane"), String::from("Tour announced!"));
    post.add_comment(String::from("fan-1"), String::from("Can't wait"));
    post.add_comment(String::from("fan-2"), String::from("See you there"));

    assert_eq!(post.comments.len(), 2);
    assert_eq!(post.comments[0].author, "fan-1");
}
