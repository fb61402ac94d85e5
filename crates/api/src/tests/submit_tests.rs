// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use backline_domain::Tour;

use crate::error::ApiError;
use crate::submit::{SubmitTourRequest, partition_tour, reconstruct_tour};
use crate::tests::helpers::publishable_tour;
use crate::{BacklineClient, BacklineClientConfig};

#[test]
fn test_partition_then_reconstruct_is_identity() {
    let tour: Tour = publishable_tour();

    let request: SubmitTourRequest = partition_tour(&tour);
    let rebuilt: Tour = reconstruct_tour(request);

    assert_eq!(rebuilt, tour);
}

#[test]
fn test_every_tour_field_lands_in_exactly_one_group() {
    let tour: Tour = publishable_tour();
    let request: SubmitTourRequest = partition_tour(&tour);

    let tour_value = serde_json::to_value(&tour).unwrap();
    let tour_keys: BTreeSet<String> = tour_value
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();

    let request_value = serde_json::to_value(&request).unwrap();
    let mut grouped_keys: Vec<String> = Vec::new();
    for group in request_value.as_object().unwrap().values() {
        grouped_keys.extend(group.as_object().unwrap().keys().cloned());
    }

    // Exactly-once: no field dropped, none duplicated across groups.
    let unique: BTreeSet<String> = grouped_keys.iter().cloned().collect();
    assert_eq!(unique.len(), grouped_keys.len());
    assert_eq!(unique, tour_keys);
}

#[test]
fn test_budget_and_sponsors_travel_in_the_commercial_group() {
    let mut tour: Tour = publishable_tour();
    tour.budget.total = 50_000.0;
    tour.sponsors.push(backline_domain::Sponsor {
        name: String::from("SoundCo"),
        contribution: 5000.0,
        kind: String::from("Equipment"),
    });

    let request: SubmitTourRequest = partition_tour(&tour);

    assert!((request.step6.budget.total - 50_000.0).abs() < f64::EPSILON);
    assert_eq!(request.step6.sponsors.len(), 1);
}

#[tokio::test]
async fn test_submit_refuses_an_unready_tour_without_a_server() {
    // The base URL points nowhere; the gate must trip before any request.
    let client: BacklineClient =
        BacklineClient::new(BacklineClientConfig::new("http://127.0.0.1:1")).unwrap();

    let result = client.submit_tour(&Tour::new()).await;

    match result {
        Err(ApiError::PublishBlocked { reasons }) => {
            assert_eq!(reasons.len(), 9);
        }
        other => panic!("expected PublishBlocked, got {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_error_message_lists_every_blocking_reason() {
    let client: BacklineClient =
        BacklineClient::new(BacklineClientConfig::new("http://127.0.0.1:1")).unwrap();

    let error = client.submit_tour(&Tour::new()).await.unwrap_err();
    let message: String = error.to_string();

    assert!(message.contains("Tour name is required"));
    assert!(message.contains("At least one artist is required"));
    assert!(message.contains("; "));
}
