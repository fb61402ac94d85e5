// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::event;
use crate::patch::{BasicsPatch, TourPatch};
use crate::step::StepId;
use crate::wizard::PlannerState;

#[test]
fn test_wizard_starts_empty_on_the_first_step() {
    let wizard = PlannerState::new();
    assert_eq!(wizard.current_step, StepId::Basics);
    assert!(wizard.tour.name.is_empty());
}

#[test]
fn test_next_step_at_the_last_step_is_a_noop() {
    let mut wizard = PlannerState::new();
    wizard.go_to_step(StepId::Review);
    wizard.next_step();
    assert_eq!(wizard.current_step, StepId::Review);
}

#[test]
fn test_prev_step_at_the_first_step_is_a_noop() {
    let mut wizard = PlannerState::new();
    wizard.prev_step();
    assert_eq!(wizard.current_step, StepId::Basics);
}

#[test]
fn test_navigation_walks_the_full_sequence() {
    let mut wizard = PlannerState::new();
    for expected in StepId::ALL {
        assert_eq!(wizard.current_step, expected);
        wizard.next_step();
    }
    assert_eq!(wizard.current_step, StepId::Review);
}

#[test]
fn test_go_to_step_is_not_gated_by_completion() {
    let mut wizard = PlannerState::new();
    // Nothing is filled in, yet the review step is reachable
    wizard.go_to_step(StepId::Review);
    assert_eq!(wizard.current_step, StepId::Review);
    assert!(!wizard.is_step_complete(StepId::Basics));
}

#[test]
fn test_completed_steps_track_the_document() {
    let mut wizard = PlannerState::new();
    assert_eq!(
        wizard.completed_steps(),
        vec![StepId::Commercial, StepId::Review]
    );

    wizard
        .apply(TourPatch::SetBasics(BasicsPatch {
            name: Some(String::from("Summer Tour")),
            main_artist: Some(String::from("Jane Doe")),
            genre: Some(String::from("Rock")),
            ..BasicsPatch::default()
        }))
        .unwrap();

    assert!(wizard.completed_steps().contains(&StepId::Basics));
}

#[test]
fn test_failed_apply_leaves_the_wizard_untouched() {
    let mut wizard = PlannerState::new();
    wizard.apply(TourPatch::AddEvent(event("e1", "Opening"))).unwrap();
    let before = wizard.clone();

    let result = wizard.apply(TourPatch::AddEvent(event("e1", "Duplicate")));
    assert!(result.is_err());
    assert_eq!(wizard, before);
}
