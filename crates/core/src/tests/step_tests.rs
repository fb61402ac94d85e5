// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::step::{StepId, is_step_complete, step_registry};
use backline_domain::Tour;

#[test]
fn test_steps_are_one_indexed_and_ordered() {
    assert_eq!(StepId::Basics.index(), 1);
    assert_eq!(StepId::Review.index(), 7);

    for (i, step) in StepId::ALL.into_iter().enumerate() {
        assert_eq!(step.index(), i + 1);
        assert_eq!(StepId::from_index(i + 1), Some(step));
    }

    assert_eq!(StepId::from_index(0), None);
    assert_eq!(StepId::from_index(8), None);
}

#[test]
fn test_next_and_prev_stop_at_boundaries() {
    assert_eq!(StepId::Basics.prev(), None);
    assert_eq!(StepId::Review.next(), None);
    assert_eq!(StepId::Basics.next(), Some(StepId::Schedule));
    assert_eq!(StepId::Review.prev(), Some(StepId::Commercial));
}

#[test]
fn test_registry_covers_every_step_once() {
    let registry = step_registry();
    assert_eq!(registry.len(), StepId::ALL.len());

    for (info, step) in registry.iter().zip(StepId::ALL) {
        assert_eq!(info.id, step);
        assert_eq!(info.title, step.title());
        assert!(!info.summary.is_empty());
    }
}

#[test]
fn test_empty_tour_completes_only_unconditional_steps() {
    let tour = Tour::new();

    for step in StepId::ALL {
        let expected = matches!(step, StepId::Commercial | StepId::Review);
        assert_eq!(is_step_complete(step, &tour), expected, "step {step}");
    }
}
