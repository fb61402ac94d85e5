// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::error::PlannerError;
use crate::patch::TourPatch;
use crate::step::{StepId, is_step_complete};
use backline_domain::Tour;

/// The planning wizard: the composite document plus the current step.
///
/// The wizard owns the only mutable copy of the document. Steps operate
/// on borrowed views and request changes through patches; there is no
/// shared mutation. Navigation is never gated by completion; the
/// predicates drive the sidebar indicator only.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    /// The step currently shown.
    pub current_step: StepId,
    /// The composite tour document.
    pub tour: Tour,
}

impl PlannerState {
    /// Creates a new wizard on the first step with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_step: StepId::Basics,
            tour: Tour::new(),
        }
    }

    /// Advances to the next step. A no-op at the last step.
    pub fn next_step(&mut self) {
        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }
    }

    /// Goes back to the previous step. A no-op at the first step.
    pub fn prev_step(&mut self) {
        if let Some(prev) = self.current_step.prev() {
            self.current_step = prev;
        }
    }

    /// Jumps to any step unconditionally.
    ///
    /// There is no validation gate: a user may visit any step regardless
    /// of prior steps' completion.
    pub const fn go_to_step(&mut self, step: StepId) {
        self.current_step = step;
    }

    /// Evaluates a step's completion predicate against the current
    /// document.
    #[must_use]
    pub fn is_step_complete(&self, step: StepId) -> bool {
        is_step_complete(step, &self.tour)
    }

    /// Returns every currently complete step, evaluated fresh.
    #[must_use]
    pub fn completed_steps(&self) -> Vec<StepId> {
        StepId::ALL
            .into_iter()
            .filter(|step| self.is_step_complete(*step))
            .collect()
    }

    /// Applies a patch to the document.
    ///
    /// On failure the document is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the patch violates a domain rule.
    pub fn apply(&mut self, patch: TourPatch) -> Result<(), PlannerError> {
        self.tour = apply(&self.tour, patch)?;
        Ok(())
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
