// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod draft;
mod error;
mod patch;
mod step;
mod wizard;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use draft::DraftState;
pub use error::PlannerError;
pub use patch::{BasicsPatch, EventPatch, EquipmentPatch, TicketTypePatch, TourPatch};
pub use step::{StepId, StepInfo, is_step_complete, step_registry};
pub use wizard::PlannerState;
