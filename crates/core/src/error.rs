// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use backline_domain::DomainError;

/// Errors that can occur while applying a patch to the tour document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for PlannerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for PlannerError {}

impl From<DomainError> for PlannerError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
