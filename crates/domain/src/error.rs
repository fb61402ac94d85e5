// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required name field is empty.
    EmptyName {
        /// The entity whose name is empty (e.g., "event", "ticket type").
        entity: &'static str,
    },
    /// A required field is missing or unset.
    MissingField {
        /// The field that is missing.
        field: &'static str,
    },
    /// A quantity must be greater than zero.
    InvalidQuantity {
        /// The entity with the invalid quantity.
        entity: &'static str,
        /// The invalid quantity value.
        quantity: u32,
    },
    /// A price or cost must not be negative.
    NegativeAmount {
        /// The entity with the negative amount.
        entity: &'static str,
        /// The field carrying the amount.
        field: &'static str,
    },
    /// An entity with this id already exists in the collection.
    DuplicateEntityId {
        /// The collection containing the duplicate.
        collection: &'static str,
        /// The duplicate id.
        id: String,
    },
    /// No entity with this id exists in the collection.
    EntityNotFound {
        /// The collection that was searched.
        collection: &'static str,
        /// The id that was not found.
        id: String,
    },
    /// No sponsor with this name exists.
    SponsorNotFound {
        /// The sponsor name that was not found.
        name: String,
    },
    /// The end date precedes the start date.
    InvalidDateRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
    /// The ticket sale window ends before it starts.
    InvalidSaleWindow {
        /// The sale window start.
        start: NaiveDate,
        /// The sale window end.
        end: NaiveDate,
    },
    /// A candidate status string did not match any known stage.
    InvalidStatus(String),
    /// An account type string did not match any profile variant.
    InvalidAccountType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { entity } => {
                write!(f, "{entity} name cannot be empty")
            }
            Self::MissingField { field } => {
                write!(f, "required field '{field}' is missing")
            }
            Self::InvalidQuantity { entity, quantity } => {
                write!(f, "{entity} quantity must be positive, got {quantity}")
            }
            Self::NegativeAmount { entity, field } => {
                write!(f, "{entity} {field} cannot be negative")
            }
            Self::DuplicateEntityId { collection, id } => {
                write!(f, "id '{id}' already exists in {collection}")
            }
            Self::EntityNotFound { collection, id } => {
                write!(f, "no entity with id '{id}' in {collection}")
            }
            Self::SponsorNotFound { name } => {
                write!(f, "no sponsor named '{name}'")
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "end date {end} precedes start date {start}")
            }
            Self::InvalidSaleWindow { start, end } => {
                write!(f, "sale window end {end} precedes start {start}")
            }
            Self::InvalidStatus(s) => {
                write!(f, "unknown candidate status '{s}'")
            }
            Self::InvalidAccountType(s) => {
                write!(f, "unknown account type '{s}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
