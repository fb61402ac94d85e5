// Copyright (C) 2026 Backline Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Financial summary folds for the review step.
//!
//! Every total is a pure fold over the relevant collection, recomputed on
//! demand. Nothing here is cached.

use crate::tour::Tour;
use serde::{Deserialize, Serialize};

/// Derived financial totals for a tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourFinancialSummary {
    /// Projected ticket revenue: Σ price × quantity over ticket types.
    pub ticket_revenue: f64,
    /// Total sponsor contributions.
    pub sponsor_total: f64,
    /// Total planned budget expenses.
    pub expense_total: f64,
    /// Total logistics cost: transportation, accommodation, and equipment.
    pub logistics_cost: f64,
    /// Net projection: revenue plus sponsorship, minus expenses and
    /// logistics.
    pub net: f64,
}

impl TourFinancialSummary {
    /// Computes the financial summary for a tour.
    #[must_use]
    pub fn compute(tour: &Tour) -> Self {
        let ticket_revenue: f64 = tour
            .ticket_types
            .iter()
            .map(|t| t.price * f64::from(t.quantity))
            .sum();

        let sponsor_total: f64 = tour.sponsors.iter().map(|s| s.contribution).sum();

        let expense_total: f64 = tour.budget.expenses.iter().map(|e| e.amount).sum();

        let equipment_cost: f64 = tour
            .equipment
            .iter()
            .map(|e| e.cost * f64::from(e.quantity))
            .sum();
        let logistics_cost: f64 =
            tour.transportation.cost + tour.accommodation.cost + equipment_cost;

        let net: f64 = ticket_revenue + sponsor_total - expense_total - logistics_cost;

        Self {
            ticket_revenue,
            sponsor_total,
            expense_total,
            logistics_cost,
            net,
        }
    }
}
