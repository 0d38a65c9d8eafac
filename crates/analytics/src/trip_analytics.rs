// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Revenue, expense and delivery metrics across a trip collection.

use crate::support::{mean, percentage};
use haul_hub_domain::{Trip, TripStatus};
use serde::{Deserialize, Serialize};

/// Aggregate trip metrics for a trip collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripAnalytics {
    /// Total trips in the collection.
    pub total_trips: usize,
    /// Trips delivered or paid.
    pub completed_trips: usize,
    /// Sum of broker payments.
    pub total_revenue: f64,
    /// Sum of driver payments, lorry owner payments, lumper fees and
    /// detention fees.
    pub total_expenses: f64,
    /// Revenue minus expenses.
    pub total_profit: f64,
    /// Mean trip distance; 0 when the collection is empty.
    pub average_distance: f64,
    /// Mean broker payment; 0 when the collection is empty.
    pub average_revenue: f64,
    /// Completed trips over total trips, as a percentage.
    ///
    /// Completed trips are treated as on-time; there is no independent
    /// actual-versus-scheduled delivery check.
    pub on_time_delivery_rate: f64,
}

/// Computes aggregate trip metrics for a trip collection.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
#[must_use]
pub fn trip_analytics(trips: &[Trip]) -> TripAnalytics {
    let total_trips: usize = trips.len();
    let completed_trips: usize = trips
        .iter()
        .filter(|t| matches!(t.status, TripStatus::Delivered | TripStatus::Paid))
        .count();

    let total_revenue: f64 = trips.iter().map(|t| t.broker_payment).sum();
    let total_expenses: f64 = trips.iter().map(Trip::total_expenses).sum();
    let total_distance: f64 = trips.iter().map(|t| t.distance).sum();

    TripAnalytics {
        total_trips,
        completed_trips,
        total_revenue,
        total_expenses,
        total_profit: total_revenue - total_expenses,
        average_distance: mean(total_distance, total_trips),
        average_revenue: mean(total_revenue, total_trips),
        on_time_delivery_rate: percentage(completed_trips, total_trips),
    }
}
