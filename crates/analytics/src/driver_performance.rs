// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-driver performance metrics.

use crate::support::{mean, percentage};
use haul_hub_domain::{DriverId, Trip, TripStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Performance metrics for a single driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPerformance {
    /// The driver.
    pub driver_id: DriverId,
    /// Trips assigned to the driver.
    pub total_trips: usize,
    /// Trips delivered or paid.
    pub completed_trips: usize,
    /// Total distance across the driver's trips.
    pub total_distance: f64,
    /// Total driver payments, used as the driver's revenue.
    pub total_revenue: f64,
    /// Mean driver payment per trip.
    pub average_revenue: f64,
    /// Completed trips over total trips, as a percentage.
    pub completion_rate: f64,
}

/// Computes per-driver performance, sorted descending by revenue.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
#[must_use]
pub fn driver_performance(trips: &[Trip]) -> Vec<DriverPerformance> {
    let mut by_driver: BTreeMap<&DriverId, Vec<&Trip>> = BTreeMap::new();
    for trip in trips {
        by_driver.entry(&trip.driver_id).or_default().push(trip);
    }

    let mut performance: Vec<DriverPerformance> = by_driver
        .into_iter()
        .map(|(driver_id, driver_trips)| {
            let total_trips: usize = driver_trips.len();
            let completed_trips: usize = driver_trips
                .iter()
                .filter(|t| matches!(t.status, TripStatus::Delivered | TripStatus::Paid))
                .count();
            let total_revenue: f64 = driver_trips.iter().map(|t| t.driver_payment).sum();
            let total_distance: f64 = driver_trips.iter().map(|t| t.distance).sum();

            DriverPerformance {
                driver_id: driver_id.clone(),
                total_trips,
                completed_trips,
                total_distance,
                total_revenue,
                average_revenue: mean(total_revenue, total_trips),
                completion_rate: percentage(completed_trips, total_trips),
            }
        })
        .collect();

    performance.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    performance
}
