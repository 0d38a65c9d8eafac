// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fleet-wide overview counts and utilization.

use crate::support::percentage;
use haul_hub_domain::{DriverId, LorryId, Trip, TripStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fleet overview for a trip collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetOverview {
    /// Total trips in the collection.
    pub total_trips: usize,
    /// Trips delivered or paid.
    pub completed_trips: usize,
    /// Trips picked up or in transit.
    pub in_progress_trips: usize,
    /// Trips still scheduled.
    pub planned_trips: usize,
    /// Distinct drivers across the collection.
    pub total_drivers: usize,
    /// Distinct vehicles across the collection.
    pub total_vehicles: usize,
    /// Distinct drivers with at least one in-progress trip.
    pub active_drivers: usize,
    /// Distinct vehicles with at least one in-progress trip.
    pub active_vehicles: usize,
    /// Active drivers over distinct drivers, as a percentage. 0 when the
    /// collection has no drivers.
    pub driver_utilization_rate: f64,
    /// Active vehicles over distinct vehicles, as a percentage. 0 when the
    /// collection has no vehicles.
    pub vehicle_utilization_rate: f64,
}

/// Computes the fleet overview for a trip collection.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
#[must_use]
pub fn fleet_overview(trips: &[Trip]) -> FleetOverview {
    let mut drivers: BTreeSet<&DriverId> = BTreeSet::new();
    let mut vehicles: BTreeSet<&LorryId> = BTreeSet::new();
    let mut active_driver_set: BTreeSet<&DriverId> = BTreeSet::new();
    let mut active_vehicle_set: BTreeSet<&LorryId> = BTreeSet::new();

    let mut completed_trips: usize = 0;
    let mut in_progress_trips: usize = 0;
    let mut planned_trips: usize = 0;

    for trip in trips {
        drivers.insert(&trip.driver_id);
        vehicles.insert(&trip.lorry_id);

        match trip.status {
            TripStatus::Delivered | TripStatus::Paid => completed_trips += 1,
            TripStatus::PickedUp | TripStatus::InTransit => {
                in_progress_trips += 1;
                active_driver_set.insert(&trip.driver_id);
                active_vehicle_set.insert(&trip.lorry_id);
            }
            TripStatus::Scheduled => planned_trips += 1,
            TripStatus::Canceled => {}
        }
    }

    FleetOverview {
        total_trips: trips.len(),
        completed_trips,
        in_progress_trips,
        planned_trips,
        total_drivers: drivers.len(),
        total_vehicles: vehicles.len(),
        active_drivers: active_driver_set.len(),
        active_vehicles: active_vehicle_set.len(),
        driver_utilization_rate: percentage(active_driver_set.len(), drivers.len()),
        vehicle_utilization_rate: percentage(active_vehicle_set.len(), vehicles.len()),
    }
}
