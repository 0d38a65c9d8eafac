// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-vehicle calendar-day utilization.

use haul_hub_domain::{DateRange, LorryId, Trip};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// Day span assumed when the caller supplies no date range.
pub const DEFAULT_UTILIZATION_WINDOW_DAYS: u32 = 30;

/// Utilization metrics for a single vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleUtilization {
    /// The vehicle.
    pub lorry_id: LorryId,
    /// Trips assigned to the vehicle.
    pub total_trips: usize,
    /// Total distance across the vehicle's trips.
    pub total_distance: f64,
    /// Distinct calendar days with at least one trip.
    pub active_days: usize,
    /// Day span of the window the rate is computed over.
    pub window_days: u32,
    /// Active days over window days, as a percentage.
    pub utilization_rate: f64,
}

/// Computes per-vehicle utilization, sorted descending by rate.
///
/// A vehicle is utilized on a calendar day when at least one of its trips
/// has its scheduled pickup on that day; multiple trips on one day count
/// once.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
/// * `range` - The window the collection was filtered to, if bounded
#[must_use]
pub fn vehicle_utilization(trips: &[Trip], range: Option<&DateRange>) -> Vec<VehicleUtilization> {
    let window_days: u32 = range.map_or(DEFAULT_UTILIZATION_WINDOW_DAYS, DateRange::span_days);

    let mut by_vehicle: BTreeMap<&LorryId, Vec<&Trip>> = BTreeMap::new();
    for trip in trips {
        by_vehicle.entry(&trip.lorry_id).or_default().push(trip);
    }

    let mut utilization: Vec<VehicleUtilization> = by_vehicle
        .into_iter()
        .map(|(lorry_id, vehicle_trips)| {
            let active_days: BTreeSet<Date> = vehicle_trips
                .iter()
                .map(|t| t.scheduled_pickup_datetime.date())
                .collect();
            let total_distance: f64 = vehicle_trips.iter().map(|t| t.distance).sum();

            // window_days is at least 1 by construction
            #[allow(clippy::cast_precision_loss)]
            let utilization_rate: f64 =
                (active_days.len() as f64 / f64::from(window_days)) * 100.0;

            VehicleUtilization {
                lorry_id: lorry_id.clone(),
                total_trips: vehicle_trips.len(),
                total_distance,
                active_days: active_days.len(),
                window_days,
                utilization_rate,
            }
        })
        .collect();

    utilization.sort_by(|a, b| b.utilization_rate.total_cmp(&a.utilization_rate));
    utilization
}
