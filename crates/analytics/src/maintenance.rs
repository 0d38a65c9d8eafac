// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Maintenance and inactivity alerting.
//!
//! Thresholds are compile-time constants, not configuration.

use haul_hub_domain::{DriverId, LorryId, Trip};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Cumulative distance above which a vehicle is flagged for service.
pub const HIGH_MILEAGE_THRESHOLD: f64 = 50_000.0;

/// Days without a trip after which an asset is flagged inactive.
pub const INACTIVITY_DAYS: i64 = 30;

/// Why a vehicle was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleAlertKind {
    /// Cumulative distance exceeds the service threshold.
    HighMileage,
    /// No trip within the inactivity window.
    Inactive,
}

/// An alert for a single vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAlert {
    /// The vehicle.
    pub lorry_id: LorryId,
    /// Why the vehicle was flagged.
    pub kind: VehicleAlertKind,
    /// Cumulative distance across the vehicle's trips.
    pub total_distance: f64,
    /// Days since the vehicle's most recent trip.
    pub days_since_last_trip: i64,
}

/// An inactivity alert for a single driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverAlert {
    /// The driver.
    pub driver_id: DriverId,
    /// Days since the driver's most recent trip.
    pub days_since_last_trip: i64,
}

/// Maintenance alerts across a trip collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceAlerts {
    /// High-mileage and inactivity alerts per vehicle.
    pub vehicle_alerts: Vec<VehicleAlert>,
    /// Inactivity alerts per driver.
    pub driver_alerts: Vec<DriverAlert>,
}

/// Computes maintenance alerts for a trip collection.
///
/// A vehicle is flagged `HighMileage` when its cumulative trip distance
/// exceeds [`HIGH_MILEAGE_THRESHOLD`] and `Inactive` when more than
/// [`INACTIVITY_DAYS`] days have passed since its most recent scheduled
/// pickup; the two flags are independent. The same inactivity rule applies
/// per driver.
///
/// # Arguments
///
/// * `trips` - The owner-scoped trip collection
/// * `as_of` - The instant to measure inactivity against
#[must_use]
pub fn maintenance_alerts(trips: &[Trip], as_of: OffsetDateTime) -> MaintenanceAlerts {
    let mut vehicle_stats: BTreeMap<&LorryId, (f64, OffsetDateTime)> = BTreeMap::new();
    let mut driver_last_trip: BTreeMap<&DriverId, OffsetDateTime> = BTreeMap::new();

    for trip in trips {
        let pickup: OffsetDateTime = trip.scheduled_pickup_datetime;

        vehicle_stats
            .entry(&trip.lorry_id)
            .and_modify(|(distance, last)| {
                *distance += trip.distance;
                if pickup > *last {
                    *last = pickup;
                }
            })
            .or_insert((trip.distance, pickup));

        driver_last_trip
            .entry(&trip.driver_id)
            .and_modify(|last| {
                if pickup > *last {
                    *last = pickup;
                }
            })
            .or_insert(pickup);
    }

    let mut vehicle_alerts: Vec<VehicleAlert> = Vec::new();
    for (lorry_id, (total_distance, last_trip)) in vehicle_stats {
        let days_since_last_trip: i64 = (as_of - last_trip).whole_days();

        if total_distance > HIGH_MILEAGE_THRESHOLD {
            vehicle_alerts.push(VehicleAlert {
                lorry_id: lorry_id.clone(),
                kind: VehicleAlertKind::HighMileage,
                total_distance,
                days_since_last_trip,
            });
        }

        if days_since_last_trip > INACTIVITY_DAYS {
            vehicle_alerts.push(VehicleAlert {
                lorry_id: lorry_id.clone(),
                kind: VehicleAlertKind::Inactive,
                total_distance,
                days_since_last_trip,
            });
        }
    }

    let mut driver_alerts: Vec<DriverAlert> = Vec::new();
    for (driver_id, last_trip) in driver_last_trip {
        let days_since_last_trip: i64 = (as_of - last_trip).whole_days();

        if days_since_last_trip > INACTIVITY_DAYS {
            driver_alerts.push(DriverAlert {
                driver_id: driver_id.clone(),
                days_since_last_trip,
            });
        }
    }

    MaintenanceAlerts {
        vehicle_alerts,
        driver_alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::tests::make_trip_at;
    use haul_hub_domain::{Trip, TripStatus};
    use time::macros::datetime;

    #[test]
    fn test_empty_collection_yields_no_alerts() {
        let alerts: MaintenanceAlerts = maintenance_alerts(&[], datetime!(2026-04-01 00:00 UTC));

        assert!(alerts.vehicle_alerts.is_empty());
        assert!(alerts.driver_alerts.is_empty());
    }

    #[test]
    fn test_inactive_vehicle_flagged_once() {
        // Last trip 31 days before as_of, below the mileage threshold
        let mut trip: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-03-01 00:00 UTC),
        );
        trip.distance = 480.0;

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[trip], datetime!(2026-04-01 00:00 UTC));

        assert_eq!(alerts.vehicle_alerts.len(), 1);
        assert_eq!(alerts.vehicle_alerts[0].kind, VehicleAlertKind::Inactive);
        assert_eq!(alerts.vehicle_alerts[0].days_since_last_trip, 31);
    }

    #[test]
    fn test_recent_vehicle_not_flagged() {
        let trip: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-03-25 00:00 UTC),
        );

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[trip], datetime!(2026-04-01 00:00 UTC));

        assert!(alerts.vehicle_alerts.is_empty());
        assert!(alerts.driver_alerts.is_empty());
    }

    #[test]
    fn test_high_mileage_accumulates_across_trips() {
        let mut first: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-03-20 00:00 UTC),
        );
        first.distance = 30_000.0;
        let mut second: Trip = make_trip_at(
            "trip-2",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-03-28 00:00 UTC),
        );
        second.distance = 25_000.0;

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[first, second], datetime!(2026-04-01 00:00 UTC));

        assert_eq!(alerts.vehicle_alerts.len(), 1);
        assert_eq!(alerts.vehicle_alerts[0].kind, VehicleAlertKind::HighMileage);
        assert_eq!(alerts.vehicle_alerts[0].total_distance, 55_000.0);
    }

    #[test]
    fn test_stale_high_mileage_vehicle_gets_both_alerts() {
        let mut trip: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-01-01 00:00 UTC),
        );
        trip.distance = 60_000.0;

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[trip], datetime!(2026-04-01 00:00 UTC));

        assert_eq!(alerts.vehicle_alerts.len(), 2);
        assert_eq!(alerts.vehicle_alerts[0].kind, VehicleAlertKind::HighMileage);
        assert_eq!(alerts.vehicle_alerts[1].kind, VehicleAlertKind::Inactive);
    }

    #[test]
    fn test_inactive_driver_flagged() {
        let trip: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-02-01 00:00 UTC),
        );

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[trip], datetime!(2026-04-01 00:00 UTC));

        assert_eq!(alerts.driver_alerts.len(), 1);
        assert_eq!(alerts.driver_alerts[0].driver_id.value(), "driver-1");
        assert_eq!(alerts.driver_alerts[0].days_since_last_trip, 59);
    }

    #[test]
    fn test_exactly_thirty_days_is_not_inactive() {
        let trip: Trip = make_trip_at(
            "trip-1",
            "driver-1",
            "lorry-1",
            TripStatus::Delivered,
            datetime!(2026-03-02 00:00 UTC),
        );

        let alerts: MaintenanceAlerts =
            maintenance_alerts(&[trip], datetime!(2026-04-01 00:00 UTC));

        assert!(alerts.vehicle_alerts.is_empty());
        assert!(alerts.driver_alerts.is_empty());
    }
}
