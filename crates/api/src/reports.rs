// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fail-soft dashboard report functions.
//!
//! Each function fetches the owner's trips through the [`TripSource`]
//! collaborator and reduces them with the corresponding aggregator. A
//! fetch failure is logged and degraded to the report's zero shape so
//! dashboards keep rendering.
//!
//! CAUTION: the degraded output is indistinguishable from a genuinely
//! empty period. Consumers making financial or compliance decisions must
//! not read these reports; they need a surface that propagates the
//! error instead.

use crate::source::{TripSource, TripSourceError};
use haul_hub_analytics::{
    BrokerRevenue, DriverPerformance, FleetOverview, MaintenanceAlerts, RevenueAnalytics,
    TripAnalytics, VehicleUtilization, broker_revenue, driver_performance, fleet_overview,
    maintenance_alerts, revenue_analytics, trip_analytics, vehicle_utilization,
};
use haul_hub_domain::{DateRange, Trip};
use time::OffsetDateTime;

/// Fetches trips, degrading to an empty collection on failure.
fn fetch_or_empty<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
    report: &str,
) -> Vec<Trip> {
    match source.fetch_trips(owner_id, range) {
        Ok(trips) => trips,
        Err(TripSourceError::FetchFailed { message }) => {
            tracing::error!(owner_id, report, %message, "trip fetch failed, serving zero-valued report");
            Vec::new()
        }
    }
}

/// Fleet overview for an owner, zero-valued on data-access failure.
#[must_use]
pub fn fleet_overview_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> FleetOverview {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "fleet_overview");
    fleet_overview(&trips)
}

/// Trip analytics for an owner, zero-valued on data-access failure.
#[must_use]
pub fn trip_analytics_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> TripAnalytics {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "trip_analytics");
    trip_analytics(&trips)
}

/// Driver performance for an owner, empty on data-access failure.
#[must_use]
pub fn driver_performance_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> Vec<DriverPerformance> {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "driver_performance");
    driver_performance(&trips)
}

/// Vehicle utilization for an owner, empty on data-access failure.
#[must_use]
pub fn vehicle_utilization_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> Vec<VehicleUtilization> {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "vehicle_utilization");
    vehicle_utilization(&trips, range)
}

/// Revenue analytics for an owner, zero-valued on data-access failure.
#[must_use]
pub fn revenue_analytics_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> RevenueAnalytics {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "revenue_analytics");
    revenue_analytics(&trips)
}

/// Per-broker revenue for an owner, empty on data-access failure.
#[must_use]
pub fn broker_revenue_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    range: Option<&DateRange>,
) -> Vec<BrokerRevenue> {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, range, "broker_revenue");
    broker_revenue(&trips)
}

/// Maintenance alerts for an owner, empty on data-access failure.
#[must_use]
pub fn maintenance_alerts_report<S: TripSource>(
    source: &S,
    owner_id: &str,
    as_of: OffsetDateTime,
) -> MaintenanceAlerts {
    let trips: Vec<Trip> = fetch_or_empty(source, owner_id, None, "maintenance_alerts");
    maintenance_alerts(&trips, as_of)
}
