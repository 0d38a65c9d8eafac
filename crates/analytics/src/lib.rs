// Copyright (C) 2026 Fred Clausen
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

//! Operational trip metrics aggregation.
//!
//! Every report in this crate is a pure, deterministic reduction over a
//! caller-supplied trip collection. The collection has already been scoped
//! to an owner and optional date range by the read collaborator; nothing
//! here performs I/O, mutates its input, or keeps state between calls.
//! Anything time-dependent takes the reference instant or window as an
//! explicit parameter.

mod broker_revenue;
mod driver_performance;
mod fleet;
mod maintenance;
mod revenue;
mod support;
mod trip_analytics;
mod vehicle_utilization;

// Re-export public types and functions
pub use broker_revenue::{BrokerRevenue, broker_revenue};
pub use driver_performance::{DriverPerformance, driver_performance};
pub use fleet::{FleetOverview, fleet_overview};
pub use maintenance::{
    DriverAlert, HIGH_MILEAGE_THRESHOLD, INACTIVITY_DAYS, MaintenanceAlerts, VehicleAlert,
    VehicleAlertKind, maintenance_alerts,
};
pub use revenue::{MonthlyRevenue, RevenueAnalytics, revenue_analytics};
pub use trip_analytics::{TripAnalytics, trip_analytics};
pub use vehicle_utilization::{
    DEFAULT_UTILIZATION_WINDOW_DAYS, VehicleUtilization, vehicle_utilization,
};
