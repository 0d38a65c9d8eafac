// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The trip record consumed by the workflow engine and the aggregator.
//!
//! Trips are created and persisted by the external trip service. This
//! engine never mutates a stored trip in place; status changes produce a
//! new trip value paired with an audit entry, and aggregation reads trip
//! collections without modifying them.

use crate::trip_status::TripStatus;
use crate::types::{BrokerId, DriverId, LorryId, TripId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single trip record.
///
/// Payment and fee amounts are in the operator's settlement currency;
/// distance is in the operator's distance unit (miles in the original
/// deployment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// The trip identifier.
    pub trip_id: TripId,
    /// Current lifecycle status.
    pub status: TripStatus,
    /// The driver assigned to the trip.
    pub driver_id: DriverId,
    /// The vehicle assigned to the trip.
    pub lorry_id: LorryId,
    /// The broker the load was booked through.
    pub broker_id: BrokerId,
    /// Display name of the broker.
    pub broker_name: String,
    /// Amount the broker pays for the load.
    pub broker_payment: f64,
    /// Amount paid to the driver.
    pub driver_payment: f64,
    /// Amount paid to the lorry owner.
    pub lorry_owner_payment: f64,
    /// Trip distance.
    pub distance: f64,
    /// Lumper (loading/unloading) fees incurred.
    pub lumper_fees: f64,
    /// Detention fees incurred.
    pub detention_fees: f64,
    /// When the pickup is scheduled.
    pub scheduled_pickup_datetime: OffsetDateTime,
}

impl Trip {
    /// Creates a new trip record.
    ///
    /// # Arguments
    ///
    /// * `trip_id` - The trip identifier
    /// * `status` - Current lifecycle status
    /// * `driver_id` - The assigned driver
    /// * `lorry_id` - The assigned vehicle
    /// * `broker_id` - The broker the load was booked through
    /// * `broker_name` - Display name of the broker
    /// * `broker_payment` - Amount the broker pays
    /// * `driver_payment` - Amount paid to the driver
    /// * `lorry_owner_payment` - Amount paid to the lorry owner
    /// * `distance` - Trip distance
    /// * `lumper_fees` - Lumper fees incurred
    /// * `detention_fees` - Detention fees incurred
    /// * `scheduled_pickup_datetime` - When the pickup is scheduled
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        trip_id: TripId,
        status: TripStatus,
        driver_id: DriverId,
        lorry_id: LorryId,
        broker_id: BrokerId,
        broker_name: String,
        broker_payment: f64,
        driver_payment: f64,
        lorry_owner_payment: f64,
        distance: f64,
        lumper_fees: f64,
        detention_fees: f64,
        scheduled_pickup_datetime: OffsetDateTime,
    ) -> Self {
        Self {
            trip_id,
            status,
            driver_id,
            lorry_id,
            broker_id,
            broker_name,
            broker_payment,
            driver_payment,
            lorry_owner_payment,
            distance,
            lumper_fees,
            detention_fees,
            scheduled_pickup_datetime,
        }
    }

    /// Returns a copy of this trip with a different status.
    ///
    /// All other fields are preserved. The original trip is untouched.
    #[must_use]
    pub fn with_status(&self, status: TripStatus) -> Self {
        let mut updated: Self = self.clone();
        updated.status = status;
        updated
    }

    /// Total expense side of the trip: driver and lorry owner payments plus
    /// lumper and detention fees.
    #[must_use]
    pub fn total_expenses(&self) -> f64 {
        self.driver_payment + self.lorry_owner_payment + self.lumper_fees + self.detention_fees
    }
}
