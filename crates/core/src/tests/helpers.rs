// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use haul_hub_audit::{StatusAuditEntry, StatusAuditTrail};
use haul_hub_domain::{
    BrokerId, DriverId, LorryId, StatusChangeRequest, Trip, TripId, TripStatus,
};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

pub fn create_test_trip(status: TripStatus) -> Trip {
    Trip::new(
        TripId::new("trip-001"),
        status,
        DriverId::new("driver-001"),
        LorryId::new("lorry-001"),
        BrokerId::new("broker-002"),
        String::from("XPO Logistics"),
        1000.0,
        500.0,
        300.0,
        480.0,
        0.0,
        0.0,
        datetime!(2026-03-01 08:00 UTC),
    )
}

pub fn create_test_request() -> StatusChangeRequest {
    StatusChangeRequest::new(Some(String::from("Dispatcher request")), None)
}

pub fn create_test_entry(
    previous: TripStatus,
    new: TripStatus,
    at: OffsetDateTime,
    automatic: bool,
) -> StatusAuditEntry {
    StatusAuditEntry::new(
        Uuid::new_v4(),
        TripId::new("trip-001"),
        previous,
        new,
        String::from("user-123"),
        String::from("Dana Dispatcher"),
        at,
        None,
        None,
        automatic,
    )
}

pub fn create_test_trail(entries: Vec<StatusAuditEntry>) -> StatusAuditTrail {
    StatusAuditTrail::from_entries(TripId::new("trip-001"), entries).unwrap()
}
