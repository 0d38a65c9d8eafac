// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BrokerId, DriverId, LorryId, Trip, TripId, TripStatus};
use time::macros::datetime;

fn make_trip(id: &str, status: TripStatus) -> Trip {
    Trip::new(
        TripId::new(id),
        status,
        DriverId::new("driver-001"),
        LorryId::new("lorry-001"),
        BrokerId::new("broker-003"),
        String::from("TQL (Total Quality Logistics)"),
        1500.0,
        700.0,
        400.0,
        520.0,
        0.0,
        75.0,
        datetime!(2026-04-12 06:30 UTC),
    )
}

#[test]
fn test_identifier_equality() {
    let a: DriverId = DriverId::new("driver-001");
    let b: DriverId = DriverId::new("driver-001");
    let c: DriverId = DriverId::new("driver-002");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_trip_serde_round_trip() {
    let trip: Trip = make_trip("trip-042", TripStatus::InTransit);

    let json: String = serde_json::to_string(&trip).unwrap();
    let parsed: Trip = serde_json::from_str(&json).unwrap();

    assert_eq!(trip, parsed);
}

#[test]
fn test_trip_status_serializes_snake_case() {
    let trip: Trip = make_trip("trip-042", TripStatus::PickedUp);

    let json: String = serde_json::to_string(&trip).unwrap();
    assert!(json.contains("\"picked_up\""));
}
