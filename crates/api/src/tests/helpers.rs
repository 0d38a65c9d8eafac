// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticatedActor;
use crate::source::{TripSource, TripSourceError};
use haul_hub_domain::{
    BrokerId, DateRange, DriverId, LorryId, Role, Trip, TripId, TripStatus,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_actor(role: Role) -> AuthenticatedActor {
    AuthenticatedActor::new(
        String::from("user-123"),
        String::from("Dana Dispatcher"),
        role,
    )
}

pub fn create_test_trip(status: TripStatus) -> Trip {
    create_test_trip_at(status, datetime!(2026-03-01 08:00 UTC))
}

pub fn create_test_trip_at(status: TripStatus, pickup: OffsetDateTime) -> Trip {
    Trip::new(
        TripId::new("trip-001"),
        status,
        DriverId::new("driver-001"),
        LorryId::new("lorry-001"),
        BrokerId::new("broker-001"),
        String::from("C.H. Robinson"),
        1000.0,
        500.0,
        300.0,
        480.0,
        0.0,
        0.0,
        pickup,
    )
}

/// A trip source backed by a fixed collection.
pub struct StaticSource {
    pub trips: Vec<Trip>,
}

impl TripSource for StaticSource {
    fn fetch_trips(
        &self,
        _owner_id: &str,
        _range: Option<&DateRange>,
    ) -> Result<Vec<Trip>, TripSourceError> {
        Ok(self.trips.clone())
    }
}

/// A trip source whose fetch always fails.
pub struct FailingSource;

impl TripSource for FailingSource {
    fn fetch_trips(
        &self,
        _owner_id: &str,
        _range: Option<&DateRange>,
    ) -> Result<Vec<Trip>, TripSourceError> {
        Err(TripSourceError::FetchFailed {
            message: String::from("connection refused"),
        })
    }
}
