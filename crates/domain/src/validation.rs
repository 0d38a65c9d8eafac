// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::trip::Trip;
use crate::types::StatusChangeRequest;

/// Maximum length for free-text reason and notes fields.
const MAX_TEXT_LENGTH: usize = 1024;

/// Validates that a trip's basic field constraints are met.
///
/// This function checks identifiers and numeric sign constraints. It does
/// NOT check status transitions (that requires the rule table).
///
/// # Arguments
///
/// * `trip` - The trip to validate
///
/// # Returns
///
/// * `Ok(())` if the trip's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - Any identifier is empty
/// - Any payment or fee amount is negative
/// - The distance is negative
pub fn validate_trip_fields(trip: &Trip) -> Result<(), DomainError> {
    if trip.trip_id.value().trim().is_empty() {
        return Err(DomainError::InvalidTripId(String::from(
            "Trip id cannot be empty",
        )));
    }

    if trip.driver_id.value().trim().is_empty() {
        return Err(DomainError::InvalidDriverId(String::from(
            "Driver id cannot be empty",
        )));
    }

    if trip.lorry_id.value().trim().is_empty() {
        return Err(DomainError::InvalidLorryId(String::from(
            "Lorry id cannot be empty",
        )));
    }

    let amounts: [(&'static str, f64); 5] = [
        ("broker_payment", trip.broker_payment),
        ("driver_payment", trip.driver_payment),
        ("lorry_owner_payment", trip.lorry_owner_payment),
        ("lumper_fees", trip.lumper_fees),
        ("detention_fees", trip.detention_fees),
    ];

    for (field, value) in amounts {
        if value < 0.0 {
            return Err(DomainError::NegativeAmount { field, value });
        }
    }

    if trip.distance < 0.0 {
        return Err(DomainError::NegativeDistance {
            value: trip.distance,
        });
    }

    Ok(())
}

/// Validates the free-text fields of a status change request.
///
/// # Arguments
///
/// * `request` - The request to validate
///
/// # Returns
///
/// * `Ok(())` if the request is valid
/// * `Err(DomainError)` if a text field is too long
///
/// # Errors
///
/// Returns an error if `reason` or `notes` exceeds the maximum length.
pub fn validate_status_change_request(request: &StatusChangeRequest) -> Result<(), DomainError> {
    if let Some(reason) = &request.reason
        && reason.len() > MAX_TEXT_LENGTH
    {
        return Err(DomainError::TextTooLong {
            field: "reason",
            max: MAX_TEXT_LENGTH,
            actual: reason.len(),
        });
    }

    if let Some(notes) = &request.notes
        && notes.len() > MAX_TEXT_LENGTH
    {
        return Err(DomainError::TextTooLong {
            field: "notes",
            max: MAX_TEXT_LENGTH,
            actual: notes.len(),
        });
    }

    Ok(())
}
