// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_request, create_test_trip};
use crate::{CoreError, StatusChangeResult, WorkflowEngine};
use haul_hub_domain::{DomainError, Role, StatusChangeRequest, Trip, TripStatus};

#[test]
fn test_valid_change_returns_updated_trip() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::Scheduled);

    let result: Result<StatusChangeResult, CoreError> = engine.apply_status_change(
        &trip,
        TripStatus::PickedUp,
        Role::Driver,
        "user-123",
        "Dana Dispatcher",
        &create_test_request(),
        false,
    );

    assert!(result.is_ok());
    let change: StatusChangeResult = result.unwrap();
    assert_eq!(change.updated_trip.status, TripStatus::PickedUp);
    assert_eq!(change.updated_trip.trip_id, trip.trip_id);
    // The input trip is untouched
    assert_eq!(trip.status, TripStatus::Scheduled);
}

#[test]
fn test_valid_change_emits_audit_entry() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::Scheduled);

    let change: StatusChangeResult = engine
        .apply_status_change(
            &trip,
            TripStatus::PickedUp,
            Role::Driver,
            "user-123",
            "Dana Dispatcher",
            &create_test_request(),
            false,
        )
        .unwrap();

    assert_eq!(change.audit_entry.trip_id, trip.trip_id);
    assert_eq!(change.audit_entry.previous_status, TripStatus::Scheduled);
    assert_eq!(change.audit_entry.new_status, TripStatus::PickedUp);
    assert_eq!(change.audit_entry.changed_by, "user-123");
    assert_eq!(change.audit_entry.changed_by_name, "Dana Dispatcher");
    assert_eq!(change.audit_entry.reason.as_deref(), Some("Dispatcher request"));
    assert!(!change.audit_entry.automatic_change);
}

#[test]
fn test_same_status_rejected() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::InTransit);

    let result: Result<StatusChangeResult, CoreError> = engine.apply_status_change(
        &trip,
        TripStatus::InTransit,
        Role::Admin,
        "user-123",
        "Dana Dispatcher",
        &StatusChangeRequest::default(),
        false,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::SameStatusTransition { .. }
        ))
    ));
}

#[test]
fn test_unauthorized_role_rejected() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::Scheduled);

    // Drivers may not cancel a trip
    let result: Result<StatusChangeResult, CoreError> = engine.apply_status_change(
        &trip,
        TripStatus::Canceled,
        Role::Driver,
        "user-123",
        "Dana Dispatcher",
        &StatusChangeRequest::default(),
        false,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::RoleNotAuthorized { .. }
        ))
    ));
}

#[test]
fn test_undefined_transition_rejected() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::Paid);

    let result: Result<StatusChangeResult, CoreError> = engine.apply_status_change(
        &trip,
        TripStatus::Scheduled,
        Role::Admin,
        "user-123",
        "Dana Dispatcher",
        &StatusChangeRequest::default(),
        false,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::TransitionNotDefined { .. }
        ))
    ));
}

#[test]
fn test_approval_flag_surfaces_on_result() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::InTransit);

    let change: StatusChangeResult = engine
        .apply_status_change(
            &trip,
            TripStatus::Canceled,
            Role::Dispatcher,
            "user-123",
            "Dana Dispatcher",
            &StatusChangeRequest::default(),
            false,
        )
        .unwrap();

    assert!(change.requires_approval);
    assert_eq!(change.updated_trip.status, TripStatus::Canceled);
}

#[test]
fn test_oversized_request_text_rejected() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::Scheduled);
    let request: StatusChangeRequest = StatusChangeRequest::new(Some("x".repeat(2048)), None);

    let result: Result<StatusChangeResult, CoreError> = engine.apply_status_change(
        &trip,
        TripStatus::PickedUp,
        Role::Dispatcher,
        "user-123",
        "Dana Dispatcher",
        &request,
        false,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::TextTooLong { .. }))
    ));
}

#[test]
fn test_automatic_change_recorded_on_entry() {
    let engine: WorkflowEngine = WorkflowEngine::standard();
    let trip: Trip = create_test_trip(TripStatus::PickedUp);

    let change: StatusChangeResult = engine
        .apply_status_change(
            &trip,
            TripStatus::InTransit,
            Role::Admin,
            "system",
            "ELD integration",
            &StatusChangeRequest::default(),
            true,
        )
        .unwrap();

    assert!(change.audit_entry.automatic_change);
}

#[test]
fn test_final_status_matches_rule_table() {
    let engine: WorkflowEngine = WorkflowEngine::standard();

    assert!(engine.is_final_status(TripStatus::Paid));
    assert!(engine.is_final_status(TripStatus::Canceled));
    assert!(!engine.is_final_status(TripStatus::Scheduled));
}

#[test]
fn test_available_transitions_delegate_to_table() {
    let engine: WorkflowEngine = WorkflowEngine::standard();

    assert_eq!(
        engine.available_transitions(TripStatus::InTransit, Role::Driver),
        vec![TripStatus::Delivered]
    );
}
