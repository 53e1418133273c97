// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{one_zone_system, registered_vehicle, setup_zone};
use crate::{CoreError, ParkingSystem, RollbackReport};
use zone_park_domain::{RequestId, RequestState, SlotId, VehicleId, ZoneId};

#[test]
fn test_rollback_on_empty_log() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);

    let result: Result<RollbackReport, CoreError> = system.rollback_last();

    assert_eq!(result.unwrap_err(), CoreError::NothingToRollback);
}

#[test]
fn test_rolling_back_an_allocation_frees_the_slot() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    assert_eq!(system.available_slot_count(), 0);

    let report: RollbackReport = system.rollback_last().unwrap();

    assert_eq!(
        report,
        RollbackReport::AllocationUndone {
            request_id: request_id.clone(),
            slot_id: Some(SlotId::new("Z1-A1-S1")),
            zone_id: Some(ZoneId::new("Z1")),
        }
    );
    assert_eq!(system.available_slot_count(), 1);
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Cancelled
    );
}

#[test]
fn test_cancellation_rollback_is_informational_only() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.cancel_request(&request_id).unwrap();

    let report: RollbackReport = system.rollback_last().unwrap();

    assert_eq!(
        report,
        RollbackReport::CancellationNoted {
            request_id: request_id.clone(),
        }
    );
    // The request stays cancelled; restoring it takes a new request.
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Cancelled
    );
}

#[test]
fn test_state_change_rollback_reports_previous_state() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    system.mark_occupied(&request_id).unwrap();

    let report: RollbackReport = system.rollback_last().unwrap();

    assert_eq!(
        report,
        RollbackReport::StateChangeNoted {
            request_id: request_id.clone(),
            previous_state: Some(RequestState::Allocated),
        }
    );
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Occupied
    );
}

#[test]
fn test_rollback_order_is_most_recent_first() {
    let mut system: ParkingSystem = one_zone_system("Z1", 3);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let first: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    let second: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    system.process_next_request().unwrap();
    system.mark_occupied(&first).unwrap();

    let reports: Vec<Result<RollbackReport, CoreError>> = system.rollback_last_k(2);

    assert_eq!(reports.len(), 2);
    assert_eq!(
        reports[0],
        Ok(RollbackReport::StateChangeNoted {
            request_id: first,
            previous_state: Some(RequestState::Allocated),
        })
    );
    assert_eq!(
        reports[1],
        Ok(RollbackReport::AllocationUndone {
            request_id: second,
            slot_id: Some(SlotId::new("Z1-A1-S2")),
            zone_id: Some(ZoneId::new("Z1")),
        })
    );
    assert_eq!(system.available_rollbacks(), 1);
}

#[test]
fn test_rollback_last_k_clamps_to_available_entries() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();

    let reports: Vec<Result<RollbackReport, CoreError>> = system.rollback_last_k(50);

    assert_eq!(reports.len(), 1);
    assert_eq!(system.available_rollbacks(), 0);
}

#[test]
fn test_failed_undo_still_consumes_the_entry() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    system.mark_occupied(&request_id).unwrap();

    // First pop is the informational state change.
    assert!(system.rollback_last().is_ok());
    // Second pop tries to undo the allocation, but the request is now
    // occupied and can no longer be cancelled.
    let result: Result<RollbackReport, CoreError> = system.rollback_last();

    assert!(result.is_err());
    assert_eq!(system.available_rollbacks(), 0);
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Occupied
    );
}

#[test]
fn test_log_capacity_keeps_only_most_recent_entries() {
    let mut system: ParkingSystem = ParkingSystem::with_capacities(100, 2);
    setup_zone(&mut system, "Z1", 3);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    for _ in 0..3 {
        system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
        system.process_next_request().unwrap();
    }

    // Three allocations recorded, capacity two: the first was evicted.
    assert_eq!(system.available_rollbacks(), 2);
    let reports: Vec<Result<RollbackReport, CoreError>> = system.rollback_last_k(2);
    let rolled_back: Vec<RequestId> = reports
        .into_iter()
        .map(|report| match report.unwrap() {
            RollbackReport::AllocationUndone { request_id, .. } => request_id,
            other => panic!("unexpected report: {other:?}"),
        })
        .collect();

    assert_eq!(
        rolled_back,
        vec![RequestId::new("R1002"), RequestId::new("R1001")]
    );
}
