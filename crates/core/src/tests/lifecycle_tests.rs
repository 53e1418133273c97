// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{fill_zone, one_zone_system, registered_vehicle, setup_zone};
use crate::{AllocationReceipt, CoreError, ParkingSystem};
use zone_park_domain::{DomainError, RequestId, RequestState, VehicleId, ZoneId};

#[test]
fn test_generated_ids_are_sequential_from_one_thousand() {
    let mut system: ParkingSystem = one_zone_system("Z1", 3);

    let first: VehicleId = system
        .register_vehicle("Car", "AAA-111", "Alice", &ZoneId::new("Z1"))
        .unwrap();
    let second: VehicleId = system
        .register_vehicle("Truck", "BBB-222", "Bob", &ZoneId::new("Z1"))
        .unwrap();
    let first_request: RequestId = system.create_request(&first, &ZoneId::new("Z1")).unwrap();
    let second_request: RequestId = system.create_request(&second, &ZoneId::new("Z1")).unwrap();

    assert_eq!(first, VehicleId::new("V1000"));
    assert_eq!(second, VehicleId::new("V1001"));
    assert_eq!(first_request, RequestId::new("R1000"));
    assert_eq!(second_request, RequestId::new("R1001"));
}

#[test]
fn test_duplicate_license_plate_is_rejected() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    system
        .register_vehicle("Car", "ABC-123", "Alice", &ZoneId::new("Z1"))
        .unwrap();

    let result: Result<VehicleId, CoreError> =
        system.register_vehicle("Car", "ABC-123", "Bob", &ZoneId::new("Z1"));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DuplicateLicensePlate(String::from("ABC-123"))
        ))
    );
    assert_eq!(system.vehicle_count(), 1);
}

#[test]
fn test_empty_plates_can_repeat() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    system
        .register_vehicle("Car", "", "Alice", &ZoneId::new("Z1"))
        .unwrap();

    assert!(
        system
            .register_vehicle("Car", "", "Bob", &ZoneId::new("Z1"))
            .is_ok()
    );
}

#[test]
fn test_register_vehicle_requires_existing_zone() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);

    let result: Result<VehicleId, CoreError> =
        system.register_vehicle("Car", "ABC-123", "Alice", &ZoneId::new("Z9"));

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ZoneNotFound(
            ZoneId::new("Z9")
        )))
    );
}

#[test]
fn test_unknown_vehicle_is_auto_registered() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);

    system
        .create_request(&VehicleId::new("WALKIN-7"), &ZoneId::new("Z1"))
        .unwrap();

    let vehicle = system.find_vehicle(&VehicleId::new("WALKIN-7")).unwrap();
    assert_eq!(vehicle.vehicle_type, "Unknown");
    assert_eq!(vehicle.preferred_zone, ZoneId::new("Z1"));
}

#[test]
fn test_queue_full_leaves_registry_untouched() {
    let mut system: ParkingSystem = ParkingSystem::with_capacities(1, 10);
    setup_zone(&mut system, "Z1", 2);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();

    let result: Result<RequestId, CoreError> =
        system.create_request(&vehicle_id, &ZoneId::new("Z1"));

    assert_eq!(result, Err(CoreError::QueueFull { capacity: 1 }));
    assert_eq!(system.requests().len(), 1);
    assert_eq!(system.pending_request_count(), 1);
}

#[test]
fn test_process_next_on_empty_queue() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);

    let result: Result<AllocationReceipt, CoreError> = system.process_next_request();

    assert_eq!(result.unwrap_err(), CoreError::QueueEmpty);
}

#[test]
fn test_full_lifecycle_frees_the_slot() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();

    let receipt: AllocationReceipt = system.process_next_request().unwrap();
    assert_eq!(receipt.total_cost, 10.0);
    assert_eq!(system.available_slot_count(), 0);

    system.mark_occupied(&request_id).unwrap();
    system.mark_released(&request_id).unwrap();

    assert_eq!(system.available_slot_count(), 1);
    let request = system.requests().find(&request_id).unwrap();
    assert_eq!(request.state(), RequestState::Released);
    assert_eq!(system.requests().total_revenue(), 10.0);
}

#[test]
fn test_failed_allocation_keeps_request_for_retry() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    fill_zone(&mut system, "Z1");
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();

    let result: Result<AllocationReceipt, CoreError> = system.process_next_request();
    assert_eq!(
        result.unwrap_err(),
        CoreError::AllocationFailed {
            requested_zone: ZoneId::new("Z1"),
        }
    );
    let stalled = system.requests().find(&request_id).unwrap();
    assert_eq!(stalled.state(), RequestState::Requested);

    // Free the blocking slot, then retry directly by id.
    let blocker: RequestId = RequestId::new("R1000");
    system.mark_occupied(&blocker).unwrap();
    system.mark_released(&blocker).unwrap();
    let receipt: AllocationReceipt = system.allocate_request(&request_id).unwrap();

    assert_eq!(receipt.zone_id, ZoneId::new("Z1"));
}

#[test]
fn test_cancel_allocated_request_frees_its_slot() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    assert_eq!(system.available_slot_count(), 0);

    system.cancel_request(&request_id).unwrap();

    assert_eq!(system.available_slot_count(), 1);
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Cancelled
    );
}

#[test]
fn test_release_requires_occupied_state() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();

    let result: Result<(), CoreError> = system.mark_released(&request_id);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidTransition {
            request: request_id.clone(),
            from: RequestState::Allocated,
            action: "release",
        }))
    );
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Allocated
    );
}

#[test]
fn test_set_preferred_zone_validates_both_sides() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    setup_zone(&mut system, "Z2", 1);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");

    system.set_preferred_zone(&vehicle_id, &ZoneId::new("Z2")).unwrap();
    assert_eq!(
        system.find_vehicle(&vehicle_id).unwrap().preferred_zone,
        ZoneId::new("Z2")
    );

    let missing_zone: Result<(), CoreError> =
        system.set_preferred_zone(&vehicle_id, &ZoneId::new("Z9"));
    assert!(missing_zone.is_err());

    let missing_vehicle: Result<(), CoreError> =
        system.set_preferred_zone(&VehicleId::new("V9999"), &ZoneId::new("Z1"));
    assert_eq!(
        missing_vehicle,
        Err(CoreError::DomainViolation(DomainError::VehicleNotFound(
            VehicleId::new("V9999")
        )))
    );
}

#[test]
fn test_adjacency_is_symmetric_and_idempotent() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    setup_zone(&mut system, "Z2", 1);

    let recorded: bool = system
        .add_adjacency(&ZoneId::new("Z1"), &ZoneId::new("Z2"))
        .unwrap();
    assert!(recorded);
    assert!(
        system
            .find_zone(&ZoneId::new("Z2"))
            .unwrap()
            .is_adjacent(&ZoneId::new("Z1"))
    );

    let repeated: bool = system
        .add_adjacency(&ZoneId::new("Z2"), &ZoneId::new("Z1"))
        .unwrap();
    assert!(!repeated);

    let self_link: Result<bool, CoreError> =
        system.add_adjacency(&ZoneId::new("Z1"), &ZoneId::new("Z1"));
    assert_eq!(
        self_link,
        Err(CoreError::DomainViolation(DomainError::SelfAdjacency(
            ZoneId::new("Z1")
        )))
    );
}

#[test]
fn test_duplicate_zone_is_rejected() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);

    let result: Result<(), CoreError> = system.add_zone(ZoneId::new("Z1"), "Again", 5);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateZone(
            ZoneId::new("Z1")
        )))
    );
}

#[test]
fn test_slot_counts_stay_conserved_across_operations() {
    let mut system: ParkingSystem = one_zone_system("Z1", 3);
    setup_zone(&mut system, "Z2", 2);
    let total: usize = system.total_slot_count();
    assert_eq!(total, 5);

    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id: RequestId = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    assert_eq!(system.available_slot_count(), total - 1);

    system.cancel_request(&request_id).unwrap();
    assert_eq!(system.available_slot_count(), total);
    assert_eq!(system.total_slot_count(), total);
}

#[test]
fn test_zone_utilization_analytics() {
    let mut system: ParkingSystem = one_zone_system("Z1", 2);
    setup_zone(&mut system, "Z2", 2);
    fill_zone(&mut system, "Z1");

    let busiest: (ZoneId, f64) = system.busiest_zone().unwrap();
    let most_available: (ZoneId, f64) = system.most_available_zone().unwrap();

    assert_eq!(busiest.0, ZoneId::new("Z1"));
    assert_eq!(busiest.1, 1.0);
    assert_eq!(most_available.0, ZoneId::new("Z2"));
    assert_eq!(most_available.1, 0.0);
}
