// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{fill_zone, one_zone_system, registered_vehicle, setup_zone};
use crate::{AllocationReceipt, ParkingSystem};
use zone_park_domain::{RequestState, VehicleId, ZoneId};

#[test]
fn test_same_zone_allocation_scenario() {
    let mut system: ParkingSystem = one_zone_system("Z1", 3);
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    let request_id = system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();

    let receipt: AllocationReceipt = system.process_next_request().unwrap();

    assert_eq!(receipt.zone_id, ZoneId::new("Z1"));
    assert!(!receipt.cross_zone);
    assert_eq!(receipt.total_cost, 10.0);
    assert_eq!(
        system.requests().find(&request_id).unwrap().state(),
        RequestState::Allocated
    );
    assert_eq!(
        system
            .find_zone(&ZoneId::new("Z1"))
            .unwrap()
            .available_slot_count(),
        2
    );
}

#[test]
fn test_adjacent_zone_spillover_scenario() {
    let mut system: ParkingSystem = one_zone_system("Z1", 2);
    setup_zone(&mut system, "Z2", 1);
    system
        .add_adjacency(&ZoneId::new("Z1"), &ZoneId::new("Z2"))
        .unwrap();
    fill_zone(&mut system, "Z2");

    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z2");
    system.create_request(&vehicle_id, &ZoneId::new("Z2")).unwrap();
    let receipt: AllocationReceipt = system.process_next_request().unwrap();

    assert_eq!(receipt.zone_id, ZoneId::new("Z1"));
    assert!(receipt.cross_zone);
    assert!(receipt.adjacent_zone_used);
    assert_eq!(receipt.total_cost, 13.0);
}

#[test]
fn test_distant_zone_spillover_scenario() {
    let mut system: ParkingSystem = one_zone_system("Z1", 1);
    setup_zone(&mut system, "Z2", 1);
    setup_zone(&mut system, "Z3", 1);
    fill_zone(&mut system, "Z1");

    // No adjacencies recorded, so the spillover pays the distant
    // penalty even though a slot exists one zone over.
    let vehicle_id: VehicleId = registered_vehicle(&mut system, "Z1");
    system.create_request(&vehicle_id, &ZoneId::new("Z1")).unwrap();
    let receipt: AllocationReceipt = system.process_next_request().unwrap();

    assert_eq!(receipt.zone_id, ZoneId::new("Z2"));
    assert!(receipt.cross_zone);
    assert!(!receipt.adjacent_zone_used);
    assert_eq!(receipt.total_cost, 15.0);
}

#[test]
fn test_mixed_day_of_operations_keeps_books_consistent() {
    let mut system: ParkingSystem = one_zone_system("Z1", 2);
    setup_zone(&mut system, "Z2", 2);
    system
        .add_adjacency(&ZoneId::new("Z1"), &ZoneId::new("Z2"))
        .unwrap();

    let commuter: VehicleId = registered_vehicle(&mut system, "Z1");
    let visitor: VehicleId = registered_vehicle(&mut system, "Z1");
    let first = system.create_request(&commuter, &ZoneId::new("Z1")).unwrap();
    let second = system.create_request(&visitor, &ZoneId::new("Z1")).unwrap();
    system.process_next_request().unwrap();
    system.process_next_request().unwrap();

    system.mark_occupied(&first).unwrap();
    system.mark_released(&first).unwrap();
    system.cancel_request(&second).unwrap();

    assert_eq!(system.available_slot_count(), 4);
    assert_eq!(system.requests().count_by_state(RequestState::Released), 1);
    assert_eq!(system.requests().count_by_state(RequestState::Cancelled), 1);
    // Both requests reached allocation, so both billed the base rate.
    assert_eq!(system.requests().total_revenue(), 10.0);
    assert_eq!(system.requests().active_count(), 0);
}
