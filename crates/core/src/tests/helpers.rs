// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ParkingSystem;
use zone_park_domain::{AreaId, SlotId, VehicleId, ZoneId};

/// Adds a zone with one area holding `slot_count` slots.
pub fn setup_zone(system: &mut ParkingSystem, zone: &str, slot_count: usize) {
    let zone_id: ZoneId = ZoneId::new(zone);
    system
        .add_zone(zone_id.clone(), &format!("{zone} Lot"), 5)
        .unwrap();
    system
        .add_area(&zone_id, AreaId::new("A1"), slot_count.max(1))
        .unwrap();
    for index in 1..=slot_count {
        system
            .add_slot(
                &zone_id,
                &AreaId::new("A1"),
                SlotId::new(&format!("{zone}-A1-S{index}")),
            )
            .unwrap();
    }
}

pub fn one_zone_system(zone: &str, slot_count: usize) -> ParkingSystem {
    let mut system: ParkingSystem = ParkingSystem::new();
    setup_zone(&mut system, zone, slot_count);
    system
}

/// Registers a vehicle with a plate unique within `system`.
pub fn registered_vehicle(system: &mut ParkingSystem, zone: &str) -> VehicleId {
    let plate: String = format!("PLATE-{}", system.vehicle_count());
    system
        .register_vehicle("Car", &plate, "Test Owner", &ZoneId::new(zone))
        .unwrap()
}

/// Allocates requests until `zone` has no free slot.
///
/// Assumes the intake queue is empty on entry.
pub fn fill_zone(system: &mut ParkingSystem, zone: &str) {
    while system
        .find_zone(&ZoneId::new(zone))
        .unwrap()
        .available_slot_count()
        > 0
    {
        let vehicle_id: VehicleId = registered_vehicle(system, zone);
        system.create_request(&vehicle_id, &ZoneId::new(zone)).unwrap();
        system.process_next_request().unwrap();
    }
}
