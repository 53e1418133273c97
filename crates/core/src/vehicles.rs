// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use zone_park_domain::{Vehicle, VehicleId};

#[derive(Debug, Clone)]
struct Node {
    vehicle: Vehicle,
    left: Option<usize>,
    right: Option<usize>,
}

/// Vehicle registry backed by a binary search tree keyed on vehicle
/// id.
///
/// Nodes live in an arena and refer to each other by index, so the
/// tree never juggles owned pointers. Generated ids arrive in
/// ascending order, which keeps insertion simple; balance is not
/// maintained and not needed at this scale.
#[derive(Debug, Clone, Default)]
pub struct VehicleRegistry {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl VehicleRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Inserts a vehicle keyed on its id.
    ///
    /// Returns `false` without modifying the tree if a vehicle with
    /// the same id is already registered. The first registration wins.
    pub fn insert(&mut self, vehicle: Vehicle) -> bool {
        let Some(root) = self.root else {
            self.root = Some(self.push_node(vehicle));
            return true;
        };
        let mut current = root;
        loop {
            match vehicle.vehicle_id.cmp(&self.nodes[current].vehicle.vehicle_id) {
                std::cmp::Ordering::Equal => return false,
                std::cmp::Ordering::Less => match self.nodes[current].left {
                    Some(left) => current = left,
                    None => {
                        let index = self.push_node(vehicle);
                        self.nodes[current].left = Some(index);
                        return true;
                    }
                },
                std::cmp::Ordering::Greater => match self.nodes[current].right {
                    Some(right) => current = right,
                    None => {
                        let index = self.push_node(vehicle);
                        self.nodes[current].right = Some(index);
                        return true;
                    }
                },
            }
        }
    }

    #[must_use]
    pub fn search(&self, vehicle_id: &VehicleId) -> Option<&Vehicle> {
        self.find_index(vehicle_id)
            .map(|index| &self.nodes[index].vehicle)
    }

    pub fn search_mut(&mut self, vehicle_id: &VehicleId) -> Option<&mut Vehicle> {
        self.find_index(vehicle_id)
            .map(|index| &mut self.nodes[index].vehicle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Vehicles in ascending id order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn iter_in_order(&self) -> InorderIter<'_> {
        let mut iter = InorderIter {
            registry: self,
            stack: Vec::new(),
        };
        iter.descend_left(self.root);
        iter
    }

    /// True if no registered vehicle carries `license_plate`.
    ///
    /// Empty plates never collide.
    #[must_use]
    pub fn license_plate_is_unique(&self, license_plate: &str) -> bool {
        if license_plate.is_empty() {
            return true;
        }
        self.iter_in_order()
            .all(|vehicle| vehicle.license_plate != license_plate)
    }

    fn find_index(&self, vehicle_id: &VehicleId) -> Option<usize> {
        let mut current = self.root;
        while let Some(index) = current {
            match vehicle_id.cmp(&self.nodes[index].vehicle.vehicle_id) {
                std::cmp::Ordering::Equal => return Some(index),
                std::cmp::Ordering::Less => current = self.nodes[index].left,
                std::cmp::Ordering::Greater => current = self.nodes[index].right,
            }
        }
        None
    }

    fn push_node(&mut self, vehicle: Vehicle) -> usize {
        self.nodes.push(Node {
            vehicle,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

/// Lazy in-order traversal over a [`VehicleRegistry`].
#[derive(Debug)]
pub struct InorderIter<'a> {
    registry: &'a VehicleRegistry,
    stack: Vec<usize>,
}

impl InorderIter<'_> {
    fn descend_left(&mut self, mut current: Option<usize>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.registry.nodes[index].left;
        }
    }
}

impl<'a> Iterator for InorderIter<'a> {
    type Item = &'a Vehicle;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        self.descend_left(self.registry.nodes[index].right);
        Some(&self.registry.nodes[index].vehicle)
    }
}
