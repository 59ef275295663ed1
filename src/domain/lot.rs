use crate::domain::fee::charge;
use crate::domain::model::{LeaveReceipt, ParkReceipt, SlotStatus, StatusSnapshot};
use crate::utils::error::{ParkingError, Result};
use std::collections::HashMap;

/// Fixed-capacity lot handing out the lowest free slot number.
///
/// Slots are numbered `1..=capacity`. `occupancy` maps occupied slots to
/// vehicle ids and `by_vehicle` is its exact inverse, so a vehicle can hold
/// at most one slot.
#[derive(Debug, Clone, Default)]
pub struct ParkingLot {
    capacity: u32,
    occupancy: HashMap<u32, String>,
    by_vehicle: HashMap<String, u32>,
}

impl ParkingLot {
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            occupancy: HashMap::new(),
            by_vehicle: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn occupied(&self) -> usize {
        self.occupancy.len()
    }

    pub fn available(&self) -> usize {
        self.capacity as usize - self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    pub fn slot_of(&self, vehicle_id: &str) -> Option<u32> {
        self.by_vehicle.get(vehicle_id).copied()
    }

    pub fn occupant(&self, slot: u32) -> Option<&str> {
        self.occupancy.get(&slot).map(String::as_str)
    }

    fn next_free_slot(&self) -> Option<u32> {
        (1..=self.capacity).find(|slot| !self.occupancy.contains_key(slot))
    }

    /// Parks `vehicle_id` in the lowest-numbered free slot.
    pub fn park(&mut self, vehicle_id: impl Into<String>) -> Result<ParkReceipt> {
        let vehicle_id = vehicle_id.into();

        if let Some(slot) = self.slot_of(&vehicle_id) {
            return Err(ParkingError::VehicleAlreadyParked { vehicle_id, slot });
        }

        let slot = self.next_free_slot().ok_or(ParkingError::LotFull)?;

        self.occupancy.insert(slot, vehicle_id.clone());
        self.by_vehicle.insert(vehicle_id.clone(), slot);
        tracing::debug!("Allocated slot {} to {}", slot, vehicle_id);

        Ok(ParkReceipt { slot, vehicle_id })
    }

    /// Frees the slot held by `vehicle_id` and charges for `hours`.
    pub fn leave(&mut self, vehicle_id: &str, hours: u32) -> Result<LeaveReceipt> {
        let slot = self
            .by_vehicle
            .remove(vehicle_id)
            .ok_or_else(|| ParkingError::VehicleNotFound {
                vehicle_id: vehicle_id.to_string(),
            })?;
        self.occupancy.remove(&slot);

        let charge = charge(hours);
        tracing::debug!("Released slot {} from {} ({} hours, charge {})", slot, vehicle_id, hours, charge);

        Ok(LeaveReceipt {
            slot,
            vehicle_id: vehicle_id.to_string(),
            hours,
            charge,
        })
    }

    pub fn status(&self) -> StatusSnapshot {
        let slots = (1..=self.capacity)
            .map(|slot| SlotStatus {
                slot,
                occupant: self.occupancy.get(&slot).cloned(),
            })
            .collect();

        StatusSnapshot {
            capacity: self.capacity,
            slots,
        }
    }
}
