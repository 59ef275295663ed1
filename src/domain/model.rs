use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkReceipt {
    pub slot: u32,
    pub vehicle_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveReceipt {
    pub slot: u32,
    pub vehicle_id: String,
    pub hours: u32,
    pub charge: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub slot: u32,
    pub occupant: Option<String>,
}

impl SlotStatus {
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// Every slot of a lot in ascending order, free ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub capacity: u32,
    pub slots: Vec<SlotStatus>,
}

impl StatusSnapshot {
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn available(&self) -> usize {
        self.slots.len() - self.occupied()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }
}

/// Result of one successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Outcome {
    Created { capacity: u32 },
    Parked(ParkReceipt),
    Left(LeaveReceipt),
    Status(StatusSnapshot),
    Help,
}
