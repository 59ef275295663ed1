//! Renderers for the two output formats.
//!
//! [`TextRenderer`] writes the decorated console output; [`JsonRenderer`]
//! writes one JSON object per line for scripts.

use crate::core::command::Command;
use crate::domain::model::{Outcome, StatusSnapshot};
use crate::domain::ports::Renderer;
use crate::utils::error::{ParkingError, Result};
use serde_json::json;

const RULE_WIDTH: usize = 40;

/// `message` between two rows of `=`, padded by one space each side.
pub fn bordered(message: &str) -> String {
    let border = "=".repeat(message.chars().count() + 4);
    format!("\n{}\n {} \n{}", border, message, border)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn status(&self, snapshot: &StatusSnapshot) -> String {
        let mut text = bordered("Current Parking Status");

        if snapshot.is_empty() {
            text.push_str("\n🅿️  Parking lot is empty");
            return text;
        }

        text.push_str(&format!(
            "\n\n{:<10} | {:<15} | {:<10}\n",
            "Slot No.", "Registration", "Status"
        ));
        text.push_str(&"-".repeat(RULE_WIDTH));

        for slot in &snapshot.slots {
            let (registration, state) = match &slot.occupant {
                Some(vehicle_id) => (vehicle_id.as_str(), "Occupied"),
                None => ("-", "Available"),
            };
            text.push_str(&format!(
                "\n{:<10} | {:<15} | {:<10}",
                slot.slot, registration, state
            ));
        }

        text.push_str(&format!(
            "\n\nTotal Capacity: {} | Occupied: {} | Available: {}",
            snapshot.capacity,
            snapshot.occupied(),
            snapshot.available()
        ));
        text
    }
}

impl Renderer for TextRenderer {
    fn banner_start(&self, started_at: Option<&str>) -> String {
        let mut text = bordered("Parking Lot Management System");
        if let Some(at) = started_at {
            text.push_str(&format!("\nStarted at: {}", at));
        }
        text
    }

    fn banner_end(&self, finished_at: Option<&str>) -> String {
        let mut text = bordered("End of Operations");
        if let Some(at) = finished_at {
            text.push_str(&format!("\nFinished at: {}", at));
        }
        text
    }

    fn command_echo(&self, line: &str) -> String {
        format!("\n▶ Executing: {}\n{}", line, "-".repeat(RULE_WIDTH))
    }

    fn outcome(&self, outcome: &Outcome) -> Result<String> {
        let text = match outcome {
            Outcome::Created { capacity } => {
                format!("🎉 Created a parking lot with {} slots", capacity)
            }
            Outcome::Parked(receipt) => format!(
                "✅ Successfully allocated slot number: {} for car: {}",
                receipt.slot, receipt.vehicle_id
            ),
            Outcome::Left(receipt) => format!(
                "🚗 Car with registration number {} left from slot {}\n💰 Parking charge: ${} for {} hours",
                receipt.vehicle_id, receipt.slot, receipt.charge, receipt.hours
            ),
            Outcome::Status(snapshot) => self.status(snapshot),
            Outcome::Help => {
                let mut text = String::from("Available commands:");
                for usage in Command::usage() {
                    text.push_str("\n  ");
                    text.push_str(usage);
                }
                text
            }
        };
        Ok(text)
    }

    fn error(&self, error: &ParkingError) -> Result<String> {
        Ok(match error {
            ParkingError::LotFull => format!("🚫 {}", error.user_friendly_message()),
            other => format!("❌ {}", other.user_friendly_message()),
        })
    }

    fn prompt(&self) -> &str {
        "> "
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JsonRenderer {
    fn banner_start(&self, started_at: Option<&str>) -> String {
        json!({ "event": "session_started", "at": started_at }).to_string()
    }

    fn banner_end(&self, finished_at: Option<&str>) -> String {
        json!({ "event": "session_finished", "at": finished_at }).to_string()
    }

    fn command_echo(&self, _line: &str) -> String {
        String::new()
    }

    fn outcome(&self, outcome: &Outcome) -> Result<String> {
        Ok(serde_json::to_string(outcome)?)
    }

    fn error(&self, error: &ParkingError) -> Result<String> {
        Ok(json!({
            "event": "error",
            "kind": error.kind(),
            "message": error.user_friendly_message(),
        })
        .to_string())
    }

    fn prompt(&self) -> &str {
        ""
    }
}
