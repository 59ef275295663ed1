pub mod command;
pub mod engine;
pub mod session;

pub use crate::domain::lot::ParkingLot;
pub use crate::domain::model::{LeaveReceipt, Outcome, ParkReceipt, SlotStatus, StatusSnapshot};
pub use crate::domain::ports::{CommandSource, ConfigProvider, OutputFormat, Renderer};
pub use crate::utils::error::Result;
