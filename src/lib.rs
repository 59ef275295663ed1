pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{JsonRenderer, LineSource, TextRenderer};
pub use config::{Settings, TomlConfig};
pub use crate::core::{command::Command, engine::ParkingEngine, session::Session};
pub use domain::{fee::charge, lot::ParkingLot};
pub use utils::error::{ParkingError, Result};
