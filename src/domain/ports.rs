use crate::domain::model::Outcome;
use crate::utils::error::{ParkingError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Supplies raw command lines to the engine.
#[async_trait]
pub trait CommandSource: Send {
    /// Next line, or `None` at end of input.
    async fn next_line(&mut self) -> Result<Option<String>>;

    /// Interactive sources get a prompt and no command echo.
    fn is_interactive(&self) -> bool;
}

/// Turns session events into the text written to the output sink.
///
/// Every method returns the complete text to write, without a trailing
/// newline; an empty string writes nothing.
pub trait Renderer: Send + Sync {
    fn banner_start(&self, started_at: Option<&str>) -> String;
    fn banner_end(&self, finished_at: Option<&str>) -> String;
    fn command_echo(&self, line: &str) -> String;
    fn outcome(&self, outcome: &Outcome) -> Result<String>;
    fn error(&self, error: &ParkingError) -> Result<String>;
    fn prompt(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn initial_capacity(&self) -> Option<u32>;
    fn output_format(&self) -> OutputFormat;
    fn show_timestamps(&self) -> bool;
}
