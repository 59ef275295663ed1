pub mod settings;
pub mod toml_config;

pub use settings::Settings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, OutputFormat};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "parking-lot")]
#[command(about = "Parking lot management system")]
pub struct CliConfig {
    /// Command file to run; omit it for an interactive prompt
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Create a lot with this many slots before the first command
    #[arg(long)]
    pub capacity: Option<u32>,

    /// Leave start/finish timestamps out of the banners
    #[arg(long)]
    pub no_timestamps: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn initial_capacity(&self) -> Option<u32> {
        self.capacity
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn show_timestamps(&self) -> bool {
        !self.no_timestamps
    }
}
