use crate::config::TomlConfig;
use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_capacity, validate_path, Validate};
use serde::Serialize;

#[cfg(feature = "cli")]
use crate::config::CliConfig;

/// Effective settings for one run: CLI flags over file values over defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub input: Option<String>,
    pub capacity: Option<u32>,
    pub format: OutputFormat,
    pub timestamps: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            capacity: None,
            format: OutputFormat::Text,
            timestamps: true,
            verbose: false,
            json_logs: false,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Self {
        Self {
            input: file.input_path().map(str::to_string),
            capacity: file.initial_capacity(),
            format: file.output_format(),
            timestamps: file.show_timestamps(),
            verbose: file.verbose(),
            json_logs: file.json_logs(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig, file: Option<&TomlConfig>) -> Self {
        let base = file.map(Self::from_toml).unwrap_or_default();

        Self {
            input: cli.input.clone().or(base.input),
            capacity: cli.capacity.or(base.capacity),
            format: cli.format.unwrap_or(base.format),
            timestamps: base.timestamps && !cli.no_timestamps,
            verbose: cli.verbose || base.verbose,
            json_logs: base.json_logs,
        }
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn initial_capacity(&self) -> Option<u32> {
        self.capacity
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }

    fn show_timestamps(&self) -> bool {
        self.timestamps
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(capacity) = self.capacity {
            validate_capacity("capacity", capacity)?;
        }
        Ok(())
    }
}
