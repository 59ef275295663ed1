use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::{validate_capacity, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub session: SessionConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lot created before the first command.
    pub capacity: Option<u32>,
    /// Command file used when none is given on the command line.
    pub input: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub timestamps: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ParkingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOT_CAPACITY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ParkingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(capacity) = self.session.capacity {
            validate_capacity("session.capacity", capacity)?;
        }
        if let Some(input) = &self.session.input {
            validate_path("session.input", input)?;
        }
        Ok(())
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.session.input.as_deref()
    }

    fn initial_capacity(&self) -> Option<u32> {
        self.session.capacity
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn show_timestamps(&self) -> bool {
        self.output.timestamps.unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[session]
capacity = 6
input = "commands.txt"

[output]
format = "json"
timestamps = false

[logging]
verbose = true
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.initial_capacity(), Some(6));
        assert_eq!(config.input_path(), Some("commands.txt"));
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!config.show_timestamps());
        assert!(config.verbose());
        assert!(config.json_logs());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.initial_capacity(), None);
        assert_eq!(config.input_path(), None);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.show_timestamps());
        assert!(!config.verbose());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PARKING_TEST_CAPACITY", "12");

        let config = TomlConfig::from_toml_str(
            r#"
[session]
capacity = ${PARKING_TEST_CAPACITY}
"#,
        )
        .unwrap();
        assert_eq!(config.initial_capacity(), Some(12));

        std::env::remove_var("PARKING_TEST_CAPACITY");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = TomlConfig::from_toml_str(
            r#"
[output]
format = "xml"
"#,
        );
        assert!(matches!(
            result,
            Err(ParkingError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[session]
capacity = 500000
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ParkingError::InvalidConfigValueError { ref field, .. }) if field == "session.capacity"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[session]\ncapacity = 3").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.initial_capacity(), Some(3));
    }
}
