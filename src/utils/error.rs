use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("Parking lot is full")]
    LotFull,

    #[error("Vehicle {vehicle_id} not found in the parking lot")]
    VehicleNotFound { vehicle_id: String },

    #[error("Vehicle {vehicle_id} is already parked in slot {slot}")]
    VehicleAlreadyParked { vehicle_id: String, slot: u32 },

    #[error("Parking lot not initialized")]
    LotUninitialized,

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Command '{command}' is missing argument <{argument}>")]
    MissingArgument { command: String, argument: String },

    #[error("Unknown command: {verb}")]
    UnknownCommand { verb: String },

    #[error("Session already closed")]
    SessionClosed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Allocation,
    Input,
    Session,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ParkingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LotFull | Self::VehicleNotFound { .. } | Self::VehicleAlreadyParked { .. } => {
                ErrorCategory::Allocation
            }
            Self::InvalidInput { .. }
            | Self::MissingArgument { .. }
            | Self::UnknownCommand { .. } => ErrorCategory::Input,
            Self::LotUninitialized | Self::SessionClosed => ErrorCategory::Session,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Allocation => ErrorSeverity::Low,
            ErrorCategory::Session if matches!(self, Self::SessionClosed) => ErrorSeverity::Low,
            ErrorCategory::Input | ErrorCategory::Session => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Command-level errors are reported and the session carries on.
    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    /// Stable snake_case identifier, used by the JSON renderer.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LotFull => "lot_full",
            Self::VehicleNotFound { .. } => "vehicle_not_found",
            Self::VehicleAlreadyParked { .. } => "vehicle_already_parked",
            Self::LotUninitialized => "lot_uninitialized",
            Self::InvalidInput { .. } => "invalid_input",
            Self::MissingArgument { .. } => "missing_argument",
            Self::UnknownCommand { .. } => "unknown_command",
            Self::SessionClosed => "session_closed",
            Self::ConfigError { .. } => "config_error",
            Self::InvalidConfigValueError { .. } => "invalid_config_value",
            Self::ConfigValidationError { .. } => "config_validation",
            Self::IoError(_) => "io_error",
            Self::SerializationError(_) => "serialization_error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::LotFull => "Sorry, parking lot is full".to_string(),
            Self::VehicleNotFound { vehicle_id } => {
                format!("Registration number {} not found in the parking lot", vehicle_id)
            }
            Self::VehicleAlreadyParked { vehicle_id, slot } => format!(
                "Car with registration number {} is already parked at slot {}",
                vehicle_id, slot
            ),
            Self::LotUninitialized => "Parking lot not initialized".to_string(),
            Self::InvalidInput { field, value, reason } => {
                format!("Invalid {} '{}': {}", field, value, reason)
            }
            Self::MissingArgument { command, argument } => {
                format!("Missing <{}> for command '{}'", argument, command)
            }
            Self::UnknownCommand { verb } => format!("Unknown command '{}'", verb),
            Self::SessionClosed => "Session is closed".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("Setting {} has invalid value '{}': {}", field, value, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Could not read configuration ({}): {}", field, message)
            }
            Self::IoError(e) => format!("Could not read or write data: {}", e),
            Self::SerializationError(e) => format!("Could not encode output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::LotFull => "Wait for a vehicle to leave, or create a larger lot",
            Self::VehicleNotFound { .. } => "Check the registration number with `status`",
            Self::VehicleAlreadyParked { .. } => "A vehicle must leave before it can park again",
            Self::LotUninitialized => "Run `create_parking_lot <capacity>` first",
            Self::InvalidInput { .. } => "Use a non-negative whole number",
            Self::MissingArgument { .. } | Self::UnknownCommand { .. } => {
                "Type `help` to list the available commands"
            }
            Self::SessionClosed => "Start a new session",
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => "Fix the configuration file or CLI flags",
            Self::IoError(_) => "Check that the input file exists and is readable",
            Self::SerializationError(_) => "Report this as a bug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_errors_are_recoverable() {
        assert!(ParkingError::LotFull.is_recoverable());
        assert!(ParkingError::VehicleNotFound {
            vehicle_id: "KA-01".to_string()
        }
        .is_recoverable());
        assert_eq!(ParkingError::LotFull.category(), ErrorCategory::Allocation);
    }

    #[test]
    fn test_driver_errors_are_medium() {
        assert_eq!(ParkingError::LotUninitialized.severity(), ErrorSeverity::Medium);
        let err = ParkingError::UnknownCommand {
            verb: "fly".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_system_errors_are_fatal() {
        let err = ParkingError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());
        assert_eq!(err.kind(), "io_error");
    }

    #[test]
    fn test_user_friendly_messages_match_console_wording() {
        assert_eq!(
            ParkingError::LotFull.user_friendly_message(),
            "Sorry, parking lot is full"
        );
        assert_eq!(
            ParkingError::VehicleNotFound {
                vehicle_id: "KA-01-HH-9999".to_string()
            }
            .user_friendly_message(),
            "Registration number KA-01-HH-9999 not found in the parking lot"
        );
    }
}
