use crate::utils::error::{ParkingError, Result};
use crate::utils::validation::MAX_CAPACITY;
use std::fmt;

pub const CREATE: &str = "create_parking_lot";
pub const PARK: &str = "park";
pub const LEAVE: &str = "leave";
pub const STATUS: &str = "status";
pub const HELP: &str = "help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { capacity: u32 },
    Park { vehicle_id: String },
    Leave { vehicle_id: String, hours: u32 },
    Status,
    Help,
    Exit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Blank lines and `#` comments yield `Ok(None)`. Tokens beyond the
    /// ones a verb needs are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(None);
        };
        if verb.starts_with('#') {
            return Ok(None);
        }

        let command = match verb {
            CREATE => {
                let raw = required(&mut tokens, verb, "capacity")?;
                Command::Create {
                    capacity: parse_capacity(raw)?,
                }
            }
            PARK => Command::Park {
                vehicle_id: required(&mut tokens, verb, "vehicle_id")?.to_string(),
            },
            LEAVE => {
                let vehicle_id = required(&mut tokens, verb, "vehicle_id")?.to_string();
                let raw = required(&mut tokens, verb, "hours")?;
                Command::Leave {
                    vehicle_id,
                    hours: parse_count("hours", raw)?,
                }
            }
            STATUS => Command::Status,
            HELP => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => {
                return Err(ParkingError::UnknownCommand {
                    verb: other.to_string(),
                })
            }
        };

        Ok(Some(command))
    }

    /// One line per verb, as shown by `help`.
    pub fn usage() -> &'static [&'static str] {
        &[
            "create_parking_lot <capacity>",
            "park <vehicle_id>",
            "leave <vehicle_id> <hours>",
            "status",
            "help",
            "exit",
        ]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create { capacity } => write!(f, "{} {}", CREATE, capacity),
            Command::Park { vehicle_id } => write!(f, "{} {}", PARK, vehicle_id),
            Command::Leave { vehicle_id, hours } => {
                write!(f, "{} {} {}", LEAVE, vehicle_id, hours)
            }
            Command::Status => f.write_str(STATUS),
            Command::Help => f.write_str(HELP),
            Command::Exit => f.write_str("exit"),
        }
    }
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &str,
    argument: &str,
) -> Result<&'a str> {
    tokens.next().ok_or_else(|| ParkingError::MissingArgument {
        command: command.to_string(),
        argument: argument.to_string(),
    })
}

fn parse_capacity(raw: &str) -> Result<u32> {
    let capacity = parse_count("capacity", raw)?;
    if capacity > MAX_CAPACITY {
        return Err(ParkingError::InvalidInput {
            field: "capacity".to_string(),
            value: raw.to_string(),
            reason: format!("must be at most {}", MAX_CAPACITY),
        });
    }
    Ok(capacity)
}

fn parse_count(field: &str, raw: &str) -> Result<u32> {
    raw.parse::<u32>().map_err(|e| {
        let negative = raw
            .strip_prefix('-')
            .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
        let reason = if negative {
            "must not be negative".to_string()
        } else {
            format!("not a whole number ({})", e)
        };
        ParkingError::InvalidInput {
            field: field.to_string(),
            value: raw.to_string(),
            reason,
        }
    })
}
