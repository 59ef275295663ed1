use crate::core::command::Command;
use crate::domain::lot::ParkingLot;
use crate::domain::model::Outcome;
use crate::utils::error::{ParkingError, Result};

/// One driver session. Owns at most one active lot.
#[derive(Debug, Default)]
pub struct Session {
    lot: Option<ParkingLot>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self {
            lot: Some(ParkingLot::new(capacity)),
        }
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.lot.is_some()
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Create { capacity } => {
                if let Some(previous) = self.lot.replace(ParkingLot::new(capacity)) {
                    tracing::info!(
                        "Replacing lot of {} slots ({} occupied) with a new lot of {} slots",
                        previous.capacity(),
                        previous.occupied(),
                        capacity
                    );
                }
                Ok(Outcome::Created { capacity })
            }
            Command::Park { vehicle_id } => self.lot_mut()?.park(vehicle_id).map(Outcome::Parked),
            Command::Leave { vehicle_id, hours } => self
                .lot_mut()?
                .leave(&vehicle_id, hours)
                .map(Outcome::Left),
            Command::Status => Ok(Outcome::Status(self.lot_ref()?.status())),
            Command::Help => Ok(Outcome::Help),
            Command::Exit => Err(ParkingError::SessionClosed),
        }
    }

    fn lot_ref(&self) -> Result<&ParkingLot> {
        self.lot.as_ref().ok_or(ParkingError::LotUninitialized)
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLot> {
        self.lot.as_mut().ok_or(ParkingError::LotUninitialized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(vehicle_id: &str) -> Command {
        Command::Park {
            vehicle_id: vehicle_id.to_string(),
        }
    }

    #[test]
    fn test_commands_before_create_are_rejected() {
        let mut session = Session::new();

        for command in [
            park("A"),
            Command::Leave {
                vehicle_id: "A".to_string(),
                hours: 1,
            },
            Command::Status,
        ] {
            assert!(matches!(
                session.execute(command),
                Err(ParkingError::LotUninitialized)
            ));
        }
        assert!(!session.is_initialized());
    }

    #[test]
    fn test_create_replaces_existing_lot() {
        let mut session = Session::with_capacity(2);
        session.execute(park("A")).unwrap();

        let outcome = session.execute(Command::Create { capacity: 5 }).unwrap();
        assert_eq!(outcome, Outcome::Created { capacity: 5 });

        let lot = session.lot().unwrap();
        assert_eq!(lot.capacity(), 5);
        assert!(lot.is_empty());
    }

    #[test]
    fn test_errors_do_not_disturb_state() {
        let mut session = Session::with_capacity(1);
        session.execute(park("A")).unwrap();

        assert!(session.execute(park("B")).is_err());
        assert!(session
            .execute(Command::Leave {
                vehicle_id: "Z".to_string(),
                hours: 3
            })
            .is_err());

        assert_eq!(session.lot().unwrap().slot_of("A"), Some(1));
        assert_eq!(session.lot().unwrap().occupied(), 1);
    }

    #[test]
    fn test_exit_reports_closed_session() {
        let mut session = Session::with_capacity(1);
        assert!(matches!(
            session.execute(Command::Exit),
            Err(ParkingError::SessionClosed)
        ));
        assert!(session.is_initialized());
    }
}
