//! Running: distance from step count, calories from mean speed.

use super::{M_IN_KM, MIN_IN_HOUR, Session, Workout, WorkoutKind};

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SHIFT: f64 = 20.0;

/// A running session. Uses the shared distance and speed formulas.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (SPEED_MULTIPLIER * self.mean_speed_kmh() - SPEED_SHIFT) * self.session.weight_kg()
            / M_IN_KM
            * self.session.duration_hours()
            * MIN_IN_HOUR
    }
}
