//! Swimming: speed comes from pool laps rather than stroke count.

use super::{M_IN_KM, Result, Session, Workout, WorkoutKind, session::positive};

/// Distance covered by one stroke, in metres.
pub const STROKE_LENGTH_M: f64 = 1.38;

const SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

/// A swimming session.
///
/// Distance is counted in strokes, but mean speed is measured by laps
/// of the pool, so the two are independent.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Pool length must be finite and strictly positive.
    pub fn new(session: Session, pool_length_m: f64, pool_laps: u32) -> Result<Self> {
        Ok(Self {
            session,
            pool_length_m: positive(WorkoutKind::Swimming, "pool length", pool_length_m)?,
            pool_laps,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.session.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.session.weight_kg()
    }
}
