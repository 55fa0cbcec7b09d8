//! Core data model for workout reports.
//!
//! A workout session is captured by a [`Session`] (the inputs every kind
//! shares) wrapped in one of the concrete kinds: [`Running`], [`Walking`]
//! and [`Swimming`]. Each kind implements [`Workout`], which supplies the
//! shared distance and speed formulas and requires a calorie formula.

mod kind;
mod record;
mod running;
mod session;
mod swimming;
mod walking;

pub use kind::WorkoutKind;
pub use record::WorkoutRecord;
pub use running::Running;
pub use session::Session;
pub(crate) use session::count;
pub use swimming::Swimming;
pub use walking::Walking;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Length of one step in metres, used by walking and running.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Errors raised while turning raw sensor values into a workout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    #[error("{kind} takes {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind}: invalid {field} {value}: {reason}")]
    InvalidArgument {
        kind: WorkoutKind,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, WorkoutError>;

/// A single workout session and the formulas that summarize it.
///
/// Distance and mean speed have defaults derived from the session's action
/// count. Calories have no default: every kind brings its own formula.
pub trait Workout {
    /// Which kind of workout this is.
    fn kind(&self) -> WorkoutKind;

    /// The inputs shared by every kind.
    fn session(&self) -> &Session;

    /// Distance covered by one action (step or stroke), in metres.
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered, in kilometres.
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action_count()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the whole session, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours()
    }

    /// Energy spent, in kilocalories.
    fn spent_calories(&self) -> f64;

    /// Snapshot the session and its derived metrics.
    fn report(&self) -> WorkoutRecord {
        WorkoutRecord {
            type_name: self.kind().type_name().to_string(),
            duration_hours: self.session().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
