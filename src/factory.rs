//! Turning raw sensor packages into workouts.
//!
//! A package is a type code plus the positional values the sensor
//! recorded. The code selects the workout kind; the kind fixes how many
//! values must follow and what each one means:
//!
//! - `RUN`: actions, duration (h), weight (kg)
//! - `WLK`: actions, duration (h), weight (kg), height (cm)
//! - `SWM`: actions, duration (h), weight (kg), pool length (m), pool laps

use tracing::debug;

use crate::model::{
    Result, Running, Session, Swimming, Walking, Workout, WorkoutError, WorkoutKind, count,
};

/// Build the workout a sensor package describes.
///
/// Fails with [`WorkoutError::UnknownWorkoutType`] for codes outside the
/// known set, [`WorkoutError::ArityMismatch`] when the number of values
/// does not match the kind, and [`WorkoutError::InvalidArgument`] when a
/// value breaks a field's constraints.
pub fn build(type_code: &str, args: &[f64]) -> Result<Box<dyn Workout>> {
    let kind: WorkoutKind = type_code.parse()?;
    debug!(code = type_code, %kind, values = args.len(), "building workout");
    build_kind(kind, args)
}

/// Build a workout of an already-resolved kind.
pub fn build_kind(kind: WorkoutKind, args: &[f64]) -> Result<Box<dyn Workout>> {
    if args.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: args.len(),
        });
    }

    let session = Session::new(kind, count(kind, "actions", args[0])?, args[1], args[2])?;

    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => Box::new(Running::new(session)),
        WorkoutKind::Walking => Box::new(Walking::new(session, args[3])?),
        WorkoutKind::Swimming => Box::new(Swimming::new(
            session,
            args[3],
            count(kind, "pool laps", args[4])?,
        )?),
    };
    Ok(workout)
}
