//! Session inputs shared by every workout kind, and the checks that guard them.

use super::{Result, WorkoutError, WorkoutKind};

/// Raw inputs every workout kind carries.
///
/// Fields are private: a `Session` only exists once its values have passed
/// validation, and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Session {
    /// Validate and assemble the shared inputs for a workout of `kind`.
    ///
    /// Duration and weight must be finite and strictly positive.
    pub fn new(
        kind: WorkoutKind,
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: positive(kind, "duration", duration_hours)?,
            weight_kg: positive(kind, "weight", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn positive(kind: WorkoutKind, field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(invalid(kind, field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(invalid(kind, field, value, "must be positive"));
    }
    Ok(value)
}

/// Require a whole, non-negative value that fits a counter.
pub(crate) fn count(kind: WorkoutKind, field: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() {
        return Err(invalid(kind, field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(invalid(kind, field, value, "must not be negative"));
    }
    if value.fract() != 0.0 {
        return Err(invalid(kind, field, value, "must be a whole number"));
    }
    if value > f64::from(u32::MAX) {
        return Err(invalid(kind, field, value, "is out of range"));
    }
    Ok(value as u32)
}

fn invalid(
    kind: WorkoutKind,
    field: &'static str,
    value: f64,
    reason: &'static str,
) -> WorkoutError {
    WorkoutError::InvalidArgument {
        kind,
        field,
        value,
        reason,
    }
}
