//! Workout records: what a finished computation hands to the formatter.

use serde::Serialize;

/// An immutable snapshot of one session's inputs and derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Display name of the workout kind (e.g. "Running").
    pub type_name: String,

    pub duration_hours: f64,

    pub distance_km: f64,

    pub mean_speed_kmh: f64,

    /// Energy spent, in kilocalories.
    pub calories: f64,
}
