//! Rendering workout records for display.

use crate::model::WorkoutRecord;

/// Format a record as a single human-readable line.
///
/// Numeric fields are rendered with exactly three decimal places.
pub fn format_record(record: &WorkoutRecord) -> String {
    format!(
        "Тип тренировки: {}; \
         Длительность: {:.3} ч.; \
         Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; \
         Потрачено ккал: {:.3}.",
        record.type_name,
        record.duration_hours,
        record.distance_km,
        record.mean_speed_kmh,
        record.calories,
    )
}

/// Format a record as a single line of JSON.
pub fn format_record_json(record: &WorkoutRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(record)
}
