//! Workout metrics from raw sensor packages.
//!
//! ```
//! use workout::{Workout, build, format_record};
//!
//! let run = build("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(
//!     format_record(&run.report()),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
//! );
//! ```

pub mod factory;
pub mod format;
pub mod model;

pub use factory::{build, build_kind};
pub use format::{format_record, format_record_json};
pub use model::{Workout, WorkoutError, WorkoutKind, WorkoutRecord};
