//! Workout kinds and the sensor codes that name them.

use std::{fmt, str::FromStr};

use super::WorkoutError;

/// The closed set of workouts a sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Sensor code `RUN`.
    Running,

    /// Sensor code `WLK`.
    Walking,

    /// Sensor code `SWM`.
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::Walking];

    /// The sensor code for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// The name shown in reports.
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "Walking",
            Self::Swimming => "Swimming",
        }
    }

    /// How many positional values a sensor package for this kind carries.
    pub const fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>(), Ok(kind));
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        let err = "run".parse::<WorkoutKind>().unwrap_err();
        assert_eq!(err, WorkoutError::UnknownWorkoutType("run".to_string()));
    }

    #[test]
    fn rejects_unknown_code() {
        let err = "XYZ".parse::<WorkoutKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown workout type: \"XYZ\"");
    }
}
