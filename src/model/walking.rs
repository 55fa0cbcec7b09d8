//! Sports walking: like running, but calories also depend on height.

use super::{MIN_IN_HOUR, Result, Session, Workout, WorkoutKind, session::positive};

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A walking session. Uses the shared distance and speed formulas.
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    session: Session,
    height_cm: f64,
}

impl Walking {
    /// Height must be finite and strictly positive.
    pub fn new(session: Session, height_cm: f64) -> Result<Self> {
        Ok(Self {
            session,
            height_cm: positive(WorkoutKind::Walking, "height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Workout for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg();
        // Only whole multiples of the height contribute.
        let speed_ratio = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);

        (WEIGHT_MULTIPLIER * weight + speed_ratio * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_hours()
            * MIN_IN_HOUR
    }
}

/// Floor division built from the remainder, not from the rounded quotient.
///
/// `a / b` can round up to a whole number when the exact quotient sits just
/// below it (`1.0 / 0.1` is `10.0`); deriving the quotient from `a % b`
/// keeps it at `9.0`.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{WorkoutError, assert_close};

    fn walking(actions: u32, hours: f64, weight: f64, height: f64) -> Walking {
        let session = Session::new(WorkoutKind::Walking, actions, hours, weight).unwrap();
        Walking::new(session, height).unwrap()
    }

    #[test]
    fn sample_session() {
        let walk = walking(9000, 1.0, 75.0, 180.0);
        assert_close(walk.distance_km(), 5.85);
        assert_close(walk.mean_speed_kmh(), 5.85);
        // 5.85^2 = 34.2225, floored against 180 gives 0.
        assert_close(walk.spent_calories(), 157.5);
    }

    #[test]
    fn speed_term_is_floored() {
        // 20000 steps in 1h: 13 km/h, 13^2 = 169, 169 // 50 = 3 (not 3.38).
        let walk = walking(20000, 1.0, 60.0, 50.0);
        assert_close(walk.mean_speed_kmh(), 13.0);
        let expected = (0.035 * 60.0 + 3.0 * 0.029 * 60.0) * 60.0;
        assert_close(walk.spent_calories(), expected);
    }

    #[test]
    fn floor_division_uses_the_remainder() {
        assert_eq!(floor_div(1.0, 0.1), 9.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(169.0, 50.0), 3.0);
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
    }

    #[test]
    fn quotient_just_below_a_whole_number_is_floored() {
        // 0.65 km in 0.65 h: speed 1.0, and 1.0 // 0.1 is 9 (not 10).
        let walk = walking(1000, 0.65, 75.0, 0.1);
        assert_eq!(walk.height_cm(), 0.1);
        assert_close(walk.mean_speed_kmh(), 1.0);
        let expected = (0.035 * 75.0 + 9.0 * 0.029 * 75.0) * 0.65 * 60.0;
        assert_close(walk.spent_calories(), expected);
        assert_close(walk.spent_calories(), 865.8);
    }

    #[test]
    fn rejects_zero_height() {
        let session = Session::new(WorkoutKind::Walking, 9000, 1.0, 75.0).unwrap();
        let err = Walking::new(session, 0.0).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidArgument {
                field: "height",
                ..
            }
        ));
    }

    #[test]
    fn report_uses_walking_name() {
        let record = walking(9000, 1.0, 75.0, 180.0).report();
        assert_eq!(record.type_name, "Walking");
        assert_close(record.calories, 157.5);
    }
}
