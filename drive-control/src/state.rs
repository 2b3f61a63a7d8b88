use crate::constants::{
    ELEVATOR_CENTER_DEG, ELEVATOR_MAX_DEG, ELEVATOR_MIN_DEG, STEER_MAX, STEER_MIN, THROTTLE_MAX,
    THROTTLE_MIN,
};
use crate::mixing::clamp;

/// Last commanded control values. Every stored field lies inside its
/// domain; updates clamp on write, so readers never re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    pub throttle_pct: i32,
    pub steer_pct: i32,
    pub elevator_deg: i32,
}

/// A partial update. `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlUpdate {
    pub throttle: Option<i32>,
    pub steer: Option<i32>,
    pub elev: Option<i32>,
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState {
            throttle_pct: 0,
            steer_pct: 0,
            elevator_deg: ELEVATOR_CENTER_DEG,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite each present field with its clamped value. Never fails:
    /// out-of-range input snaps to the nearest domain boundary.
    pub fn apply_update(&mut self, update: &ControlUpdate) {
        if let Some(throttle) = update.throttle {
            self.throttle_pct = clamp(throttle, THROTTLE_MIN, THROTTLE_MAX);
        }
        if let Some(steer) = update.steer {
            self.steer_pct = clamp(steer, STEER_MIN, STEER_MAX);
        }
        if let Some(elev) = update.elev {
            self.elevator_deg = clamp(elev, ELEVATOR_MIN_DEG, ELEVATOR_MAX_DEG);
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "Throttle: {}%  |  Steer: {}  |  Elevator: {}°",
            self.throttle_pct, self.steer_pct, self.elevator_deg
        )
    }
}

impl ControlUpdate {
    /// Parse an HTTP query string such as `throttle=42&steer=-10&elev=90`.
    /// Unknown keys and values that fail to parse are skipped, leaving the
    /// field absent.
    pub fn from_query(query: &str) -> Self {
        let mut update = ControlUpdate::default();
        for param in query.split('&') {
            let mut parts = param.split('=');
            if let (Some(key), Some(value)) = (parts.next(), parts.next()) {
                if let Ok(parsed) = value.parse::<i32>() {
                    match key {
                        "throttle" => update.throttle = Some(parsed),
                        "steer" => update.steer = Some(parsed),
                        "elev" => update.elev = Some(parsed),
                        _ => {}
                    }
                }
            }
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_with_centered_elevator() {
        let state = ControlState::new();
        assert_eq!(state.throttle_pct, 0);
        assert_eq!(state.steer_pct, 0);
        assert_eq!(state.elevator_deg, 90);
    }

    #[test]
    fn fields_stay_in_domain_under_arbitrary_updates() {
        let mut state = ControlState::new();
        let inputs = [i32::MIN, -5000, -101, -1, 0, 50, 100, 101, 300, i32::MAX];
        for &throttle in &inputs {
            for &steer in &inputs {
                state.apply_update(&ControlUpdate {
                    throttle: Some(throttle),
                    steer: Some(steer),
                    elev: Some(throttle.wrapping_add(steer)),
                });
                assert!((0..=100).contains(&state.throttle_pct));
                assert!((-100..=100).contains(&state.steer_pct));
                assert!((0..=180).contains(&state.elevator_deg));
            }
        }
    }

    #[test]
    fn absent_fields_are_left_untouched() {
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            throttle: Some(40),
            steer: Some(-25),
            elev: Some(120),
        });

        state.apply_update(&ControlUpdate {
            throttle: Some(70),
            ..Default::default()
        });
        assert_eq!(state.throttle_pct, 70);
        assert_eq!(state.steer_pct, -25);
        assert_eq!(state.elevator_deg, 120);
    }

    #[test]
    fn overrange_throttle_clamps_to_full() {
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            throttle: Some(300),
            ..Default::default()
        });
        assert_eq!(state.throttle_pct, 100);
    }

    #[test]
    fn negative_elevator_clamps_and_sticks() {
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            elev: Some(-10),
            ..Default::default()
        });
        assert_eq!(state.elevator_deg, 0);

        // An update without the field must not reset it to the default.
        state.apply_update(&ControlUpdate::default());
        assert_eq!(state.elevator_deg, 0);
    }

    #[test]
    fn query_with_all_fields_parses() {
        let update = ControlUpdate::from_query("throttle=42&steer=-10&elev=135");
        assert_eq!(update.throttle, Some(42));
        assert_eq!(update.steer, Some(-10));
        assert_eq!(update.elev, Some(135));
    }

    #[test]
    fn unparseable_values_are_treated_as_absent() {
        let update = ControlUpdate::from_query("throttle=fast&steer=&elev=90");
        assert_eq!(update.throttle, None);
        assert_eq!(update.steer, None);
        assert_eq!(update.elev, Some(90));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let update = ControlUpdate::from_query("turbo=1&elev=45");
        assert_eq!(update, ControlUpdate {
            throttle: None,
            steer: None,
            elev: Some(45),
        });
    }

    #[test]
    fn empty_query_is_an_empty_update() {
        assert_eq!(ControlUpdate::from_query(""), ControlUpdate::default());
    }

    #[test]
    fn status_line_format_is_stable() {
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            throttle: Some(42),
            steer: Some(-10),
            elev: Some(135),
        });
        assert_eq!(
            state.status_line(),
            "Throttle: 42%  |  Steer: -10  |  Elevator: 135°"
        );
    }
}
