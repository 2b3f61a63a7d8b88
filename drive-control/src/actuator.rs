use crate::constants::{ELEVATOR_MAX_DEG, ELEVATOR_MIN_DEG};
use crate::mixing::{clamp, mix_drive};
use crate::state::ControlState;

/// Receiver for a raw PWM duty-cycle value.
pub trait DutyCycleSink {
    fn write_duty(&mut self, duty: u32);
}

/// Receiver for an absolute servo angle in degrees.
pub trait AngleSink {
    fn write_angle(&mut self, angle_deg: i32);
}

/// Sole writer of the physical output channels. Translates a `ControlState`
/// into two motor duties and a servo angle; holds no state of its own, so
/// outputs are a pure function of the state it is handed.
pub struct Actuator<L, R, S> {
    left_motor: L,
    right_motor: R,
    elevator: S,
}

impl<L, R, S> Actuator<L, R, S>
where
    L: DutyCycleSink,
    R: DutyCycleSink,
    S: AngleSink,
{
    pub fn new(left_motor: L, right_motor: R, elevator: S) -> Self {
        Actuator {
            left_motor,
            right_motor,
            elevator,
        }
    }

    /// Recompute and emit every output channel. Must run after each state
    /// mutation so the outputs never go stale relative to the state.
    pub fn apply(&mut self, state: &ControlState) {
        let duty = mix_drive(state.throttle_pct, state.steer_pct);
        let angle_deg = clamp(state.elevator_deg, ELEVATOR_MIN_DEG, ELEVATOR_MAX_DEG);

        log::debug!(
            "apply left={} right={} elevator={}",
            duty.left,
            duty.right,
            angle_deg
        );

        self.left_motor.write_duty(duty.left);
        self.right_motor.write_duty(duty.right);
        self.elevator.write_angle(angle_deg);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::constants::MOTOR_PWM_MAX;
    use crate::mixing::percent_to_duty;
    use crate::state::ControlUpdate;

    /// Recording stand-ins for the LEDC channels.
    #[derive(Clone, Default)]
    struct RecordingDuty(Rc<Cell<u32>>);

    impl DutyCycleSink for RecordingDuty {
        fn write_duty(&mut self, duty: u32) {
            self.0.set(duty);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingAngle(Rc<Cell<i32>>);

    impl AngleSink for RecordingAngle {
        fn write_angle(&mut self, angle_deg: i32) {
            self.0.set(angle_deg);
        }
    }

    fn rig() -> (
        Actuator<RecordingDuty, RecordingDuty, RecordingAngle>,
        RecordingDuty,
        RecordingDuty,
        RecordingAngle,
    ) {
        let left = RecordingDuty::default();
        let right = RecordingDuty::default();
        let servo = RecordingAngle::default();
        let actuator = Actuator::new(left.clone(), right.clone(), servo.clone());
        (actuator, left, right, servo)
    }

    #[test]
    fn priming_with_the_default_state_zeroes_the_motors() {
        let (mut actuator, left, right, servo) = rig();
        servo.0.set(-1);

        actuator.apply(&ControlState::new());
        assert_eq!(left.0.get(), 0);
        assert_eq!(right.0.get(), 0);
        assert_eq!(servo.0.get(), 90);
    }

    #[test]
    fn straight_drive_produces_equal_duties() {
        let (mut actuator, left, right, servo) = rig();
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            throttle: Some(50),
            steer: Some(0),
            elev: Some(90),
        });

        actuator.apply(&state);
        assert_eq!(left.0.get(), right.0.get());
        assert_eq!(left.0.get(), percent_to_duty(50));
        assert_eq!(servo.0.get(), 90);
    }

    #[test]
    fn right_turn_saturates_the_right_motor() {
        let (mut actuator, left, right, _servo) = rig();
        let mut state = ControlState::new();
        state.apply_update(&ControlUpdate {
            throttle: Some(60),
            steer: Some(40),
            ..Default::default()
        });

        actuator.apply(&state);
        assert_eq!(left.0.get(), percent_to_duty(20));
        assert_eq!(right.0.get(), MOTOR_PWM_MAX);
    }

    #[test]
    fn elevator_follows_the_state_through_partial_updates() {
        let (mut actuator, _left, _right, servo) = rig();
        let mut state = ControlState::new();

        state.apply_update(&ControlUpdate {
            elev: Some(-10),
            ..Default::default()
        });
        actuator.apply(&state);
        assert_eq!(servo.0.get(), 0);

        state.apply_update(&ControlUpdate {
            throttle: Some(30),
            ..Default::default()
        });
        actuator.apply(&state);
        assert_eq!(servo.0.get(), 0);
    }
}
