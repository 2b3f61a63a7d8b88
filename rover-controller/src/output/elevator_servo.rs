use esp_idf_svc::hal::ledc::LedcDriver;
use esp_idf_svc::sys::EspError;

use drive_control::actuator::AngleSink;
use drive_control::constants::{ELEVATOR_MAX_DEG, ELEVATOR_MIN_DEG};
use drive_control::mixing::clamp;

/// SG90-class servo PWM parameters.
pub const SERVO_PWM_FREQUENCY_HZ: u32 = 50;
const MIN_PULSE_US: u32 = 500; // 0° position
const MAX_PULSE_US: u32 = 2400; // 180° position
const PERIOD_US: u32 = 20_000; // 50 Hz

/// Elevator servo wrapping an LEDC channel.
pub struct ElevatorServo {
    ledc: LedcDriver<'static>,
    max_duty: u32,
}

impl ElevatorServo {
    pub fn new(ledc: LedcDriver<'static>) -> Result<Self, EspError> {
        let max_duty = ledc.get_max_duty();
        Ok(ElevatorServo { ledc, max_duty })
    }

    /// Convert an in-range angle to an LEDC duty via the pulse width.
    fn angle_to_duty(&self, angle_deg: u32) -> u32 {
        let pulse_us =
            MIN_PULSE_US + angle_deg * (MAX_PULSE_US - MIN_PULSE_US) / ELEVATOR_MAX_DEG as u32;
        pulse_us * self.max_duty / PERIOD_US
    }
}

impl AngleSink for ElevatorServo {
    fn write_angle(&mut self, angle_deg: i32) {
        let angle = clamp(angle_deg, ELEVATOR_MIN_DEG, ELEVATOR_MAX_DEG) as u32;
        let duty = self.angle_to_duty(angle);
        if let Err(error) = self.ledc.set_duty(duty) {
            log::warn!("Elevator duty write failed ({}): {}", duty, error);
        }
    }
}
