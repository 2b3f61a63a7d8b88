pub mod elevator_servo;
pub mod motor_controller;

use esp_idf_svc::hal::ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::sys::EspError;

use drive_control::actuator::Actuator;

use self::elevator_servo::{ElevatorServo, SERVO_PWM_FREQUENCY_HZ};
use self::motor_controller::{MotorConfig, MotorController};

pub type RoverActuator = Actuator<MotorController, MotorController, ElevatorServo>;

/// Wire the drive motors and the elevator servo to their pins, timers and
/// LEDC channels.
pub fn build_actuator(peripherals: &mut Peripherals) -> Result<RoverActuator, EspError> {
    let left_motor = MotorController::new(MotorConfig {
        pin: unsafe { peripherals.pins.gpio13.clone_unchecked() },
        channel: unsafe { peripherals.ledc.channel0.clone_unchecked() },
        timer: unsafe { peripherals.ledc.timer0.clone_unchecked() },
    })?;
    let right_motor = MotorController::new(MotorConfig {
        pin: unsafe { peripherals.pins.gpio12.clone_unchecked() },
        channel: unsafe { peripherals.ledc.channel1.clone_unchecked() },
        timer: unsafe { peripherals.ledc.timer0.clone_unchecked() },
    })?;

    let servo_timer = LedcTimerDriver::new(
        unsafe { peripherals.ledc.timer1.clone_unchecked() },
        &TimerConfig::default()
            .frequency(SERVO_PWM_FREQUENCY_HZ.Hz().into())
            .resolution(Resolution::Bits14),
    )?;
    let servo_driver = LedcDriver::new(
        unsafe { peripherals.ledc.channel2.clone_unchecked() },
        servo_timer,
        unsafe { peripherals.pins.gpio14.clone_unchecked() },
    )?;
    let elevator = ElevatorServo::new(servo_driver)?;

    Ok(Actuator::new(left_motor, right_motor, elevator))
}
