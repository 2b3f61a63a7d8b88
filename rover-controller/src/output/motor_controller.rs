use esp_idf_svc::hal::ledc::{LedcChannel, LedcTimer};
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::hal::{
    gpio::IOPin,
    ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution},
};
use esp_idf_svc::sys::EspError;

use drive_control::actuator::DutyCycleSink;
use drive_control::constants::MOTOR_PWM_FREQUENCY_HZ;

pub struct MotorConfig<TPin, TTimer, TChannel>
where
    TPin: Peripheral + 'static,
    TTimer: Peripheral + 'static,
    TChannel: Peripheral + 'static,
{
    pub pin: TPin,
    pub timer: TTimer,
    pub channel: TChannel,
}

/// One LEDC channel driving one side of the differential pair. Duty values
/// arrive pre-scaled to the timer resolution.
pub struct MotorController {
    motor_driver: LedcDriver<'static>,
}

impl MotorController {
    pub fn new<C: LedcChannel, T: LedcTimer>(
        motor_config: MotorConfig<impl IOPin, impl Peripheral<P = T>, impl Peripheral<P = C>>,
    ) -> Result<Self, EspError> {
        let config = TimerConfig::default()
            .frequency(MOTOR_PWM_FREQUENCY_HZ.Hz().into())
            .resolution(Resolution::Bits10);

        let timer_driver = LedcTimerDriver::new(motor_config.timer, &config)?;
        let mut driver = LedcDriver::new(motor_config.channel, timer_driver, motor_config.pin)?;
        driver.set_duty(0)?;

        Ok(MotorController {
            motor_driver: driver,
        })
    }
}

impl DutyCycleSink for MotorController {
    fn write_duty(&mut self, duty: u32) {
        if let Err(error) = self.motor_driver.set_duty(duty) {
            log::warn!("Motor duty write failed ({}): {}", duty, error);
        }
    }
}
