// Throttle/steering mixing limits
pub const THROTTLE_MIN: i32 = 0;
pub const THROTTLE_MAX: i32 = 100;
pub const STEER_MIN: i32 = -100; // -100 full left, +100 full right
pub const STEER_MAX: i32 = 100;

// Elevator servo travel
pub const ELEVATOR_MIN_DEG: i32 = 0;
pub const ELEVATOR_MAX_DEG: i32 = 180;
pub const ELEVATOR_CENTER_DEG: i32 = 90;

// Motor PWM, 20 kHz keeps the motor drivers above the audible range
pub const MOTOR_PWM_FREQUENCY_HZ: u32 = 20_000;
pub const MOTOR_PWM_RESOLUTION_BITS: u32 = 10;
pub const MOTOR_PWM_MAX: u32 = (1 << MOTOR_PWM_RESOLUTION_BITS) - 1;
