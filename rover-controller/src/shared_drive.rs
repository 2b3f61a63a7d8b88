use drive_control::state::{ControlState, ControlUpdate};

use crate::output::RoverActuator;

/// The control state and its actuator, shared with the HTTP handlers. Keeps
/// the two joined so every state mutation is followed by a recompute of the
/// physical outputs.
pub struct SharedDrive {
    state: ControlState,
    actuator: RoverActuator,
}

impl SharedDrive {
    pub fn new(actuator: RoverActuator) -> Self {
        SharedDrive {
            state: ControlState::new(),
            actuator,
        }
    }

    /// Push the current state to the output channels. Called once at boot so
    /// they sit at defined levels before the first request is accepted.
    pub fn prime(&mut self) {
        self.actuator.apply(&self.state);
    }

    /// Apply a partial update, re-actuate, and report the resulting state.
    pub fn handle_update(&mut self, update: &ControlUpdate) -> String {
        self.state.apply_update(update);
        self.actuator.apply(&self.state);
        self.state.status_line()
    }
}
