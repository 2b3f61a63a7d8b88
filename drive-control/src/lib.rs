//! Control-value pipeline for a two-motor differential drive with an
//! elevator servo: clamped control state, additive steering mix, duty-cycle
//! conversion, and the actuator that pushes the results to the outputs.

pub mod actuator;
pub mod constants;
pub mod mixing;
pub mod state;
