//! Platform abstraction layer
//!
//! Turns browser events (or a scripted driver) into the two movement intents
//! the simulation reads each frame.

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{Direction, InputState};
