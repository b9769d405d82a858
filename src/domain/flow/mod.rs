//! Flow module - screen state machine driving one training session.

mod controller;
mod errors;
mod screen;

pub use controller::FlowController;
pub use errors::FlowError;
pub use screen::{ActiveAttempt, Screen, ScreenKind};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
