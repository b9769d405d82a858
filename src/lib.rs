//! Summit Trainer - scenario-based AI adoption training
//!
//! A learner picks a challenge, designs an AI use case, declares a deployment
//! ambition with safeguards and receives a readiness score with itemized
//! feedback. This crate implements the decision flow state machine, the
//! decision accumulator, the scoring engine and the session history.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::{StateSnapshot, Trainer, TrainerError};
