//! Commute Story Core — shared abstractions.
//!
//! This crate defines the observable value cell, the observer registry that
//! backs it, and the error type shared by the narrative crates. It contains
//! no presentation content.

pub mod error;
pub mod observable;
pub mod observer;
