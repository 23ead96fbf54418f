//! Domain model for the narrative state.

pub mod chapters;
pub mod commands;
pub mod events;
pub mod state;
