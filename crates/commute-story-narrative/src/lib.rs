//! Commute Story — Narrative State.
//!
//! Owns the fixed chapter catalog of the commuting presentation and the two
//! reactive cells the scroll tracker drives: the current chapter index and
//! the scroll progress fraction.

pub mod application;
pub mod config;
pub mod domain;
