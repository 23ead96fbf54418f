//! Shared test doubles for the Commute Story crates.

mod observer;

pub use observer::RecordingObserver;
